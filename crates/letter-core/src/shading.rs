//! CPU reference of the shader-resident fold transform and shading.
//!
//! The WGSL sources in `shaders/` are the render path; the functions here
//! mirror them formula-for-formula so the numeric contract (hinge tests,
//! face-dependent color selection, multiply-then-mix layering, Lambert
//! term) can be verified on the host without a GPU.

use crate::constants::{
    FLAP_ANGLE_SIDE, FLAP_ANGLE_VERTICAL, HINGE_BOTTOM, HINGE_LEFT, HINGE_RIGHT, HINGE_TOP,
    LETTER_HINGE_Y, LETTER_MAX_ANGLE, LETTER_PIVOT_Z, PIVOT_BOTTOM, PIVOT_LEFT, PIVOT_RIGHT,
    PIVOT_TOP, SHADOW_BOTTOM, SHADOW_LEFT, SHADOW_LETTER, SHADOW_RIGHT, SHADOW_TOP,
};
use glam::{Vec3, Vec4};

/// Rodrigues rotation of `p` by `angle` radians around the line through
/// `origin` with direction `axis` (unit length).
pub fn rotate_around(p: Vec3, angle: f32, axis: Vec3, origin: Vec3) -> Vec3 {
    let diff = p - origin;
    let c = angle.cos();
    let s = angle.sin();
    let t = 1.0 - c;
    origin + diff * c + axis.cross(diff) * s + axis * axis.dot(diff) * t
}

/// Per-flap fold amounts in \[0, 1\]; 1 = fully folded shut.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EnvelopeFolds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl EnvelopeFolds {
    /// The lid animation only drives the top flap; the other three stay
    /// folded shut.
    pub fn from_lid_progress(progress: f32) -> Self {
        Self {
            left: 1.0,
            right: 1.0,
            bottom: 1.0,
            top: 1.0 - progress,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FoldedVertex {
    pub position: Vec3,
    /// Synthetic self-shadow factor in \[0, 1\]; 1 = unshadowed.
    pub shadow: f32,
}

/// Vertex stage of the envelope fold. Vertices beyond a hinge line rotate
/// rigidly about that hinge; everything on the body side never moves.
pub fn fold_envelope_vertex(pos: Vec3, folds: EnvelopeFolds) -> FoldedVertex {
    let mut p = pos;
    let mut shadow = 1.0;
    let x_axis = Vec3::X;
    let y_axis = Vec3::Y;

    if p.x < HINGE_LEFT {
        let angle = folds.left * FLAP_ANGLE_SIDE;
        p = rotate_around(p, angle, y_axis, Vec3::new(HINGE_LEFT, 0.0, PIVOT_LEFT));
        shadow -= folds.left * SHADOW_LEFT;
    }
    if p.x > HINGE_RIGHT {
        let angle = -folds.right * FLAP_ANGLE_SIDE;
        p = rotate_around(p, angle, y_axis, Vec3::new(HINGE_RIGHT, 0.0, PIVOT_RIGHT));
        shadow -= folds.right * SHADOW_RIGHT;
    }
    if p.y < HINGE_BOTTOM {
        let angle = -folds.bottom * FLAP_ANGLE_VERTICAL;
        p = rotate_around(p, angle, x_axis, Vec3::new(0.0, HINGE_BOTTOM, PIVOT_BOTTOM));
        shadow -= folds.bottom * SHADOW_BOTTOM;
    }
    if p.y > HINGE_TOP {
        let angle = folds.top * FLAP_ANGLE_VERTICAL;
        p = rotate_around(p, angle, x_axis, Vec3::new(0.0, HINGE_TOP, PIVOT_TOP));
        shadow -= folds.top * SHADOW_TOP;
    }
    FoldedVertex {
        position: p,
        shadow,
    }
}

/// Vertex stage of the letter centerfold. Returns the folded vertex and
/// the adjusted object-space normal (the upper half reports a bent normal
/// until the sheet is nearly flat).
pub fn fold_letter_vertex(pos: Vec3, unfold: f32) -> (FoldedVertex, Vec3) {
    let mut p = pos;
    let mut shadow = 1.0;
    let mut normal = Vec3::Z;

    if p.y > LETTER_HINGE_Y {
        let angle = LETTER_MAX_ANGLE * (1.0 - unfold);
        p = rotate_around(
            p,
            angle,
            Vec3::X,
            Vec3::new(0.0, LETTER_HINGE_Y, LETTER_PIVOT_Z),
        );
        if unfold < 0.9 {
            normal = Vec3::new(0.0, -1.0, 0.5);
        }
        shadow -= (1.0 - unfold) * SHADOW_LETTER;
    }
    (
        FoldedVertex {
            position: p,
            shadow,
        },
        normal,
    )
}

/// Face-dependent surface color of the envelope, pre-lighting.
///
/// The flat plane's geometric front face carries the inner paper color;
/// the outer tint (optionally multiplied by the pattern texture) lives on
/// the back face, which points outward once the flaps fold shut.
pub fn envelope_surface_color(
    base_color: Vec3,
    inner_color: Vec3,
    pattern: Option<Vec3>,
    front_facing: bool,
) -> Vec3 {
    if front_facing {
        inner_color
    } else {
        match pattern {
            Some(tex) => base_color * tex,
            None => base_color,
        }
    }
}

/// Layered letter color, pre-lighting. Tints combine by component-wise
/// multiplication; the content overlay alpha-blends on top via `mix`, and
/// only on the front face. The order is part of the contract.
pub fn letter_surface_color(
    base_color: Vec3,
    grain: Vec3,
    pattern: Option<Vec3>,
    content: Option<Vec4>,
    front_facing: bool,
) -> Vec3 {
    let mut color = base_color * grain;
    if let Some(tex) = pattern {
        color *= tex;
    }
    if front_facing {
        if let Some(overlay) = content {
            color = color.lerp(overlay.truncate(), overlay.w);
        }
    }
    color
}

/// Fixed directional-light Lambertian term over a constant ambient floor,
/// modulated by the vertex stage's synthetic shadow.
pub fn lambert(normal: Vec3, light_dir: Vec3, shadow: f32) -> Vec3 {
    let diff = normal.normalize().dot(light_dir.normalize()).max(0.0);
    (Vec3::splat(0.6) + Vec3::splat(0.4) * diff) * shadow
}

/// Light directions (mirrored in the WGSL sources).
pub const ENVELOPE_LIGHT_DIR: Vec3 = Vec3::new(0.5, 0.5, 1.0);
pub const LETTER_LIGHT_DIR: Vec3 = Vec3::new(0.5, 0.8, 1.0);
