// Tests for the CPU reference of the fold transform and fragment shading.
// These pin down the numeric contract the WGSL sources must match.

use glam::{Vec3, Vec4};
use letter_core::constants::{
    HINGE_BOTTOM, HINGE_LEFT, HINGE_RIGHT, HINGE_TOP, SHADOW_LEFT, SHADOW_TOP,
};
use letter_core::shading::{
    envelope_surface_color, fold_envelope_vertex, fold_letter_vertex, lambert, letter_surface_color,
    rotate_around, EnvelopeFolds, ENVELOPE_LIGHT_DIR, LETTER_LIGHT_DIR,
};

const ALL_FOLDED: EnvelopeFolds = EnvelopeFolds {
    left: 1.0,
    right: 1.0,
    bottom: 1.0,
    top: 1.0,
};

fn close(a: Vec3, b: Vec3, tol: f32) -> bool {
    (a - b).length() < tol
}

#[test]
fn rotate_around_zero_angle_is_identity() {
    let p = Vec3::new(1.3, -0.2, 0.7);
    let q = rotate_around(p, 0.0, Vec3::Y, Vec3::new(5.0, 0.0, 1.0));
    assert!(close(p, q, 1e-6));
}

#[test]
fn rotate_around_half_turn_mirrors_through_the_pivot() {
    // half turn about the x-axis line through the origin
    let q = rotate_around(Vec3::new(0.0, 1.0, 0.0), std::f32::consts::PI, Vec3::X, Vec3::ZERO);
    assert!(close(q, Vec3::new(0.0, -1.0, 0.0), 1e-5), "got {q}");
}

#[test]
fn envelope_body_never_moves() {
    // vertices on the near side of every hinge are rigid for any fold state
    let body = [
        Vec3::ZERO,
        Vec3::new(2.0, 1.0, 0.0),
        Vec3::new(-2.0, -1.0, 0.0),
        Vec3::new(HINGE_RIGHT, HINGE_TOP, 0.0),
        Vec3::new(HINGE_LEFT, HINGE_BOTTOM, 0.0),
    ];
    for folds in [ALL_FOLDED, EnvelopeFolds::from_lid_progress(0.5)] {
        for &v in &body {
            let folded = fold_envelope_vertex(v, folds);
            assert!(close(folded.position, v, 1e-6), "body vertex {v} moved");
            assert_eq!(folded.shadow, 1.0, "body vertex {v} shadowed");
        }
    }
}

#[test]
fn flaps_fold_inward_toward_the_body() {
    // a fully folded right flap swings across the hinge toward the center
    let tip = Vec3::new(3.2, 0.0, 0.0);
    let folded = fold_envelope_vertex(tip, ALL_FOLDED);
    assert!(
        folded.position.x < HINGE_RIGHT,
        "right flap tip should cross back over its hinge, got {}",
        folded.position
    );
    // an unfolded flap stays put
    let open = fold_envelope_vertex(tip, EnvelopeFolds::default());
    assert!(close(open.position, tip, 1e-6));
}

#[test]
fn lid_progress_only_releases_the_top_flap() {
    let folds = EnvelopeFolds::from_lid_progress(1.0);
    assert_eq!(folds.top, 0.0);
    assert_eq!((folds.left, folds.right, folds.bottom), (1.0, 1.0, 1.0));

    let lid_tip = Vec3::new(0.0, 3.0, 0.0);
    let open = fold_envelope_vertex(lid_tip, folds);
    assert!(close(open.position, lid_tip, 1e-6), "open lid must lie flat");
    let shut = fold_envelope_vertex(lid_tip, ALL_FOLDED);
    assert!(
        shut.position.y < HINGE_TOP,
        "shut lid should fold down over the body, got {}",
        shut.position
    );
}

#[test]
fn fold_shadow_darkens_near_active_hinges() {
    let left = fold_envelope_vertex(Vec3::new(-3.0, 0.0, 0.0), ALL_FOLDED);
    assert!((left.shadow - (1.0 - SHADOW_LEFT)).abs() < 1e-6);

    // a corner vertex beyond two hinges accumulates both decrements
    let corner = fold_envelope_vertex(Vec3::new(-3.0, 2.0, 0.0), ALL_FOLDED);
    assert!((corner.shadow - (1.0 - SHADOW_LEFT - SHADOW_TOP)).abs() < 1e-6);

    // half-open top flap shadows half as much
    let half = fold_envelope_vertex(Vec3::new(0.0, 2.0, 0.0), EnvelopeFolds::from_lid_progress(0.5));
    assert!((half.shadow - (1.0 - 0.5 * SHADOW_TOP)).abs() < 1e-6);
}

#[test]
fn letter_lower_half_is_rigid() {
    for &v in &[Vec3::new(0.5, -1.0, 0.0), Vec3::new(-1.0, 0.0, 0.0)] {
        for unfold in [0.0, 0.5, 1.0] {
            let (folded, normal) = fold_letter_vertex(v, unfold);
            assert!(close(folded.position, v, 1e-6));
            assert_eq!(folded.shadow, 1.0);
            assert_eq!(normal, Vec3::Z);
        }
    }
}

#[test]
fn letter_upper_half_folds_over_and_flattens() {
    let top = Vec3::new(0.0, 1.0, 0.0);

    // fully folded: the upper half lies over the lower half
    let (shut, bent_normal) = fold_letter_vertex(top, 0.0);
    assert!(shut.position.y < -0.9, "folded top should mirror downward, got {}", shut.position);
    assert!((shut.shadow - 0.6).abs() < 1e-6, "full crease shadow");
    assert_ne!(bent_normal, Vec3::Z, "folded half reports a bent normal");

    // fully unfolded: flat, unshadowed, normal restored
    let (flat, normal) = fold_letter_vertex(top, 1.0);
    assert!(close(flat.position, top, 2e-3), "residual fold {}", flat.position);
    assert_eq!(flat.shadow, 1.0);
    assert_eq!(normal, Vec3::Z);
}

// --- fragment-path mirrors ---

#[test]
fn envelope_faces_select_inner_and_outer_colors() {
    let outer = Vec3::ONE; // #ffffff
    let inner = Vec3::ZERO; // #000000
    assert_eq!(
        envelope_surface_color(outer, inner, None, true),
        inner,
        "front face carries the inner color"
    );
    assert_eq!(
        envelope_surface_color(outer, inner, None, false),
        outer,
        "back face carries the outer color"
    );
}

#[test]
fn envelope_pattern_multiplies_the_outer_face_only() {
    let outer = Vec3::new(1.0, 0.5, 1.0);
    let inner = Vec3::splat(0.25);
    let tex = Vec3::new(0.5, 0.5, 1.0);
    assert_eq!(
        envelope_surface_color(outer, inner, Some(tex), false),
        outer * tex
    );
    assert_eq!(
        envelope_surface_color(outer, inner, Some(tex), true),
        inner,
        "pattern must not leak onto the inner face"
    );
}

#[test]
fn letter_overlay_shows_only_on_the_front_face() {
    let base = Vec3::splat(0.8);
    let grain = Vec3::ONE;
    let overlay = Vec4::new(0.9, 0.1, 0.1, 1.0);

    let front = letter_surface_color(base, grain, None, Some(overlay), true);
    assert!(close(front, overlay.truncate(), 1e-6), "opaque overlay wins on front");

    let back = letter_surface_color(base, grain, None, Some(overlay), false);
    assert!(close(back, base, 1e-6), "back face ignores the overlay");
}

#[test]
fn letter_layering_is_multiply_then_mix() {
    let base = Vec3::splat(0.5);
    let grain = Vec3::splat(0.8);
    let pattern = Vec3::splat(0.5);
    let overlay = Vec4::new(1.0, 1.0, 1.0, 0.5);

    // tints multiply: 0.5 * 0.8 * 0.5 = 0.2, then mix toward 1.0 by alpha
    let color = letter_surface_color(base, grain, Some(pattern), Some(overlay), true);
    assert!(close(color, Vec3::splat(0.6), 1e-6), "got {color}");

    // without the overlay the multiplied stack is untouched
    let plain = letter_surface_color(base, grain, Some(pattern), None, true);
    assert!(close(plain, Vec3::splat(0.2), 1e-6));
}

#[test]
fn lambert_blends_ambient_floor_and_diffuse() {
    // normal facing straight into the light: full term
    let lit = lambert(ENVELOPE_LIGHT_DIR, ENVELOPE_LIGHT_DIR, 1.0);
    assert!(close(lit, Vec3::ONE, 1e-6));

    // perpendicular normal: ambient floor only
    let side = lambert(Vec3::new(ENVELOPE_LIGHT_DIR.y, -ENVELOPE_LIGHT_DIR.x, 0.0), ENVELOPE_LIGHT_DIR, 1.0);
    assert!(close(side, Vec3::splat(0.6), 1e-5));

    // the synthetic fold shadow scales the whole term
    let shadowed = lambert(LETTER_LIGHT_DIR, LETTER_LIGHT_DIR, 0.5);
    assert!(close(shadowed, Vec3::splat(0.5), 1e-6));
}
