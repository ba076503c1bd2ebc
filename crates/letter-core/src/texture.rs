//! Procedural texture generation.
//!
//! Every texture the scene needs before the user picks anything is
//! synthesized here: the envelope silhouette cutout, the paper grain noise
//! and the blank fallback paper. No file or network dependency. Generators
//! never fail; a degenerate request degrades to a 1x1 placeholder so
//! non-visual code paths keep working.

use crate::constants::{
    ENVELOPE_WORLD_W, GRAIN_MAX, GRAIN_MIN, MASK_BODY_DEPTH, MASK_BODY_HALF_W, MASK_FLAP_HEIGHT,
    MASK_TIP_RADIUS, MASK_WING_X,
};
use rand::Rng;
use std::sync::Once;

/// CPU-side RGBA8 image ready for GPU upload.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8 rows, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl TextureImage {
    fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            pixels.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Sample the nearest pixel for normalized coordinates in \[0, 1\].
    pub fn sample(&self, u: f32, v: f32) -> [u8; 4] {
        let x = ((u.clamp(0.0, 1.0) * self.width as f32) as u32).min(self.width - 1);
        let y = ((v.clamp(0.0, 1.0) * self.height as f32) as u32).min(self.height - 1);
        self.pixel(x, y)
    }
}

static DEGRADED_WARN: Once = Once::new();

/// 1x1 opaque white stand-in used when a generator cannot produce a real
/// image (zero-sized request). Logged once per process.
fn placeholder(what: &str) -> TextureImage {
    DEGRADED_WARN.call_once(|| {
        log::warn!("texture generator degraded to 1x1 placeholder ({what})");
    });
    TextureImage::filled(1, 1, [255, 255, 255, 255])
}

/// The opened-envelope silhouette as an alpha cutout: opaque white inside
/// the polygon, fully transparent outside. The fold shader discards
/// fragments whose red sample is below 0.1. Deterministic.
pub fn envelope_mask(width: u32, height: u32) -> TextureImage {
    if width == 0 || height == 0 {
        return placeholder("envelope_mask");
    }
    let polygon = silhouette_polygon();
    let scale = width as f32 / ENVELOPE_WORLD_W;
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);

    let mut img = TextureImage::filled(width, height, [0, 0, 0, 0]);
    for py in 0..height {
        // pixel center -> world coordinates (y axis points up in world)
        let wy = (cy - (py as f32 + 0.5)) / scale;
        for px in 0..width {
            let wx = (px as f32 + 0.5 - cx) / scale;
            if point_in_polygon(wx, wy, &polygon) {
                let i = ((py * width + px) * 4) as usize;
                img.pixels[i..i + 4].copy_from_slice(&[255, 255, 255, 255]);
            }
        }
    }
    img
}

/// Near-white noise tile: every pixel gets an independent gray luminance in
/// `[GRAIN_MIN, GRAIN_MAX]`. Must be sampled with repeat addressing.
pub fn paper_grain(size: u32) -> TextureImage {
    paper_grain_with_rng(size, &mut rand::thread_rng())
}

/// Seeded variant used by tests; same statistics as [`paper_grain`].
pub fn paper_grain_with_rng<R: Rng>(size: u32, rng: &mut R) -> TextureImage {
    if size == 0 {
        return placeholder("paper_grain");
    }
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for _ in 0..size * size {
        let v: u8 = rng.gen_range(GRAIN_MIN..=GRAIN_MAX);
        pixels.extend_from_slice(&[v, v, v, 255]);
    }
    TextureImage {
        width: size,
        height: size,
        pixels,
    }
}

/// Flat white fallback paper, used until a pattern or content image is set.
pub fn blank_paper(width: u32, height: u32) -> TextureImage {
    if width == 0 || height == 0 {
        return placeholder("blank_paper");
    }
    TextureImage::filled(width, height, [255, 255, 255, 255])
}

/// The silhouette outline in world units: a pointed top flap with a rounded
/// tip, wide wing tips at y=0 and a tapering lower body. The quadratic tip
/// is flattened into line segments.
fn silhouette_polygon() -> Vec<(f32, f32)> {
    let h = MASK_FLAP_HEIGHT;
    let w = MASK_WING_X;
    let b = MASK_BODY_DEPTH;
    let bw = MASK_BODY_HALF_W;
    let r = MASK_TIP_RADIUS;

    let mut pts = Vec::with_capacity(24);
    pts.push((-r, h - r));
    // quadratic from (-r, h-r) through control (0, h) to (r, h-r)
    const TIP_STEPS: u32 = 16;
    for i in 1..=TIP_STEPS {
        let t = i as f32 / TIP_STEPS as f32;
        let mt = 1.0 - t;
        let x = mt * mt * -r + t * t * r;
        let y = mt * mt * (h - r) + 2.0 * mt * t * h + t * t * (h - r);
        pts.push((x, y));
    }
    pts.push((w, 0.0));
    pts.push((bw, -b));
    pts.push((-bw, -b));
    pts.push((-w, 0.0));
    pts
}

/// Even-odd ray cast against a closed polygon.
fn point_in_polygon(x: f32, y: f32, polygon: &[(f32, f32)]) -> bool {
    let mut inside = false;
    let n = polygon.len();
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = polygon[i];
        let (xj, yj) = polygon[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
