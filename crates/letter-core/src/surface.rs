//! Per-surface visual state and the GPU uniform structs built from it.
//!
//! Styles hold plain data (colors as linear RGB vectors, texture sources as
//! opaque URI/path strings); the renderer resolves sources into GPU
//! textures and is told only "has pattern / has content" via packed flags.

use crate::constants::{
    DEFAULT_ENVELOPE_COLOR, DEFAULT_ENVELOPE_INNER, DEFAULT_LETTER_COLOR,
};
use crate::shading::EnvelopeFolds;
use glam::{Mat4, Vec3};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// Parse `#rgb` or `#rrggbb` into an RGB vector with components in \[0, 1\].
pub fn parse_hex(s: &str) -> Result<Vec3, ColorError> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    let invalid = || ColorError::InvalidHex(s.to_string());
    let byte = |h: &str| u8::from_str_radix(h, 16).map_err(|_| invalid());
    match hex.len() {
        3 => {
            let mut c = [0.0f32; 3];
            for (i, ch) in hex.chars().enumerate() {
                let v = byte(&ch.to_string())?;
                c[i] = (v * 16 + v) as f32 / 255.0;
            }
            Ok(Vec3::from_array(c))
        }
        6 => Ok(Vec3::new(
            byte(&hex[0..2])? as f32 / 255.0,
            byte(&hex[2..4])? as f32 / 255.0,
            byte(&hex[4..6])? as f32 / 255.0,
        )),
        _ => Err(invalid()),
    }
}

/// Envelope skin: outer tint, reverse-face tint and an optional pattern
/// image applied to the outer face.
#[derive(Clone, Debug, PartialEq)]
pub struct EnvelopeStyle {
    pub base_color: Vec3,
    pub inner_color: Vec3,
    pub pattern: Option<String>,
    pub name: String,
}

impl Default for EnvelopeStyle {
    fn default() -> Self {
        Self {
            base_color: parse_hex(DEFAULT_ENVELOPE_COLOR).unwrap_or(Vec3::ONE),
            inner_color: parse_hex(DEFAULT_ENVELOPE_INNER).unwrap_or(Vec3::ONE),
            pattern: None,
            name: "Default".to_string(),
        }
    }
}

/// Letter sheet: paper tint, an optional pattern image shown on both faces
/// and an optional content image (photo/handwriting) shown only on the
/// front face.
#[derive(Clone, Debug, PartialEq)]
pub struct LetterStyle {
    pub base_color: Vec3,
    pub pattern: Option<String>,
    pub content: Option<String>,
    pub name: String,
}

impl Default for LetterStyle {
    fn default() -> Self {
        Self {
            base_color: parse_hex(DEFAULT_LETTER_COLOR).unwrap_or(Vec3::ONE),
            pattern: None,
            content: None,
            name: "Default".to_string(),
        }
    }
}

// ---------------- GPU uniform structs ----------------
//
// Layouts match shaders/envelope.wgsl and shaders/letter.wgsl. Colors pack
// a flag or scalar into the w lane to keep 16-byte alignment without pads.

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct EnvelopeUniforms {
    pub model: [[f32; 4]; 4],
    pub view_proj: [[f32; 4]; 4],
    /// rgb = outer tint, w = 1.0 when a pattern texture is bound
    pub base_color: [f32; 4],
    /// rgb = inner tint, w unused
    pub inner_color: [f32; 4],
    /// x = left, y = right, z = bottom, w = top fold amount
    pub folds: [f32; 4],
}

impl EnvelopeUniforms {
    pub fn new(style: &EnvelopeStyle, folds: EnvelopeFolds, model: Mat4, view_proj: Mat4) -> Self {
        let has_pattern = if style.pattern.is_some() { 1.0 } else { 0.0 };
        Self {
            model: model.to_cols_array_2d(),
            view_proj: view_proj.to_cols_array_2d(),
            base_color: [
                style.base_color.x,
                style.base_color.y,
                style.base_color.z,
                has_pattern,
            ],
            inner_color: [
                style.inner_color.x,
                style.inner_color.y,
                style.inner_color.z,
                0.0,
            ],
            folds: [folds.left, folds.right, folds.bottom, folds.top],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LetterUniforms {
    pub model: [[f32; 4]; 4],
    pub view_proj: [[f32; 4]; 4],
    /// rgb = paper tint, w = unfold scalar
    pub base_color: [f32; 4],
    /// x = has pattern, y = has content, z/w unused
    pub flags: [f32; 4],
}

impl LetterUniforms {
    pub fn new(style: &LetterStyle, unfold: f32, model: Mat4, view_proj: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            view_proj: view_proj.to_cols_array_2d(),
            base_color: [
                style.base_color.x,
                style.base_color.y,
                style.base_color.z,
                unfold,
            ],
            flags: [
                if style.pattern.is_some() { 1.0 } else { 0.0 },
                if style.content.is_some() { 1.0 } else { 0.0 },
                0.0,
                0.0,
            ],
        }
    }
}
