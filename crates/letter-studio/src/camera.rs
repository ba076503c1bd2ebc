//! Orbit camera around the scene origin. The polar clamp keeps the view
//! from diving under the desk or flipping over the top.

use glam::{Mat4, Vec3};

pub const DEFAULT_DISTANCE: f32 = 9.0;
pub const MIN_DISTANCE: f32 = 4.0;
pub const MAX_DISTANCE: f32 = 20.0;
pub const MIN_POLAR: f32 = std::f32::consts::PI / 4.0;
pub const MAX_POLAR: f32 = std::f32::consts::PI / 1.5;

pub struct OrbitCamera {
    azimuth: f32,
    polar: f32,
    distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitCamera {
    /// Start straight-on at the default distance (the equator puts the eye
    /// on the +Z axis).
    pub fn new() -> Self {
        Self {
            azimuth: 0.0,
            polar: std::f32::consts::FRAC_PI_2,
            distance: DEFAULT_DISTANCE,
        }
    }

    pub fn drag(&mut self, dx: f32, dy: f32) {
        self.azimuth -= dx * 0.01;
        self.polar = (self.polar - dy * 0.01).clamp(MIN_POLAR, MAX_POLAR);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance - delta).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.distance * self.polar.sin() * self.azimuth.sin(),
            self.distance * self.polar.cos(),
            self.distance * self.polar.sin() * self.azimuth.cos(),
        )
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(45f32.to_radians(), aspect, 0.1, 100.0);
        let view = Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y);
        proj * view
    }
}
