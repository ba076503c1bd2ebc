// Shared tuning constants for the envelope/letter scene. The hinge and
// pivot values are empirically tuned for the silhouette artwork; they are
// configuration, not derived quantities. Values marked "mirrored" are
// duplicated in the WGSL sources because shader constants cannot be
// included from Rust.

// World-space dimensions of the flat planes before folding
pub const ENVELOPE_WORLD_W: f32 = 7.0;
pub const ENVELOPE_WORLD_H: f32 = 7.0;
pub const LETTER_WORLD_W: f32 = ENVELOPE_WORLD_W * 0.55;
pub const LETTER_WORLD_H: f32 = 4.0;

// Plane tessellation (dense enough for smooth fold creases)
pub const ENVELOPE_SEGMENTS: u32 = 128;
pub const LETTER_SEGMENTS_X: u32 = 32;
pub const LETTER_SEGMENTS_Y: u32 = 64;

// Envelope hinge lines (mirrored in shaders/envelope.wgsl)
pub const HINGE_RIGHT: f32 = 2.1;
pub const HINGE_LEFT: f32 = -2.1;
pub const HINGE_TOP: f32 = 1.1;
pub const HINGE_BOTTOM: f32 = -1.1;

// Pivot depth offsets give each crease a slight curvature
pub const PIVOT_LEFT: f32 = 0.021;
pub const PIVOT_RIGHT: f32 = 0.021;
pub const PIVOT_BOTTOM: f32 = 0.022;
pub const PIVOT_TOP: f32 = 0.023;

// Fold angles per flap, just under a half turn (mirrored in WGSL)
pub const FLAP_ANGLE_SIDE: f32 = 3.12;
pub const FLAP_ANGLE_VERTICAL: f32 = 3.13;

// Letter centerfold (mirrored in shaders/letter.wgsl)
pub const LETTER_HINGE_Y: f32 = 0.0;
pub const LETTER_MAX_ANGLE: f32 = 3.14;
pub const LETTER_PIVOT_Z: f32 = 0.01;

// Synthetic self-shadow strength per flap while it is still folded
pub const SHADOW_LEFT: f32 = 0.15;
pub const SHADOW_RIGHT: f32 = 0.2;
pub const SHADOW_BOTTOM: f32 = 0.25;
pub const SHADOW_TOP: f32 = 0.15;
pub const SHADOW_LETTER: f32 = 0.4;

// Animation controller
pub const SNAP_EPSILON: f32 = 0.005; // snap-to-target threshold
pub const ENVELOPE_FOLD_RATE: f32 = 2.0; // flap snap, faster
pub const LETTER_FOLD_RATE: f32 = 0.8; // slow float-out

// Letter travel sub-phase windows over fold progress
pub const PHASE_LIFT: (f32, f32) = (0.0, 0.4);
pub const PHASE_TRAVEL: (f32, f32) = (0.4, 0.75);
pub const PHASE_UNFOLD: (f32, f32) = (0.7, 1.0);

// Letter travel waypoints
pub const LETTER_INSIDE_Z: f32 = 0.01;
pub const LETTER_OUTSIDE_Z: f32 = 1.5;
pub const LETTER_START_Y: f32 = 1.0;
pub const LETTER_PEAK_Y: f32 = 3.1;
pub const LETTER_CENTER_Y: f32 = 0.5;
pub const LETTER_TILT_X: f32 = -0.1; // slight backward tilt while travelling

// Envelope silhouette polygon, in world units (see texture::envelope_mask)
pub const MASK_FLAP_HEIGHT: f32 = 3.2;
pub const MASK_WING_X: f32 = 3.2;
pub const MASK_BODY_DEPTH: f32 = 2.2;
pub const MASK_BODY_HALF_W: f32 = 1.0;
pub const MASK_TIP_RADIUS: f32 = 0.4;

// Default texture sizes
pub const MASK_SIZE: u32 = 1024;
pub const GRAIN_SIZE: u32 = 512;
pub const PAPER_W: u32 = 512;
pub const PAPER_H: u32 = 1024;

// Paper grain luminance range, near-white with subtle variance
pub const GRAIN_MIN: u8 = 230;
pub const GRAIN_MAX: u8 = 255;

// Presentation group bobbing (gentle idle float)
pub const FLOAT_SPEED: f32 = 2.0;
pub const FLOAT_AMPLITUDE: f32 = 0.1;
pub const FLOAT_ROLL: f32 = 0.02;

// Default palette
pub const DEFAULT_ENVELOPE_COLOR: &str = "#ffffff";
pub const DEFAULT_ENVELOPE_INNER: &str = "#f4f4f4";
pub const DEFAULT_LETTER_COLOR: &str = "#fdf4e3";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#111111";
