//! Scene composition state: the two visual objects, the background, the
//! open/close intents and the per-frame advance that turns all of it into
//! plain render state.
//!
//! Everything here is synchronous and frame-driven; the host calls
//! [`SceneState::advance`] once per displayed frame with a delta-time and
//! draws from the returned [`RenderState`].

use crate::assets::{AssetItem, AssetKind};
use crate::constants::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_ENVELOPE_INNER, ENVELOPE_FOLD_RATE, FLOAT_AMPLITUDE,
    FLOAT_ROLL, FLOAT_SPEED, LETTER_FOLD_RATE,
};
use crate::fold::{letter_pose, FoldAnimator, FoldPhase, LetterPose};
use crate::shading::EnvelopeFolds;
use crate::surface::{parse_hex, EnvelopeStyle, LetterStyle};
use glam::Vec3;

/// Which surface a user-supplied image lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadTarget {
    /// Outer pattern of the envelope.
    Envelope,
    /// Paper pattern of the letter (both faces).
    Paper,
    /// Letter content overlay (front face only).
    Content,
    /// Scene background image.
    Background,
}

/// Scene-level backdrop: a flat color, optionally covered by an image.
#[derive(Clone, Debug, PartialEq)]
pub struct Background {
    pub color: Vec3,
    pub image: Option<String>,
    pub name: String,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            color: parse_hex(DEFAULT_BACKGROUND_COLOR).unwrap_or(Vec3::ZERO),
            image: None,
            name: "Minimal".to_string(),
        }
    }
}

/// One-shot notifications emitted by [`SceneState::advance`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneEvent {
    /// The envelope lid finished opening (`true`) or closing (`false`).
    LidSettled(bool),
    /// The letter finished floating out (`true`) or tucking back (`false`).
    LetterSettled(bool),
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Copy, Debug)]
pub struct RenderState {
    pub lid_progress: f32,
    pub envelope_folds: EnvelopeFolds,
    pub letter_progress: f32,
    pub letter_pose: LetterPose,
    /// Idle bobbing of the whole presentation group.
    pub float_y: f32,
    pub float_roll: f32,
    pub background_color: Vec3,
}

pub struct SceneState {
    pub envelope: EnvelopeStyle,
    pub letter: LetterStyle,
    pub background: Background,
    lid_open: bool,
    letter_open: bool,
    speed: f32,
    lid_fold: FoldAnimator,
    letter_fold: FoldAnimator,
    clock: f32,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneState {
    pub fn new() -> Self {
        Self {
            envelope: EnvelopeStyle::default(),
            letter: LetterStyle::default(),
            background: Background::default(),
            lid_open: false,
            letter_open: false,
            speed: 1.0,
            lid_fold: FoldAnimator::new(ENVELOPE_FOLD_RATE),
            letter_fold: FoldAnimator::new(LETTER_FOLD_RATE),
            clock: 0.0,
        }
    }

    pub fn lid_open(&self) -> bool {
        self.lid_open
    }

    pub fn letter_open(&self) -> bool {
        self.letter_open
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Animation speed multiplier; zero pauses, non-finite values are
    /// rejected.
    pub fn set_speed(&mut self, speed: f32) {
        if speed.is_finite() && speed >= 0.0 {
            self.speed = speed;
        }
    }

    pub fn lid_phase(&self) -> FoldPhase {
        self.lid_fold.phase()
    }

    pub fn letter_phase(&self) -> FoldPhase {
        self.letter_fold.phase()
    }

    /// Open or close the envelope lid. Closing the lid while the letter is
    /// shown also tucks the letter back in: letter visibility implies an
    /// open lid.
    pub fn toggle_lid(&mut self) {
        self.lid_open = !self.lid_open;
        if !self.lid_open {
            self.letter_open = false;
        }
    }

    /// Float the letter out or back. Ignored while the lid is closed;
    /// returns whether the toggle applied.
    pub fn toggle_letter(&mut self) -> bool {
        if !self.lid_open {
            return false;
        }
        self.letter_open = !self.letter_open;
        true
    }

    pub fn set_envelope_color(&mut self, color: Vec3) {
        self.envelope.base_color = color;
    }

    pub fn set_envelope_inner_color(&mut self, color: Vec3) {
        self.envelope.inner_color = color;
    }

    pub fn set_letter_color(&mut self, color: Vec3) {
        self.letter.base_color = color;
    }

    /// Background color selection clears any background image; the reverse
    /// (setting an image) keeps the color as the fallback underneath.
    pub fn set_background_color(&mut self, color: Vec3) {
        self.background.color = color;
        self.background.image = None;
        self.background.name = "Custom Color".to_string();
    }

    pub fn clear_background_image(&mut self) {
        self.background.image = None;
        self.background.name = "Custom Color".to_string();
    }

    /// Route a user-supplied image (object URL, data URI or file path) to
    /// its surface. The core does not inspect the source; decode failures
    /// are the renderer's local-recovery problem.
    pub fn set_upload(&mut self, target: UploadTarget, source: String) {
        match target {
            UploadTarget::Envelope => {
                self.envelope.pattern = Some(source);
                self.envelope.name = "Custom Image".to_string();
            }
            UploadTarget::Paper => {
                self.letter.pattern = Some(source);
                self.letter.name = "Custom Image".to_string();
            }
            UploadTarget::Content => {
                self.letter.content = Some(source);
            }
            UploadTarget::Background => {
                self.background.image = Some(source);
                self.background.name = "Custom Image".to_string();
            }
        }
    }

    /// Remove the custom image for a target, falling back to the tint (or
    /// generated paper) underneath.
    pub fn clear_upload(&mut self, target: UploadTarget) {
        match target {
            UploadTarget::Envelope => {
                self.envelope.pattern = None;
                self.envelope.name = "Custom Color".to_string();
            }
            UploadTarget::Paper => {
                self.letter.pattern = None;
                self.letter.name = "Custom Color".to_string();
            }
            UploadTarget::Content => {
                self.letter.content = None;
            }
            UploadTarget::Background => self.clear_background_image(),
        }
    }

    /// Apply a catalog item to the surface its kind belongs to. Picking an
    /// envelope skin resets the inner color to the default so the reverse
    /// face does not clash with the new skin.
    pub fn apply_asset(&mut self, kind: AssetKind, item: &AssetItem) {
        let color = parse_hex(item.fallback_color).unwrap_or(Vec3::ONE);
        match kind {
            AssetKind::Envelope => {
                self.envelope.base_color = color;
                self.envelope.pattern = Some(item.image.to_string());
                self.envelope.name = item.name.to_string();
                self.envelope.inner_color =
                    parse_hex(DEFAULT_ENVELOPE_INNER).unwrap_or(Vec3::ONE);
            }
            AssetKind::Paper => {
                self.letter.base_color = color;
                self.letter.pattern = Some(item.image.to_string());
                self.letter.name = item.name.to_string();
            }
            AssetKind::Background => {
                self.background.color = color;
                self.background.image = Some(item.image.to_string());
                self.background.name = item.name.to_string();
            }
        }
    }

    /// Advance both fold animators by one frame and collect completion
    /// events. Uniform values derived from the result must be written
    /// before the frame's draw calls consume them.
    pub fn advance(&mut self, dt_sec: f32, events: &mut Vec<SceneEvent>) -> RenderState {
        let dt = dt_sec.max(0.0);
        self.clock += dt;

        let (lid_progress, lid_done) = self.lid_fold.advance(dt, self.lid_open, self.speed);
        if let Some(open) = lid_done {
            events.push(SceneEvent::LidSettled(open));
        }
        let (letter_progress, letter_done) =
            self.letter_fold.advance(dt, self.letter_open, self.speed);
        if let Some(open) = letter_done {
            events.push(SceneEvent::LetterSettled(open));
        }

        RenderState {
            lid_progress,
            envelope_folds: EnvelopeFolds::from_lid_progress(lid_progress),
            letter_progress,
            letter_pose: letter_pose(letter_progress),
            float_y: (self.clock * FLOAT_SPEED).sin() * FLOAT_AMPLITUDE,
            float_roll: (self.clock * FLOAT_SPEED * 0.7).sin() * FLOAT_ROLL,
            background_color: self.background.color,
        }
    }
}
