//! Fold/unfold animation controllers.
//!
//! Each visual object owns one [`FoldAnimator`]: a scalar progress value in
//! \[0, 1\] advanced once per displayed frame toward a boolean target.
//! Settling is detected with a snap threshold so interpolation converges to
//! exactly 0 or 1, and the completion edge is reported at most once per
//! boolean transition regardless of how many frames the settling takes.

use crate::constants::{
    LETTER_CENTER_Y, LETTER_INSIDE_Z, LETTER_OUTSIDE_Z, LETTER_PEAK_Y, LETTER_START_Y,
    LETTER_TILT_X, PHASE_LIFT, PHASE_TRAVEL, PHASE_UNFOLD, SNAP_EPSILON,
};

/// Where an animator currently sits between its two rest states.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FoldPhase {
    /// Progress is still interpolating toward the target.
    Settling,
    /// Progress is exactly 0 or 1; carries the settled boolean state.
    Settled(bool),
}

#[derive(Clone, Debug)]
pub struct FoldAnimator {
    progress: f32,
    rate: f32,
    reported_open: bool,
    settled: bool,
}

impl FoldAnimator {
    /// `rate` is the per-object base smoothing rate; larger settles faster.
    pub fn new(rate: f32) -> Self {
        Self {
            progress: 0.0,
            rate,
            reported_open: false,
            settled: true,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn phase(&self) -> FoldPhase {
        if self.settled {
            FoldPhase::Settled(self.reported_open)
        } else {
            FoldPhase::Settling
        }
    }

    /// Advance one frame. Returns the updated progress plus `Some(open)`
    /// exactly once when the animator settles on a new boolean state.
    ///
    /// A non-finite `speed` skips the frame entirely; a zero speed is a
    /// legitimate pause. Negative delta-times are clamped to zero.
    pub fn advance(&mut self, dt_sec: f32, target_open: bool, speed: f32) -> (f32, Option<bool>) {
        if !speed.is_finite() {
            return (self.progress, None);
        }
        let dt = dt_sec.max(0.0);
        let target = if target_open { 1.0 } else { 0.0 };

        // Frame-time-scaled exponential smoothing. The step factor is capped
        // at 1 so a huge delta-time lands on the target instead of past it.
        let step = (dt * self.rate * speed).clamp(0.0, 1.0);
        self.progress += (target - self.progress) * step;

        if (self.progress - target).abs() < SNAP_EPSILON {
            self.progress = target;
            self.settled = true;
            if target_open != self.reported_open {
                self.reported_open = target_open;
                return (self.progress, Some(target_open));
            }
        } else {
            self.settled = false;
        }
        (self.progress, None)
    }
}

/// Hermite smoothstep over the window `[edge0, edge1]`.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Pose of the letter mesh derived from fold progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LetterPose {
    pub y: f32,
    pub z: f32,
    pub tilt_x: f32,
    /// Drives the shader's centerfold uniform; 1 = flat.
    pub unfold: f32,
}

/// Derive the three overlapping eased sub-phases from fold progress.
///
/// The visual order is intentional: lift upward first, then travel outward
/// while tilting slightly, then unfold flat. The windows overlap so the
/// unfold begins just before the travel completes.
pub fn letter_pose(progress: f32) -> LetterPose {
    let lift = smoothstep(PHASE_LIFT.0, PHASE_LIFT.1, progress);
    let travel = smoothstep(PHASE_TRAVEL.0, PHASE_TRAVEL.1, progress);
    let unfold = smoothstep(PHASE_UNFOLD.0, PHASE_UNFOLD.1, progress);

    let y = if progress <= PHASE_LIFT.1 {
        lerp(LETTER_START_Y, LETTER_PEAK_Y, lift)
    } else {
        lerp(LETTER_PEAK_Y, LETTER_CENTER_Y, travel)
    };
    let z = lerp(LETTER_INSIDE_Z, LETTER_OUTSIDE_Z, travel);

    LetterPose {
        y,
        z,
        tilt_x: travel * LETTER_TILT_X,
        unfold,
    }
}
