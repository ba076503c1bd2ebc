// Host-side tests for the fold/unfold animation controller.

use letter_core::constants::{
    ENVELOPE_FOLD_RATE, LETTER_CENTER_Y, LETTER_FOLD_RATE, LETTER_INSIDE_Z, LETTER_OUTSIDE_Z,
    LETTER_PEAK_Y, LETTER_START_Y,
};
use letter_core::fold::{letter_pose, smoothstep, FoldAnimator, FoldPhase};

const DT: f32 = 1.0 / 60.0;

fn settle(anim: &mut FoldAnimator, target_open: bool, speed: f32, max_frames: usize) -> usize {
    let mut completions = 0;
    for _ in 0..max_frames {
        let (_, done) = anim.advance(DT, target_open, speed);
        if done.is_some() {
            completions += 1;
        }
    }
    completions
}

#[test]
fn progress_stays_in_unit_interval() {
    let mut anim = FoldAnimator::new(ENVELOPE_FOLD_RATE);
    // flip the target mid-settle a few times; progress must never leave [0,1]
    let targets = [true, true, false, true, false, false, true];
    for (k, &target) in targets.iter().enumerate() {
        for _ in 0..20 {
            let (p, _) = anim.advance(DT, target, 1.0);
            assert!(
                (0.0..=1.0).contains(&p),
                "progress {p} escaped [0,1] in segment {k}"
            );
        }
    }
}

#[test]
fn converges_to_exact_target() {
    let mut anim = FoldAnimator::new(ENVELOPE_FOLD_RATE);
    settle(&mut anim, true, 1.0, 400);
    assert_eq!(anim.progress(), 1.0, "open target should snap to exactly 1");
    settle(&mut anim, false, 1.0, 400);
    assert_eq!(anim.progress(), 0.0, "close target should snap to exactly 0");
}

#[test]
fn completion_fires_exactly_once_per_transition() {
    let mut anim = FoldAnimator::new(ENVELOPE_FOLD_RATE);
    assert_eq!(
        settle(&mut anim, true, 1.0, 400),
        1,
        "opening must report exactly one completion"
    );
    // keep advancing at the settled target: no further reports
    assert_eq!(settle(&mut anim, true, 1.0, 120), 0);
    assert_eq!(
        settle(&mut anim, false, 1.0, 400),
        1,
        "closing must report exactly one completion"
    );
    assert_eq!(settle(&mut anim, false, 1.0, 120), 0);
}

#[test]
fn completion_carries_the_new_state() {
    let mut anim = FoldAnimator::new(ENVELOPE_FOLD_RATE);
    let mut reported = Vec::new();
    for _ in 0..400 {
        if let (_, Some(open)) = anim.advance(DT, true, 1.0) {
            reported.push(open);
        }
    }
    for _ in 0..400 {
        if let (_, Some(open)) = anim.advance(DT, false, 1.0) {
            reported.push(open);
        }
    }
    assert_eq!(reported, vec![true, false]);
}

#[test]
fn redirecting_mid_settle_needs_no_reset() {
    let mut anim = FoldAnimator::new(ENVELOPE_FOLD_RATE);
    for _ in 0..10 {
        anim.advance(DT, true, 1.0);
    }
    let mid = anim.progress();
    assert!(mid > 0.0 && mid < 1.0, "should still be settling");
    // flip back toward closed from wherever progress sits
    let (p, _) = anim.advance(DT, false, 1.0);
    assert!(p < mid, "progress should head back down, got {p} from {mid}");
    assert_eq!(settle(&mut anim, false, 1.0, 400), 0, "never opened, so no event");
    assert_eq!(anim.progress(), 0.0);
}

#[test]
fn zero_speed_pauses_without_events() {
    let mut anim = FoldAnimator::new(LETTER_FOLD_RATE);
    for _ in 0..200 {
        let (p, done) = anim.advance(DT, true, 0.0);
        assert_eq!(p, 0.0, "zero speed must not advance");
        assert!(done.is_none(), "paused animation must not complete");
    }
}

#[test]
fn non_finite_speed_skips_the_frame() {
    let mut anim = FoldAnimator::new(ENVELOPE_FOLD_RATE);
    for _ in 0..30 {
        anim.advance(DT, true, 1.0);
    }
    let before = anim.progress();
    let (p, done) = anim.advance(DT, true, f32::NAN);
    assert_eq!(p, before, "NaN speed must leave progress untouched");
    assert!(done.is_none());
    let (p, _) = anim.advance(DT, true, f32::INFINITY);
    assert_eq!(p, before);
    assert!(p.is_finite());
}

#[test]
fn negative_delta_time_is_clamped() {
    let mut anim = FoldAnimator::new(ENVELOPE_FOLD_RATE);
    for _ in 0..30 {
        anim.advance(DT, true, 1.0);
    }
    let before = anim.progress();
    let (p, _) = anim.advance(-0.5, true, 1.0);
    assert_eq!(p, before, "negative dt must not move progress");
}

#[test]
fn huge_delta_time_lands_on_target_without_overshoot() {
    let mut anim = FoldAnimator::new(ENVELOPE_FOLD_RATE);
    let (p, done) = anim.advance(10.0, true, 1.0);
    assert_eq!(p, 1.0);
    assert_eq!(done, Some(true));
}

#[test]
fn phase_reports_settling_then_settled() {
    let mut anim = FoldAnimator::new(ENVELOPE_FOLD_RATE);
    assert_eq!(anim.phase(), FoldPhase::Settled(false));
    anim.advance(DT, true, 1.0);
    assert_eq!(anim.phase(), FoldPhase::Settling);
    settle(&mut anim, true, 1.0, 400);
    assert_eq!(anim.phase(), FoldPhase::Settled(true));
}

#[test]
fn convergence_bound_scales_with_speed() {
    // at 4x speed the envelope settles in well under 100 frames
    let mut fast = FoldAnimator::new(ENVELOPE_FOLD_RATE);
    let mut frames = 0;
    while fast.progress() < 1.0 {
        fast.advance(DT, true, 4.0);
        frames += 1;
        assert!(frames < 100, "4x speed should settle quickly");
    }
}

// --- letter travel sub-phases ---

#[test]
fn smoothstep_is_clamped_and_monotonic() {
    assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
    let mut prev = 0.0;
    for i in 0..=50 {
        let v = smoothstep(0.2, 0.8, i as f32 / 50.0);
        assert!(v >= prev, "smoothstep must be non-decreasing");
        prev = v;
    }
}

#[test]
fn letter_pose_starts_inside_the_envelope() {
    let pose = letter_pose(0.0);
    assert_eq!(pose.y, LETTER_START_Y);
    assert_eq!(pose.z, LETTER_INSIDE_Z);
    assert_eq!(pose.tilt_x, 0.0);
    assert_eq!(pose.unfold, 0.0);
}

#[test]
fn letter_pose_ends_centered_and_flat() {
    let pose = letter_pose(1.0);
    assert!((pose.y - LETTER_CENTER_Y).abs() < 1e-6);
    assert!((pose.z - LETTER_OUTSIDE_Z).abs() < 1e-6);
    assert_eq!(pose.unfold, 1.0);
}

#[test]
fn letter_sub_phases_run_in_order() {
    // lift first: by the end of the lift window the letter is at its peak
    // but has not travelled outward or begun unfolding
    let at_lift_end = letter_pose(0.4);
    assert!((at_lift_end.y - LETTER_PEAK_Y).abs() < 1e-5, "lift should peak at 0.4");
    assert!((at_lift_end.z - LETTER_INSIDE_Z).abs() < 1e-5, "no travel during lift");
    assert_eq!(at_lift_end.unfold, 0.0, "no unfold during lift");

    // travel second: moving outward, still folded at its start
    let mid_travel = letter_pose(0.6);
    assert!(mid_travel.z > LETTER_INSIDE_Z, "travel should move outward");
    assert!(mid_travel.z < LETTER_OUTSIDE_Z);
    assert_eq!(mid_travel.unfold, 0.0, "unfold window starts at 0.7");
    assert!(mid_travel.tilt_x < 0.0, "tilt accompanies travel");

    // unfold overlaps the end of travel
    let late = letter_pose(0.85);
    assert!(late.unfold > 0.0 && late.unfold < 1.0);
}

#[test]
fn letter_height_rises_then_settles() {
    let mut peak = f32::MIN;
    for i in 0..=100 {
        let pose = letter_pose(i as f32 / 100.0);
        peak = peak.max(pose.y);
    }
    assert!((peak - LETTER_PEAK_Y).abs() < 1e-3, "peak height {peak}");
    assert!(letter_pose(1.0).y < peak, "letter settles below its peak");
}
