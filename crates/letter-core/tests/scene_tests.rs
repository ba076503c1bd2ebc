// Tests for scene composition: command routing, the lid/letter dependency,
// background asymmetry and one-shot settle events.

use glam::Vec3;
use letter_core::assets::{AssetKind, BACKGROUNDS, ENVELOPES, PAPERS};
use letter_core::constants::LETTER_INSIDE_Z;
use letter_core::scene::{SceneEvent, SceneState, UploadTarget};
use letter_core::surface::parse_hex;

const DT: f32 = 1.0 / 60.0;

fn run_frames(scene: &mut SceneState, frames: usize) -> Vec<SceneEvent> {
    let mut events = Vec::new();
    for _ in 0..frames {
        scene.advance(DT, &mut events);
    }
    events
}

#[test]
fn defaults_are_closed_and_paper_tinted() {
    let scene = SceneState::new();
    assert!(!scene.lid_open());
    assert!(!scene.letter_open());
    assert_eq!(scene.speed(), 1.0);
    assert_eq!(scene.letter.base_color, parse_hex("#fdf4e3").unwrap());
    assert!(scene.envelope.pattern.is_none());
    assert!(scene.background.image.is_none());
}

#[test]
fn letter_cannot_open_while_lid_is_shut() {
    let mut scene = SceneState::new();
    assert!(!scene.toggle_letter(), "toggle must be rejected");
    assert!(!scene.letter_open());

    scene.toggle_lid();
    assert!(scene.toggle_letter(), "toggle allowed once the lid is open");
    assert!(scene.letter_open());
}

#[test]
fn closing_the_lid_tucks_the_letter_back() {
    let mut scene = SceneState::new();
    scene.toggle_lid();
    scene.toggle_letter();
    assert!(scene.letter_open());

    scene.toggle_lid();
    assert!(!scene.lid_open());
    assert!(!scene.letter_open(), "letter visibility implies an open lid");
}

#[test]
fn background_color_clears_the_image_but_not_vice_versa() {
    let mut scene = SceneState::new();
    scene.set_upload(UploadTarget::Background, "bg.jpeg".to_string());
    assert!(scene.background.image.is_some());

    scene.set_background_color(Vec3::new(0.2, 0.3, 0.4));
    assert!(scene.background.image.is_none(), "color pick clears the image");

    // setting an image keeps the color underneath as fallback
    scene.set_upload(UploadTarget::Background, "bg.jpeg".to_string());
    assert_eq!(scene.background.color, Vec3::new(0.2, 0.3, 0.4));

    scene.clear_background_image();
    assert!(scene.background.image.is_none());
}

#[test]
fn uploads_route_to_their_surfaces() {
    let mut scene = SceneState::new();
    scene.set_upload(UploadTarget::Envelope, "a.png".to_string());
    scene.set_upload(UploadTarget::Paper, "b.png".to_string());
    scene.set_upload(UploadTarget::Content, "c.png".to_string());
    assert_eq!(scene.envelope.pattern.as_deref(), Some("a.png"));
    assert_eq!(scene.letter.pattern.as_deref(), Some("b.png"));
    assert_eq!(scene.letter.content.as_deref(), Some("c.png"));

    scene.clear_upload(UploadTarget::Paper);
    assert!(scene.letter.pattern.is_none());
    assert_eq!(scene.letter.content.as_deref(), Some("c.png"), "content survives");
}

#[test]
fn applying_an_envelope_skin_resets_the_inner_color() {
    let mut scene = SceneState::new();
    scene.set_envelope_inner_color(Vec3::new(0.9, 0.1, 0.1));
    scene.apply_asset(AssetKind::Envelope, &ENVELOPES[0]);

    assert_eq!(scene.envelope.pattern.as_deref(), Some(ENVELOPES[0].image));
    assert_eq!(scene.envelope.name, ENVELOPES[0].name);
    assert_eq!(
        scene.envelope.inner_color,
        parse_hex("#f4f4f4").unwrap(),
        "skin selection resets the reverse face"
    );
}

#[test]
fn applying_paper_and_background_assets() {
    let mut scene = SceneState::new();
    scene.apply_asset(AssetKind::Paper, &PAPERS[1]);
    assert_eq!(scene.letter.pattern.as_deref(), Some(PAPERS[1].image));

    scene.apply_asset(AssetKind::Background, &BACKGROUNDS[0]);
    assert_eq!(scene.background.image.as_deref(), Some(BACKGROUNDS[0].image));
}

#[test]
fn speed_rejects_invalid_values() {
    let mut scene = SceneState::new();
    scene.set_speed(2.5);
    assert_eq!(scene.speed(), 2.5);
    scene.set_speed(f32::NAN);
    assert_eq!(scene.speed(), 2.5);
    scene.set_speed(-1.0);
    assert_eq!(scene.speed(), 2.5);
    scene.set_speed(0.0);
    assert_eq!(scene.speed(), 0.0, "zero is a legitimate pause");
}

#[test]
fn lid_settle_event_fires_once_per_transition() {
    let mut scene = SceneState::new();
    assert!(run_frames(&mut scene, 120).is_empty(), "no events while idle");

    scene.toggle_lid();
    let opened = run_frames(&mut scene, 600);
    assert_eq!(opened, vec![SceneEvent::LidSettled(true)]);
    assert!(run_frames(&mut scene, 120).is_empty(), "no repeats after settle");

    scene.toggle_lid();
    let closed = run_frames(&mut scene, 600);
    assert_eq!(closed, vec![SceneEvent::LidSettled(false)]);
}

#[test]
fn letter_settle_event_follows_the_lid() {
    let mut scene = SceneState::new();
    scene.toggle_lid();
    scene.toggle_letter();
    let events = run_frames(&mut scene, 1200);
    assert!(events.contains(&SceneEvent::LidSettled(true)));
    assert!(events.contains(&SceneEvent::LetterSettled(true)));
    assert_eq!(events.len(), 2, "exactly one settle per object: {events:?}");
}

#[test]
fn render_state_mirrors_fold_progress() {
    let mut scene = SceneState::new();
    let mut events = Vec::new();
    let state = scene.advance(DT, &mut events);
    assert_eq!(state.lid_progress, 0.0);
    assert_eq!(state.envelope_folds.top, 1.0, "closed lid keeps the flap folded");
    assert_eq!(state.letter_pose.z, LETTER_INSIDE_Z);

    scene.toggle_lid();
    for _ in 0..600 {
        scene.advance(DT, &mut events);
    }
    let state = scene.advance(DT, &mut events);
    assert_eq!(state.lid_progress, 1.0);
    assert_eq!(state.envelope_folds.top, 0.0, "open lid releases the flap");
    assert_eq!(
        (state.envelope_folds.left, state.envelope_folds.right, state.envelope_folds.bottom),
        (1.0, 1.0, 1.0),
        "side and bottom flaps stay shut"
    );
}

#[test]
fn paused_scene_emits_nothing() {
    let mut scene = SceneState::new();
    scene.set_speed(0.0);
    scene.toggle_lid();
    let events = run_frames(&mut scene, 300);
    assert!(events.is_empty());
    let mut sink = Vec::new();
    let state = scene.advance(DT, &mut sink);
    assert_eq!(state.lid_progress, 0.0, "paused lid never moves");
}
