//! Desktop viewer for the envelope/letter scene.
//!
//! Controls:
//!   Space        open / close the envelope lid
//!   Enter        float the letter out / tuck it back (lid must be open)
//!   E / P / B    cycle envelope skins, letter papers, backgrounds
//!   1..4         choose where a dropped image file lands
//!                (1 envelope, 2 paper, 3 content, 4 background)
//!   X / Z / C / V  clear envelope / paper / content / background image
//!   [ / ]        slow down / speed up the animation
//!   S            save a PNG snapshot
//!   drag / wheel orbit and zoom the camera

mod camera;
mod export;
mod render;
mod textures;

use std::time::{SystemTime, UNIX_EPOCH};

use letter_core::assets::{catalog, AssetKind};
use letter_core::scene::{SceneState, UploadTarget};
use winit::event::{ElementState, Event, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowBuilder;

use camera::OrbitCamera;
use render::GpuState;

#[derive(Default)]
struct Controls {
    drop_target: Option<UploadTarget>,
    envelope_idx: usize,
    paper_idx: usize,
    background_idx: usize,
    dragging: bool,
    last_cursor: Option<(f64, f64)>,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Letter Studio")
        .build(&event_loop)?;

    let mut scene = SceneState::new();
    let mut cam = OrbitCamera::new();
    let mut controls = Controls::default();
    let mut state = pollster::block_on(GpuState::new(&window))?;

    log::info!("space = lid, enter = letter, E/P/B = catalogs, S = snapshot");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => handle_key(code, &mut scene, &mut controls, &mut state, &cam),
            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => {
                controls.dragging = button_state == ElementState::Pressed;
                if !controls.dragging {
                    controls.last_cursor = None;
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if controls.dragging {
                    if let Some((lx, ly)) = controls.last_cursor {
                        cam.drag((position.x - lx) as f32, (position.y - ly) as f32);
                    }
                }
                controls.last_cursor = Some((position.x, position.y));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let amount = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y * 0.5,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 * 0.01,
                };
                cam.zoom(amount);
            }
            WindowEvent::DroppedFile(path) => {
                let target = controls.drop_target.unwrap_or(UploadTarget::Envelope);
                log::info!("dropped {} onto {target:?}", path.display());
                scene.set_upload(target, path.to_string_lossy().into_owned());
            }
            _ => {}
        },
        Event::AboutToWait => match state.render(&mut scene, &cam) {
            Ok(_) => state.window.request_redraw(),
            Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
            Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
            Err(_) => {}
        },
        _ => {}
    })?;
    Ok(())
}

fn handle_key(
    code: KeyCode,
    scene: &mut SceneState,
    controls: &mut Controls,
    state: &mut GpuState,
    cam: &OrbitCamera,
) {
    match code {
        KeyCode::Space => scene.toggle_lid(),
        KeyCode::Enter => {
            if !scene.toggle_letter() {
                log::info!("open the envelope before pulling the letter out");
            }
        }
        KeyCode::KeyE => {
            let items = catalog(AssetKind::Envelope);
            controls.envelope_idx = (controls.envelope_idx + 1) % items.len();
            let item = &items[controls.envelope_idx];
            scene.apply_asset(AssetKind::Envelope, item);
            log::info!("envelope: {}", item.name);
        }
        KeyCode::KeyP => {
            let items = catalog(AssetKind::Paper);
            controls.paper_idx = (controls.paper_idx + 1) % items.len();
            let item = &items[controls.paper_idx];
            scene.apply_asset(AssetKind::Paper, item);
            log::info!("paper: {}", item.name);
        }
        KeyCode::KeyB => {
            let items = catalog(AssetKind::Background);
            controls.background_idx = (controls.background_idx + 1) % items.len();
            let item = &items[controls.background_idx];
            scene.apply_asset(AssetKind::Background, item);
            log::info!("background: {}", item.name);
        }
        KeyCode::Digit1 => controls.drop_target = Some(UploadTarget::Envelope),
        KeyCode::Digit2 => controls.drop_target = Some(UploadTarget::Paper),
        KeyCode::Digit3 => controls.drop_target = Some(UploadTarget::Content),
        KeyCode::Digit4 => controls.drop_target = Some(UploadTarget::Background),
        KeyCode::KeyX => scene.clear_upload(UploadTarget::Envelope),
        KeyCode::KeyZ => scene.clear_upload(UploadTarget::Paper),
        KeyCode::KeyC => scene.clear_upload(UploadTarget::Content),
        KeyCode::KeyV => scene.clear_upload(UploadTarget::Background),
        KeyCode::BracketLeft => {
            scene.set_speed((scene.speed() - 0.25).max(0.0));
            log::info!("speed {:.2}", scene.speed());
        }
        KeyCode::BracketRight => {
            scene.set_speed((scene.speed() + 0.25).min(4.0));
            log::info!("speed {:.2}", scene.speed());
        }
        KeyCode::KeyS => {
            let stamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            let path = std::path::PathBuf::from(format!("letter-{stamp}.png"));
            match state.export_png(scene, cam, &path) {
                Ok(()) => log::info!("saved snapshot to {}", path.display()),
                Err(err) => log::error!("snapshot failed: {err:#}"),
            }
        }
        _ => {}
    }
}
