pub mod assets;
pub mod constants;
pub mod fold;
pub mod mesh;
pub mod scene;
pub mod shading;
pub mod surface;
pub mod texture;

pub static ENVELOPE_WGSL: &str = include_str!("../shaders/envelope.wgsl");
pub static LETTER_WGSL: &str = include_str!("../shaders/letter.wgsl");
pub static BACKDROP_WGSL: &str = include_str!("../shaders/backdrop.wgsl");

pub use fold::{FoldAnimator, FoldPhase, LetterPose};
pub use scene::{Background, RenderState, SceneEvent, SceneState, UploadTarget};
pub use surface::{EnvelopeStyle, EnvelopeUniforms, LetterStyle, LetterUniforms};
pub use texture::TextureImage;
