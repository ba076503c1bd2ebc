//! GPU texture upload plus last-good slots for user-supplied images.
//!
//! Generated textures (mask, grain, blank paper) upload once and never
//! change. User images come and go; each lives in a [`TextureSlot`] that
//! keeps the previously bound texture when a new source fails to decode.

use anyhow::Context;
use letter_core::texture::blank_paper;
use letter_core::TextureImage;

pub struct SceneTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

/// Upload a CPU image as an immutable sampled texture. User-supplied photos
/// are sRGB; procedurally generated data stays linear.
pub fn upload(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    image: &TextureImage,
    srgb: bool,
    label: &str,
) -> SceneTexture {
    let format = if srgb {
        wgpu::TextureFormat::Rgba8UnormSrgb
    } else {
        wgpu::TextureFormat::Rgba8Unorm
    };
    let size = wgpu::Extent3d {
        width: image.width,
        height: image.height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &image.pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * image.width),
            rows_per_image: Some(image.height),
        },
        size,
    );
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    SceneTexture { texture, view }
}

/// Decode an image file into a tightly packed RGBA8 buffer.
pub fn load_file(path: &str) -> anyhow::Result<TextureImage> {
    let decoded = image::open(path)
        .with_context(|| format!("decode image {path}"))?
        .to_rgba8();
    let (width, height) = decoded.dimensions();
    Ok(TextureImage {
        width,
        height,
        pixels: decoded.into_raw(),
    })
}

/// A texture binding slot fed by an optional image source. On decode
/// failure the previously bound texture stays; the failure is logged once
/// per source so a bad file does not spam every frame.
pub struct TextureSlot {
    tex: SceneTexture,
    source: Option<String>,
    failed: Option<String>,
    srgb: bool,
    label: &'static str,
}

impl TextureSlot {
    /// Start with a 1x1 white texture so the bind group is always valid;
    /// the shader flag decides whether it is actually used.
    pub fn white(device: &wgpu::Device, queue: &wgpu::Queue, srgb: bool, label: &'static str) -> Self {
        Self {
            tex: upload(device, queue, &blank_paper(1, 1), srgb, label),
            source: None,
            failed: None,
            srgb,
            label,
        }
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.tex.view
    }

    pub fn bound(&self) -> bool {
        self.source.is_some()
    }

    /// Bring the slot in line with the scene's desired source. Returns true
    /// when the bound texture changed and bind groups must be rebuilt.
    pub fn sync(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, desired: Option<&str>) -> bool {
        if self.source.as_deref() == desired || self.failed.as_deref() == desired {
            return false;
        }
        match desired {
            None => {
                self.replace(upload(device, queue, &blank_paper(1, 1), self.srgb, self.label));
                self.source = None;
                self.failed = None;
                true
            }
            Some(path) => match load_file(path) {
                Ok(img) => {
                    self.replace(upload(device, queue, &img, self.srgb, self.label));
                    self.source = Some(path.to_string());
                    self.failed = None;
                    true
                }
                Err(err) => {
                    log::warn!("keeping previous {} texture: {err:#}", self.label);
                    self.failed = Some(path.to_string());
                    false
                }
            },
        }
    }

    fn replace(&mut self, next: SceneTexture) {
        // release GPU memory now rather than waiting for the drop queue
        self.tex.texture.destroy();
        self.tex = next;
    }
}
