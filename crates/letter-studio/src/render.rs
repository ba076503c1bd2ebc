//! wgpu render state: pipelines for the backdrop, envelope and letter, the
//! generated textures, and the per-frame uniform writes.

use std::time::Instant;

use glam::{Mat4, Vec3};
use letter_core::constants::{
    ENVELOPE_SEGMENTS, ENVELOPE_WORLD_H, ENVELOPE_WORLD_W, GRAIN_SIZE, LETTER_SEGMENTS_X,
    LETTER_SEGMENTS_Y, LETTER_WORLD_H, LETTER_WORLD_W, MASK_SIZE,
};
use letter_core::mesh::{plane_grid, MeshVertex};
use letter_core::scene::{RenderState, SceneState};
use letter_core::texture::{envelope_mask, paper_grain};
use letter_core::{EnvelopeUniforms, LetterUniforms};
use wgpu::util::DeviceExt;

use crate::camera::OrbitCamera;
use crate::textures::{self, SceneTexture, TextureSlot};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

struct Mesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl Mesh {
    fn new(device: &wgpu::Device, label: &str, vertices: &[MeshVertex], indices: &[u32]) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}

pub struct GpuState<'w> {
    pub window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,

    envelope_pipeline: wgpu::RenderPipeline,
    letter_pipeline: wgpu::RenderPipeline,
    backdrop_pipeline: wgpu::RenderPipeline,
    scene_layout: wgpu::BindGroupLayout,
    backdrop_layout: wgpu::BindGroupLayout,

    clamp_sampler: wgpu::Sampler,
    repeat_sampler: wgpu::Sampler,

    envelope_mesh: Mesh,
    letter_mesh: Mesh,
    envelope_uniforms: wgpu::Buffer,
    letter_uniforms: wgpu::Buffer,

    mask_texture: SceneTexture,
    grain_texture: SceneTexture,
    envelope_pattern: TextureSlot,
    letter_pattern: TextureSlot,
    letter_content: TextureSlot,
    background_image: TextureSlot,

    envelope_bind_group: wgpu::BindGroup,
    letter_bind_group: wgpu::BindGroup,
    backdrop_bind_group: wgpu::BindGroup,

    last_frame: Instant,
}

impl<'w> GpuState<'w> {
    pub async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        let depth_view = create_depth_view(&device, config.width, config.height);

        let clamp_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("clamp"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let repeat_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("repeat"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        // generated once at startup, immutable afterwards
        let mask_texture = textures::upload(
            &device,
            &queue,
            &envelope_mask(MASK_SIZE, MASK_SIZE),
            false,
            "envelope_mask",
        );
        let grain_texture = textures::upload(
            &device,
            &queue,
            &paper_grain(GRAIN_SIZE),
            false,
            "paper_grain",
        );
        let envelope_pattern = TextureSlot::white(&device, &queue, true, "envelope_pattern");
        let letter_pattern = TextureSlot::white(&device, &queue, true, "letter_pattern");
        let letter_content = TextureSlot::white(&device, &queue, true, "letter_content");
        let background_image = TextureSlot::white(&device, &queue, true, "background");

        let (env_verts, env_indices) = plane_grid(
            ENVELOPE_WORLD_W,
            ENVELOPE_WORLD_H,
            ENVELOPE_SEGMENTS,
            ENVELOPE_SEGMENTS,
        );
        let envelope_mesh = Mesh::new(&device, "envelope_mesh", &env_verts, &env_indices);
        let (letter_verts, letter_indices) = plane_grid(
            LETTER_WORLD_W,
            LETTER_WORLD_H,
            LETTER_SEGMENTS_X,
            LETTER_SEGMENTS_Y,
        );
        let letter_mesh = Mesh::new(&device, "letter_mesh", &letter_verts, &letter_indices);

        let envelope_uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("envelope_uniforms"),
            size: std::mem::size_of::<EnvelopeUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let letter_uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("letter_uniforms"),
            size: std::mem::size_of::<LetterUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // both fold shaders share one layout: uniform + 3 textures + 2 samplers
        let texture_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        };
        let sampler_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        };
        let scene_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                texture_entry(1),
                texture_entry(2),
                texture_entry(3),
                sampler_entry(4),
                sampler_entry(5),
            ],
        });
        let backdrop_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("backdrop_bgl"),
            entries: &[texture_entry(0), sampler_entry(1)],
        });

        let envelope_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("envelope_shader"),
            source: wgpu::ShaderSource::Wgsl(letter_core::ENVELOPE_WGSL.into()),
        });
        let letter_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("letter_shader"),
            source: wgpu::ShaderSource::Wgsl(letter_core::LETTER_WGSL.into()),
        });
        let backdrop_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("backdrop_shader"),
            source: wgpu::ShaderSource::Wgsl(letter_core::BACKDROP_WGSL.into()),
        });

        let envelope_pipeline =
            build_fold_pipeline(&device, &scene_layout, &envelope_shader, format, "envelope");
        let letter_pipeline =
            build_fold_pipeline(&device, &scene_layout, &letter_shader, format, "letter");
        let backdrop_pipeline = build_backdrop_pipeline(&device, &backdrop_layout, &backdrop_shader, format);

        let envelope_bind_group = make_scene_bind_group(
            &device,
            &scene_layout,
            "envelope_bg",
            &envelope_uniforms,
            &mask_texture.view,
            &grain_texture.view,
            envelope_pattern.view(),
            &clamp_sampler,
            &repeat_sampler,
        );
        let letter_bind_group = make_scene_bind_group(
            &device,
            &scene_layout,
            "letter_bg",
            &letter_uniforms,
            &grain_texture.view,
            letter_pattern.view(),
            letter_content.view(),
            &clamp_sampler,
            &repeat_sampler,
        );
        let backdrop_bind_group = make_backdrop_bind_group(
            &device,
            &backdrop_layout,
            background_image.view(),
            &clamp_sampler,
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            depth_view,
            envelope_pipeline,
            letter_pipeline,
            backdrop_pipeline,
            scene_layout,
            backdrop_layout,
            clamp_sampler,
            repeat_sampler,
            envelope_mesh,
            letter_mesh,
            envelope_uniforms,
            letter_uniforms,
            mask_texture,
            grain_texture,
            envelope_pattern,
            letter_pattern,
            letter_content,
            background_image,
            envelope_bind_group,
            letter_bind_group,
            backdrop_bind_group,
            last_frame: Instant::now(),
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = create_depth_view(&self.device, self.config.width, self.config.height);
    }

    /// Reload any user-image slot whose source changed since the last frame
    /// and rebuild the affected bind groups.
    fn sync_textures(&mut self, scene: &SceneState) {
        let env_changed = self.envelope_pattern.sync(
            &self.device,
            &self.queue,
            scene.envelope.pattern.as_deref(),
        );
        if env_changed {
            self.envelope_bind_group = make_scene_bind_group(
                &self.device,
                &self.scene_layout,
                "envelope_bg",
                &self.envelope_uniforms,
                &self.mask_texture.view,
                &self.grain_texture.view,
                self.envelope_pattern.view(),
                &self.clamp_sampler,
                &self.repeat_sampler,
            );
        }

        let paper_changed =
            self.letter_pattern
                .sync(&self.device, &self.queue, scene.letter.pattern.as_deref());
        let content_changed =
            self.letter_content
                .sync(&self.device, &self.queue, scene.letter.content.as_deref());
        if paper_changed || content_changed {
            self.letter_bind_group = make_scene_bind_group(
                &self.device,
                &self.scene_layout,
                "letter_bg",
                &self.letter_uniforms,
                &self.grain_texture.view,
                self.letter_pattern.view(),
                self.letter_content.view(),
                &self.clamp_sampler,
                &self.repeat_sampler,
            );
        }

        let bg_changed = self.background_image.sync(
            &self.device,
            &self.queue,
            scene.background.image.as_deref(),
        );
        if bg_changed {
            self.backdrop_bind_group = make_backdrop_bind_group(
                &self.device,
                &self.backdrop_layout,
                self.background_image.view(),
                &self.clamp_sampler,
            );
        }
    }

    pub fn render(
        &mut self,
        scene: &mut SceneState,
        camera: &OrbitCamera,
    ) -> Result<(), wgpu::SurfaceError> {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        let mut events = Vec::new();
        let state = scene.advance(dt, &mut events);
        for event in &events {
            log::info!("{event:?}");
        }
        self.sync_textures(scene);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame_encoder"),
            });
        self.draw(&mut encoder, &view, &state, scene, camera);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Capture the current scene into a PNG at the window resolution.
    pub fn export_png(
        &mut self,
        scene: &mut SceneState,
        camera: &OrbitCamera,
        path: &std::path::Path,
    ) -> anyhow::Result<()> {
        self.sync_textures(scene);
        let mut events = Vec::new();
        let state = scene.advance(0.0, &mut events);

        let (width, height) = (self.config.width, self.config.height);
        let target = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("snapshot"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: self.config.format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = target.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("snapshot_encoder"),
            });
        self.draw(&mut encoder, &view, &state, scene, camera);
        self.queue.submit(Some(encoder.finish()));

        crate::export::save_png(
            &self.device,
            &self.queue,
            &target,
            width,
            height,
            self.config.format,
            path,
        )?;
        target.destroy();
        Ok(())
    }

    fn draw(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        state: &RenderState,
        scene: &SceneState,
        camera: &OrbitCamera,
    ) {
        let aspect = self.config.width as f32 / self.config.height as f32;
        let view_proj = camera.view_proj(aspect);

        // whole presentation group bobs and rolls gently while idle
        let group = Mat4::from_translation(Vec3::new(0.0, state.float_y, 0.0))
            * Mat4::from_rotation_z(state.float_roll);
        let envelope_model = group;
        let letter_model = group
            * Mat4::from_translation(Vec3::new(0.0, state.letter_pose.y, state.letter_pose.z))
            * Mat4::from_rotation_x(state.letter_pose.tilt_x);

        self.queue.write_buffer(
            &self.envelope_uniforms,
            0,
            bytemuck::bytes_of(&EnvelopeUniforms::new(
                &scene.envelope,
                state.envelope_folds,
                envelope_model,
                view_proj,
            )),
        );
        self.queue.write_buffer(
            &self.letter_uniforms,
            0,
            bytemuck::bytes_of(&LetterUniforms::new(
                &scene.letter,
                state.letter_pose.unfold,
                letter_model,
                view_proj,
            )),
        );

        let bg = state.background_color;
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("scene_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: bg.x as f64,
                        g: bg.y as f64,
                        b: bg.z as f64,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if self.background_image.bound() {
            rpass.set_pipeline(&self.backdrop_pipeline);
            rpass.set_bind_group(0, &self.backdrop_bind_group, &[]);
            rpass.draw(0..3, 0..1);
        }

        rpass.set_pipeline(&self.envelope_pipeline);
        rpass.set_bind_group(0, &self.envelope_bind_group, &[]);
        rpass.set_vertex_buffer(0, self.envelope_mesh.vertex_buffer.slice(..));
        rpass.set_index_buffer(
            self.envelope_mesh.index_buffer.slice(..),
            wgpu::IndexFormat::Uint32,
        );
        rpass.draw_indexed(0..self.envelope_mesh.index_count, 0, 0..1);

        rpass.set_pipeline(&self.letter_pipeline);
        rpass.set_bind_group(0, &self.letter_bind_group, &[]);
        rpass.set_vertex_buffer(0, self.letter_mesh.vertex_buffer.slice(..));
        rpass.set_index_buffer(
            self.letter_mesh.index_buffer.slice(..),
            wgpu::IndexFormat::Uint32,
        );
        rpass.draw_indexed(0..self.letter_mesh.index_count, 0, 0..1);
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

/// Pipeline for the folded planes: both faces are visible (the fold shows
/// the reverse side), so culling is off and the fragment shader branches on
/// `front_facing`.
fn build_fold_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    label: &str,
) -> wgpu::RenderPipeline {
    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(label),
        bind_group_layouts: &[layout],
        push_constant_ranges: &[],
    });
    let vertex_buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 12,
                shader_location: 1,
            },
        ],
    }];
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &vertex_buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

/// Fullscreen backdrop blit; depth writes off so the scene always draws
/// over it.
fn build_backdrop_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("backdrop"),
        bind_group_layouts: &[layout],
        push_constant_ranges: &[],
    });
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("backdrop"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_fullscreen"),
            buffers: &[],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: false,
            depth_compare: wgpu::CompareFunction::Always,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_backdrop"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

#[allow(clippy::too_many_arguments)]
fn make_scene_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    label: &str,
    uniforms: &wgpu::Buffer,
    tex1: &wgpu::TextureView,
    tex2: &wgpu::TextureView,
    tex3: &wgpu::TextureView,
    clamp: &wgpu::Sampler,
    repeat: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniforms.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(tex1),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::TextureView(tex2),
            },
            wgpu::BindGroupEntry {
                binding: 3,
                resource: wgpu::BindingResource::TextureView(tex3),
            },
            wgpu::BindGroupEntry {
                binding: 4,
                resource: wgpu::BindingResource::Sampler(clamp),
            },
            wgpu::BindGroupEntry {
                binding: 5,
                resource: wgpu::BindingResource::Sampler(repeat),
            },
        ],
    })
}

fn make_backdrop_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    background: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("backdrop_bg"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(background),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}
