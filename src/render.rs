use crate::constants::*;
use crate::core::{light_view_proj, FrameInputs, ModelAsset};
use glam::Vec3;
use web_sys as web;

mod helpers;
mod mesh;
mod pipelines;
mod targets;

use helpers::mat4_cols;
use mesh::GpuPart;
use pipelines::PipelineResources;
use targets::DepthTargets;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct GlobalUniforms {
    view_proj: [[f32; 4]; 4],
    light_view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    light_dir: [f32; 4],
    ambient: [f32; 4],
    key: [f32; 4],
    shadow: [f32; 4],
}

fn scaled(color: [f32; 3], intensity: f32) -> [f32; 4] {
    [color[0] * intensity, color[1] * intensity, color[2] * intensity, 1.0]
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipelines: PipelineResources,
    targets: DepthTargets,
    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    shadow_bg: wgpu::BindGroup,
    parts: Vec<GpuPart>,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
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
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let pipelines = pipelines::create_pipelines(&device, format);
        let targets = DepthTargets::new(&device, width, height, SHADOW_MAP_SIZE);

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<GlobalUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &pipelines.globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let shadow_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("shadow_bg"),
            layout: &pipelines.shadow_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&targets.shadow_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&targets.shadow_sampler),
                },
            ],
        });

        log::info!("[gpu] surface {}x{} {:?} {:?}", width, height, format, alpha_mode);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipelines,
            targets,
            globals_buffer,
            globals_bg,
            shadow_bg,
            parts: Vec::new(),
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: CLEAR_COLOR[3],
            },
        })
    }

    pub fn upload_model(&mut self, asset: &ModelAsset) {
        self.parts = asset
            .parts
            .iter()
            .map(|p| mesh::upload_part(&self.device, &self.pipelines.part_bgl, p))
            .collect();
        log::info!("[gpu] uploaded {} parts", self.parts.len());
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate_depth(&self.device, width, height);
        }
    }

    fn write_globals(&self, inputs: &FrameInputs) {
        let light_pos = Vec3::from(KEY_LIGHT_POSITION);
        let globals = GlobalUniforms {
            view_proj: mat4_cols(inputs.view_proj),
            light_view_proj: mat4_cols(light_view_proj(light_pos, inputs.shadow_radius)),
            model: mat4_cols(inputs.model.unwrap_or_default()),
            light_dir: light_pos.normalize().extend(0.0).to_array(),
            ambient: scaled(AMBIENT_COLOR, AMBIENT_INTENSITY),
            key: scaled(KEY_LIGHT_COLOR, KEY_LIGHT_INTENSITY),
            shadow: [
                SHADOW_DEPTH_BIAS,
                1.0 / SHADOW_MAP_SIZE as f32,
                SHADOW_PCF_RADIUS_TEXELS,
                0.0,
            ],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
    }

    /// Draw one frame; with no model the canvas is simply cleared.
    pub fn render(&mut self, inputs: &FrameInputs) -> Result<(), wgpu::SurfaceError> {
        self.write_globals(inputs);
        let draw_model = inputs.model.is_some() && !self.parts.is_empty();

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        if draw_model {
            let mut spass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("shadow_pass"),
                color_attachments: &[],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.shadow_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            spass.set_pipeline(&self.pipelines.shadow_pipeline);
            spass.set_bind_group(0, &self.globals_bg, &[]);
            for part in self.parts.iter().filter(|p| p.cast_shadow) {
                spass.set_bind_group(1, &part.bind_group, &[]);
                spass.set_vertex_buffer(0, part.vertex_buffer.slice(..));
                spass.set_index_buffer(part.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                spass.draw_indexed(0..part.index_count, 0, 0..1);
            }
        }

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if draw_model {
                rpass.set_pipeline(&self.pipelines.model_pipeline);
                rpass.set_bind_group(0, &self.globals_bg, &[]);
                rpass.set_bind_group(2, &self.shadow_bg, &[]);
                for part in &self.parts {
                    rpass.set_bind_group(1, &part.bind_group, &[]);
                    rpass.set_vertex_buffer(0, part.vertex_buffer.slice(..));
                    rpass.set_index_buffer(part.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                    rpass.draw_indexed(0..part.index_count, 0, 0..1);
                }
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
