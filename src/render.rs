use crate::constants::*;
use crate::core::{GeometrySet, OrbitCamera, Scene};
use glam::{Mat3, Mat4, Vec3};
use web_sys as web;

mod buffers;
mod helpers;
mod targets;

use buffers::{Globals, ModeBuffers, SharedMeshes, Staging};
use helpers::PipelineDesc;
use targets::RenderTargets;

// ===================== WebGPU state =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    srgb_target: bool,

    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    mesh_pipeline: wgpu::RenderPipeline,
    points_pipeline: wgpu::RenderPipeline,
    wire_pipeline: wgpu::RenderPipeline,

    meshes: SharedMeshes,
    // Buffers for the scene generation they were built from
    mode_buffers: Option<(u64, ModeBuffers)>,
    staging: Staging,

    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

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
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
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
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
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
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        let targets = RenderTargets::new(&device, format, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let pipeline = |desc: PipelineDesc<'_>| {
            helpers::make_scene_pipeline(
                &device,
                &layout,
                &shader,
                format,
                DEPTH_FORMAT,
                MSAA_SAMPLES,
                desc,
            )
        };
        let mesh_pipeline = pipeline(PipelineDesc {
            label: "mesh_pipeline",
            vs_entry: "vs_mesh",
            fs_entry: "fs_mesh",
            buffers: &[buffers::lit_vertex_layout(), buffers::mesh_instance_layout()],
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: Some(wgpu::Face::Back),
            blend: None,
            depth_write: true,
        });
        let points_pipeline = pipeline(PipelineDesc {
            label: "points_pipeline",
            vs_entry: "vs_points",
            fs_entry: "fs_points",
            buffers: &[buffers::point_instance_layout()],
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            blend: Some(wgpu::BlendState::ALPHA_BLENDING),
            depth_write: false,
        });
        let wire_pipeline = pipeline(PipelineDesc {
            label: "wire_pipeline",
            vs_entry: "vs_wire",
            fs_entry: "fs_wire",
            buffers: &[buffers::lit_vertex_layout()],
            topology: wgpu::PrimitiveTopology::LineList,
            cull_mode: None,
            blend: Some(wgpu::BlendState::ALPHA_BLENDING),
            depth_write: false,
        });

        let meshes = SharedMeshes::new(&device);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            srgb_target: format.is_srgb(),
            globals_buffer,
            globals_bind_group,
            mesh_pipeline,
            points_pipeline,
            wire_pipeline,
            meshes,
            mode_buffers: None,
            staging: Staging::default(),
            width,
            height,
        })
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
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
            self.targets.recreate(&self.device, width, height);
        }
    }

    /// Make sure the GPU buffers match the scene's current geometry. Stale
    /// buffers from a previous generation are dropped before new ones exist.
    fn sync_mode_buffers(&mut self, scene: &Scene) {
        let generation = scene.generation();
        if matches!(&self.mode_buffers, Some((g, _)) if *g == generation) {
            return;
        }
        self.mode_buffers = None;
        if let Some(geometry) = scene.geometry() {
            log::info!("[gpu] rebuilding buffers for {}", geometry.mode());
            self.mode_buffers = Some((
                generation,
                ModeBuffers::for_geometry(&self.device, geometry),
            ));
        }
    }

    fn write_globals(&self, scene: &Scene, camera: &OrbitCamera) {
        // Normals stay in object space, so bring the light into it instead
        let light_dir =
            Mat3::from_rotation_y(-scene.rotation_y) * Vec3::from(DIRECTIONAL_POSITION).normalize();
        let ambient = Vec3::from(AMBIENT_COLOR) * AMBIENT_INTENSITY;
        let light = Vec3::from(DIRECTIONAL_COLOR) * DIRECTIONAL_INTENSITY;
        let globals = Globals {
            view: camera.view_matrix().to_cols_array_2d(),
            proj: camera.projection_matrix(self.aspect()).to_cols_array_2d(),
            model: Mat4::from_rotation_y(scene.rotation_y).to_cols_array_2d(),
            ambient: ambient.extend(1.0).to_array(),
            light_dir: light_dir.extend(0.0).to_array(),
            light_color: light.extend(1.0).to_array(),
            fog: Vec3::from(FOG_COLOR).extend(FOG_DENSITY).to_array(),
            wire_color: Vec3::from(SPHERE_WIRE_COLOR)
                .extend(SPHERE_WIRE_OPACITY)
                .to_array(),
            params: [
                PARTICLE_SIZE,
                PARTICLE_OPACITY,
                0.0,
                if self.srgb_target { 1.0 } else { 0.0 },
            ],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
    }

    pub fn render(&mut self, scene: &Scene, camera: &OrbitCamera) -> Result<(), wgpu::SurfaceError> {
        self.sync_mode_buffers(scene);
        self.write_globals(scene, camera);
        if let (Some(geometry), Some((_, buffers))) = (scene.geometry(), &self.mode_buffers) {
            self.staging.upload(&self.queue, geometry, buffers);
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);

            if let (Some(geometry), Some((_, buffers))) = (scene.geometry(), &self.mode_buffers) {
                match (geometry, buffers) {
                    (GeometrySet::Bars(_), ModeBuffers::Bars { instances, count })
                    | (GeometrySet::Wave(_), ModeBuffers::Wave { instances, count }) => {
                        let mesh = match buffers {
                            ModeBuffers::Bars { .. } => &self.meshes.bar,
                            _ => &self.meshes.wave_point,
                        };
                        rpass.set_pipeline(&self.mesh_pipeline);
                        rpass.set_vertex_buffer(0, mesh.vertices.slice(..));
                        rpass.set_vertex_buffer(1, instances.slice(..));
                        rpass.set_index_buffer(mesh.indices.slice(..), wgpu::IndexFormat::Uint16);
                        rpass.draw_indexed(0..mesh.index_count, 0, 0..*count);
                    }
                    (GeometrySet::Particles(_), ModeBuffers::Particles { instances, count }) => {
                        rpass.set_pipeline(&self.points_pipeline);
                        rpass.set_vertex_buffer(0, instances.slice(..));
                        rpass.draw(0..6, 0..*count);
                    }
                    (
                        GeometrySet::Sphere(_),
                        ModeBuffers::Sphere {
                            vertices,
                            edges,
                            edge_index_count,
                        },
                    ) => {
                        rpass.set_pipeline(&self.wire_pipeline);
                        rpass.set_vertex_buffer(0, vertices.slice(..));
                        rpass.set_index_buffer(edges.slice(..), wgpu::IndexFormat::Uint32);
                        rpass.draw_indexed(0..*edge_index_count, 0, 0..1);
                    }
                    _ => {}
                }
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
