use crate::constants::{CLEAR_COLOR, IMMERSION_STRENGTH};
use crate::core::stars::Star;
use crate::core::World;
use web_sys as web;

mod helpers;
mod portals;
mod post;
mod stars;
mod targets;
use portals::PortalsPass;
use post::{PostResources, PostUniforms};
use stars::{StarsPass, StarsUniforms};
use targets::{RenderTargets, HDR_FORMAT};

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    stars: StarsPass,
    portals: PortalsPass,
    post: PostResources,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        stars: &[Star],
        portal_count: usize,
    ) -> anyhow::Result<Self> {
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
                    // Default limits; older WebGPU impls reject unknown fields
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
            .first()
            .copied()
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

        let targets = RenderTargets::new(&device, width, height);
        let star_count = stars.len();
        let stars = StarsPass::new(&device, HDR_FORMAT, stars);
        let portals = PortalsPass::new(&device, HDR_FORMAT, portal_count);
        let post = PostResources::new(&device, &targets.hdr_view, format);
        log::info!(
            "[gpu] ready {}x{} format={:?} stars={}",
            width,
            height,
            format,
            star_count
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            stars,
            portals,
            post,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        })
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
            self.post.rebind(&self.device, &self.targets.hdr_view);
        }
    }

    /// Configure the surface again at the current size after it was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Draw stars and portals into the HDR target, then composite to the canvas.
    pub fn render(&mut self, world: &World) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let view_proj = world.camera.view_projection();
        let resolution = [self.width as f32, self.height as f32];
        self.stars.write(
            &self.queue,
            &StarsUniforms {
                view_proj: view_proj.to_cols_array_2d(),
                resolution,
                time: world.elapsed(),
                _pad: 0.0,
            },
        );
        self.portals.prepare(&self.queue, world, view_proj);
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.stars.draw(&mut rpass);
            self.portals.draw(&mut rpass);
        }

        let (color, blend) = world.immersion();
        self.post.write(
            &self.queue,
            &PostUniforms {
                resolution,
                time: world.elapsed(),
                immersion: blend * blend * IMMERSION_STRENGTH,
                immersion_color: [color[0], color[1], color[2], 1.0],
            },
        );
        self.post.composite(&mut encoder, &view, self.clear_color);

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
