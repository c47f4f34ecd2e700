use super::helpers;
use crate::constants::PORTAL_BORDER_HOVER_BOOST;
use crate::core::{World, PORTAL_CONTENT_DEPTH};
use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PortalUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    inv_model: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    color: [f32; 4],
    params: [f32; 4], // blend, hovered, time, backdrop depth
}

struct PortalSlot {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// One textured window per frame. Each frame owns its uniform buffer.
pub(crate) struct PortalsPass {
    pipeline: wgpu::RenderPipeline,
    slots: Vec<PortalSlot>,
    order: Vec<usize>,
}

impl PortalsPass {
    pub(crate) fn new(device: &wgpu::Device, hdr_format: wgpu::TextureFormat, count: usize) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("portal_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::PORTAL_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("portal_bgl"),
            entries: &[helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let slots = (0..count)
            .map(|_| {
                let uniform_buffer =
                    helpers::uniform_buffer::<PortalUniforms>(device, "portal_uniforms");
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("portal_bg"),
                    layout: &bgl,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    }],
                });
                PortalSlot {
                    uniform_buffer,
                    bind_group,
                }
            })
            .collect();
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("portal_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_pipeline(
            device,
            "portal_pipeline",
            &layout,
            &shader,
            "vs_portal",
            "fs_portal",
            &[],
            hdr_format,
            Some(wgpu::BlendState::ALPHA_BLENDING),
        );
        Self {
            pipeline,
            slots,
            order: Vec::with_capacity(count),
        }
    }

    /// Upload per-frame uniforms and sort frames far to near.
    pub(crate) fn prepare(&mut self, queue: &wgpu::Queue, world: &World, view_proj: Mat4) {
        let eye: Vec3 = world.camera.position;
        self.order.clear();
        let mut keyed: Vec<(usize, f32)> = Vec::with_capacity(world.frames.len());
        for (i, (frame, slot)) in world.frames.iter().zip(&self.slots).enumerate() {
            let model = frame.plane_matrix(&world.scene);
            let c = frame.content().color_rgb;
            let u = PortalUniforms {
                view_proj: view_proj.to_cols_array_2d(),
                model: model.to_cols_array_2d(),
                inv_model: model.inverse().to_cols_array_2d(),
                camera_pos: eye.extend(1.0).to_array(),
                color: [c[0], c[1], c[2], 1.0],
                params: [
                    frame.blend(),
                    if frame.is_hovered() {
                        PORTAL_BORDER_HOVER_BOOST
                    } else {
                        0.0
                    },
                    world.elapsed(),
                    PORTAL_CONTENT_DEPTH,
                ],
            };
            queue.write_buffer(&slot.uniform_buffer, 0, bytemuck::bytes_of(&u));
            let centre = model.transform_point3(Vec3::ZERO);
            keyed.push((i, (centre - eye).length_squared()));
        }
        keyed.sort_by(|a, b| b.1.total_cmp(&a.1));
        self.order.extend(keyed.into_iter().map(|(i, _)| i));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        for &i in &self.order {
            if let Some(slot) = self.slots.get(i) {
                rpass.set_bind_group(0, &slot.bind_group, &[]);
                rpass.draw(0..6, 0..1);
            }
        }
    }
}
