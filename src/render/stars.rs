use super::helpers;
use crate::core::stars::Star;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct StarsUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) resolution: [f32; 2],
    pub(crate) time: f32,
    pub(crate) _pad: f32,
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct StarInstance {
    pos_size: [f32; 4],
    color: [f32; 4],
}

/// Instanced billboards for the starfield, drawn additively into the HDR target.
pub(crate) struct StarsPass {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instances: wgpu::Buffer,
    count: u32,
}

impl StarsPass {
    pub(crate) fn new(device: &wgpu::Device, hdr_format: wgpu::TextureFormat, stars: &[Star]) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("stars_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::STARS_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("stars_bgl"),
            entries: &[helpers::uniform_layout_entry(0, wgpu::ShaderStages::VERTEX)],
        });
        let uniform_buffer = helpers::uniform_buffer::<StarsUniforms>(device, "stars_uniforms");
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("stars_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("stars_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let packed: Vec<StarInstance> = stars
            .iter()
            .map(|s| StarInstance {
                pos_size: [s.position.x, s.position.y, s.position.z, s.size],
                color: [s.color_rgb[0], s.color_rgb[1], s.color_rgb[2], 1.0],
            })
            .collect();
        let instances = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("star_instances"),
            contents: bytemuck::cast_slice(&packed),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let attrs = wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4];
        let pipeline = helpers::make_pipeline(
            device,
            "stars_pipeline",
            &layout,
            &shader,
            "vs_star",
            "fs_star",
            &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<StarInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &attrs,
            }],
            hdr_format,
            Some(helpers::ADDITIVE),
        );
        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            instances,
            count: packed.len() as u32,
        }
    }

    pub(crate) fn write(&self, queue: &wgpu::Queue, uniforms: &StarsUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.instances.slice(..));
        rpass.draw(0..6, 0..self.count);
    }
}
