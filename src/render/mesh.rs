use super::helpers::mat4_cols;
use crate::core::{normal_matrix, MeshPart};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PartUniforms {
    world: [[f32; 4]; 4],
    normal_world: [[f32; 4]; 4],
    base_color: [f32; 4],
    flags: [f32; 4],
}

/// One uploaded mesh part with its own uniform bind group.
pub(crate) struct GpuPart {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) cast_shadow: bool,
}

pub(crate) fn upload_part(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    part: &MeshPart,
) -> GpuPart {
    let label = part.name.as_deref().unwrap_or("part");
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&part.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&part.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let uniforms = PartUniforms {
        world: mat4_cols(part.world),
        normal_world: mat4_cols(normal_matrix(part.world)),
        base_color: part.base_color,
        flags: [if part.receive_shadow { 1.0 } else { 0.0 }, 0.0, 0.0, 0.0],
    };
    let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("part_uniforms"),
        contents: bytemuck::bytes_of(&uniforms),
        usage: wgpu::BufferUsages::UNIFORM,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("part_bg"),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    GpuPart {
        vertex_buffer,
        index_buffer,
        index_count: part.indices.len() as u32,
        bind_group,
        cast_shadow: part.cast_shadow,
    }
}
