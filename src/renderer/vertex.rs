//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Position (CSS pixels before upload, NDC after) and straight RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Board colors, straight RGBA
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub alive: [f32; 4],
    pub grid_line: [f32; 4],
    pub background: [f32; 4],
}

impl Palette {
    pub const DARK: Self = Self {
        alive: [0.3, 0.85, 0.5, 1.0],
        grid_line: [0.25, 0.25, 0.32, 0.35],
        background: [0.04, 0.04, 0.07, 1.0],
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::DARK
    }
}
