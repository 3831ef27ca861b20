use cgmath::*;
use std::rc::Rc;

use crate::{camera, util::Bounds};

// --------------------------------------------------------------------------------------------------------------------

/// A solid colored rectangle; the only primitive the renderer draws. One Quad is one
/// instance in the quad pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Quad {
    pub origin: [f32; 2],
    pub extent: [f32; 2],
    pub color: [f32; 4],
}

impl Quad {
    pub fn new(origin: Point2<f32>, extent: Vector2<f32>, color: [f32; 4]) -> Self {
        Self {
            origin: origin.into(),
            extent: extent.into(),
            color,
        }
    }

    pub fn from_bounds(bounds: &Bounds, color: [f32; 4]) -> Self {
        Self::new(bounds.origin, bounds.extent, color)
    }

    /// Four thin quads tracing the inside edge of `bounds`
    pub fn outline(bounds: &Bounds, thickness: f32, color: [f32; 4]) -> [Quad; 4] {
        let t = thickness.min(bounds.width() * 0.5).min(bounds.height() * 0.5);
        [
            Quad::new(bounds.origin, vec2(bounds.width(), t), color),
            Quad::new(
                point2(bounds.left(), bounds.bottom() - t),
                vec2(bounds.width(), t),
                color,
            ),
            Quad::new(bounds.origin, vec2(t, bounds.height()), color),
            Quad::new(
                point2(bounds.right() - t, bounds.top()),
                vec2(t, bounds.height()),
                color,
            ),
        ]
    }

    fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
            wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2, 2 => Float32x4];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Quad>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Approximate sRGB to linear conversion matching the quad shader, for clear colors.
pub fn srgb_to_linear(color: [f32; 4]) -> wgpu::Color {
    let c = |v: f32| v.powf(2.2) as f64;
    wgpu::Color {
        r: c(color[0]),
        g: c(color[1]),
        b: c(color[2]),
        a: color[3] as f64,
    }
}

// --------------------------------------------------------------------------------------------------------------------

pub fn create_render_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    color_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Quad Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shaders/quad.wgsl").into()),
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Quad Render Pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: "vs_main",
            buffers: &[Quad::desc()],
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: "fs_main",
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            // Since we're rendering flat quads, we don't care about backface culling
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: wgpu::PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
    })
}

/// The quad pipeline plus the layout of the camera uniforms it expects in bind group 0.
pub struct Material {
    pub pipeline: wgpu::RenderPipeline,
}

impl Material {
    pub fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        camera_uniforms: &camera::Uniforms,
    ) -> Self {
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Quad Pipeline Layout"),
            bind_group_layouts: &[&camera_uniforms.bind_group_layout],
            push_constant_ranges: &[],
        });
        Self {
            pipeline: create_render_pipeline(device, &layout, color_format),
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

const INITIAL_CAPACITY: usize = 256;

/// A growable instance buffer of quads drawn in one render pass. Each pass that shares a
/// frame needs its own batch since queue writes land before any pass executes.
pub struct QuadBatch {
    material: Rc<Material>,
    buffer: wgpu::Buffer,
    capacity: usize,
    count: u32,
}

impl QuadBatch {
    pub fn new(device: &wgpu::Device, material: Rc<Material>) -> Self {
        Self {
            material,
            buffer: Self::create_buffer(device, INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
            count: 0,
        }
    }

    fn create_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Quad Instance Buffer"),
            size: (capacity * std::mem::size_of::<Quad>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Upload this frame's quads, growing the instance buffer when needed.
    pub fn write(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, quads: &[Quad]) {
        if quads.len() > self.capacity {
            self.capacity = quads.len().next_power_of_two();
            self.buffer = Self::create_buffer(device, self.capacity);
            log::debug!("QuadBatch grew to capacity {}", self.capacity);
        }
        if !quads.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(quads));
        }
        self.count = quads.len() as u32;
    }

    pub fn draw<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>, camera_uniforms: &'a camera::Uniforms) {
        if self.count == 0 {
            return;
        }
        pass.set_pipeline(&self.material.pipeline);
        pass.set_bind_group(0, &camera_uniforms.bind_group, &[]);
        pass.set_vertex_buffer(0, self.buffer.slice(..));
        pass.draw(0..6, 0..self.count);
    }
}
