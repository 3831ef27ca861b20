use wgpu::util::DeviceExt;

use cgmath::*;

pub fn lerp(t: f32, a: f32, b: f32) -> f32 {
    a + t * (b - a)
}

pub fn clamp(v: f32, min: f32, max: f32) -> f32 {
    if v < min {
        min
    } else if v > max {
        max
    } else {
        v
    }
}

/// Axis aligned rectangle in world (or screen) pixels. The coordinate system is y-down,
/// so `top()` is the smaller y value and `bottom()` the larger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub origin: Point2<f32>,
    pub extent: Vector2<f32>,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            origin: point2(0.0, 0.0),
            extent: vec2(0.0, 0.0),
        }
    }
}

impl Bounds {
    pub fn new(origin: Point2<f32>, extent: Vector2<f32>) -> Self {
        Self { origin, extent }
    }

    pub fn from_center(center: Point2<f32>, extent: Vector2<f32>) -> Self {
        Self::new(center - extent * 0.5, extent)
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }
    pub fn right(&self) -> f32 {
        self.origin.x + self.extent.x
    }
    pub fn top(&self) -> f32 {
        self.origin.y
    }
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.extent.y
    }
    pub fn width(&self) -> f32 {
        self.extent.x
    }
    pub fn height(&self) -> f32 {
        self.extent.y
    }
    pub fn center(&self) -> Point2<f32> {
        self.origin + self.extent * 0.5
    }

    /// True if the two rects share interior area. Rects which merely touch along an edge
    /// do not intersect.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// True if `other` lies entirely outside of self.
    pub fn is_disjoint(&self, other: &Bounds) -> bool {
        other.right() < self.left()
            || other.left() > self.right()
            || other.bottom() < self.top()
            || other.top() > self.bottom()
    }
}

/// Uniforms is a generic "holder" for uniform data types. See camera::UniformData as an example payload.
pub struct UniformWrapper<D> {
    pub data: D,
    pub buffer: wgpu::Buffer,
    pub bind_group_layout: wgpu::BindGroupLayout,
    pub bind_group: wgpu::BindGroup,
}

impl<D> UniformWrapper<D>
where
    D: bytemuck::Pod + bytemuck::Zeroable + Default,
{
    pub fn new(device: &wgpu::Device) -> Self {
        let data = D::default();
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Uniform Buffer"),
            contents: bytemuck::cast_slice(&[data]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("Uniform Bind Group Layout"),
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("Uniform Bind Group"),
        });

        Self {
            data,
            buffer,
            bind_group_layout,
            bind_group,
        }
    }

    pub fn write(&self, queue: &wgpu::Queue) {
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.data]));
    }
}

#[cfg(test)]
mod bounds_tests {
    use super::*;

    fn rel_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < f32::EPSILON
    }

    #[test]
    fn edges_are_y_down() {
        let b = Bounds::new(point2(10.0, 20.0), vec2(30.0, 40.0));
        assert_eq!(b.left(), 10.0);
        assert_eq!(b.right(), 40.0);
        assert_eq!(b.top(), 20.0);
        assert_eq!(b.bottom(), 60.0);
        assert_eq!(b.center(), point2(25.0, 40.0));
    }

    #[test]
    fn from_center_works() {
        let b = Bounds::from_center(point2(400.0, 618.0), vec2(800.0, 64.0));
        assert_eq!(b.left(), 0.0);
        assert_eq!(b.top(), 586.0);
        assert_eq!(b.right(), 800.0);
        assert_eq!(b.bottom(), 650.0);
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Bounds::new(point2(0.0, 0.0), vec2(10.0, 10.0));
        let b = Bounds::new(point2(10.0, 0.0), vec2(10.0, 10.0));
        let c = Bounds::new(point2(9.0, 9.0), vec2(10.0, 10.0));
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
        assert!(c.intersects(&b));
    }

    #[test]
    fn lerp_and_clamp() {
        assert!(rel_eq(lerp(0.5, 0.0, 10.0), 5.0));
        assert!(rel_eq(clamp(-1.0, 0.0, 1.0), 0.0));
        assert!(rel_eq(clamp(2.0, 0.0, 1.0), 1.0));
        assert!(rel_eq(clamp(0.25, 0.0, 1.0), 0.25));
    }
}
