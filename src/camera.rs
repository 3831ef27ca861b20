use cgmath::*;

use crate::util::{self, Bounds};

// CGMath uses an OpenGL clipspace of [-1,+1] on z, where wgpu uses [0,+1] for z
// We need to scale and translate the cgmath clipspace to wgpu's.
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// A 2D scrolling camera. `scroll` is the world position of the viewport's top-left corner.
/// When following a target, the camera eases toward centering it by `lerp` of the remaining
/// distance each frame, and never shows anything outside of `bounds`.
#[derive(Debug)]
pub struct Camera {
    pub scroll: Point2<f32>,
    viewport: Vector2<f32>,
    bounds: Bounds,
    lerp: Vector2<f32>,
}

impl Camera {
    pub fn new(viewport: Vector2<f32>, bounds: Bounds) -> Self {
        Self {
            scroll: point2(bounds.left(), bounds.top()),
            viewport,
            bounds,
            lerp: vec2(1.0, 1.0),
        }
    }

    pub fn set_lerp(&mut self, lerp: Vector2<f32>) {
        self.lerp = lerp;
    }

    /// Snap immediately so `target` is centered (subject to bounds)
    pub fn center_on(&mut self, target: Point2<f32>) {
        self.scroll = self.clamped(target - self.viewport * 0.5);
    }

    /// Ease toward centering `target`; called once per frame.
    pub fn follow(&mut self, target: Point2<f32>) {
        let desired = target - self.viewport * 0.5;
        let scroll = point2(
            util::lerp(self.lerp.x, self.scroll.x, desired.x),
            util::lerp(self.lerp.y, self.scroll.y, desired.y),
        );
        self.scroll = self.clamped(scroll);
    }

    fn clamped(&self, scroll: Point2<f32>) -> Point2<f32> {
        let max_x = (self.bounds.right() - self.viewport.x).max(self.bounds.left());
        let max_y = (self.bounds.bottom() - self.viewport.y).max(self.bounds.top());
        point2(
            util::clamp(scroll.x, self.bounds.left(), max_x),
            util::clamp(scroll.y, self.bounds.top(), max_y),
        )
    }

    /// World-space view projection with y pointing down the screen
    pub fn calc_matrix(&self) -> Matrix4<f32> {
        screen_projection(self.scroll, self.viewport)
    }
}

/// Orthographic projection mapping the rect at `origin` with size `size` to clip space,
/// y-down. Pixel-space HUD drawing uses this with a zero origin.
pub fn screen_projection(origin: Point2<f32>, size: Vector2<f32>) -> Matrix4<f32> {
    OPENGL_TO_WGPU_MATRIX
        * ortho(
            origin.x,
            origin.x + size.x,
            origin.y + size.y,
            origin.y,
            -1.0,
            1.0,
        )
}

// ---------------------------------------------------------------------------------------------------------------------

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UniformData {
    view_proj: [[f32; 4]; 4],
}

impl Default for UniformData {
    fn default() -> Self {
        Self {
            view_proj: Matrix4::identity().into(),
        }
    }
}

impl UniformData {
    pub fn update_view_proj(&mut self, view_proj: Matrix4<f32>) -> &mut Self {
        self.view_proj = view_proj.into();
        self
    }
}

pub type Uniforms = util::UniformWrapper<UniformData>;
