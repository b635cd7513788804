//! Immediate-mode rendering API.
//!
//! [`DrawContext`] is the fixed-function surface the scene is drawn through:
//! a model-view matrix stack, a current color, a line width, a blend toggle and
//! batched line/triangle submission. Two implementations exist:
//!
//! - [`SoftwareContext`]: projects, clips and rasterizes into a [`FrameBuffer`]
//!   on the CPU.
//! - [`RecordingContext`]: records each batch in eye space for inspection.

mod clipper;
mod context;
mod framebuffer;
mod rasterizer;
mod recorder;
pub mod shapes;

pub use context::SoftwareContext;
pub use framebuffer::FrameBuffer;
pub use recorder::{DrawCommand, RecordingContext, SolidKind};

use crate::color::Rgba;
use crate::math::{Mat4, Vec3};

/// Builds a triangle from three points.
#[inline]
pub const fn face(a: Vec3, b: Vec3, c: Vec3) -> [Vec3; 3] {
    [a, b, c]
}

/// Fixed-function drawing state and primitive submission.
///
/// Matrix operations post-multiply the top of the model-view stack, so the
/// last transform issued is the first one applied to a vertex.
pub trait DrawContext {
    /// Clears color and depth.
    fn clear(&mut self);

    /// Replaces the top of the model-view stack with the identity.
    fn load_identity(&mut self);

    /// Duplicates the top of the model-view stack.
    fn push_matrix(&mut self);

    /// Discards the top of the model-view stack. The base entry is never popped.
    fn pop_matrix(&mut self);

    /// Post-multiplies the top of the model-view stack by `m`.
    fn mult_matrix(&mut self, m: Mat4);

    fn set_color(&mut self, color: Rgba);

    fn set_line_width(&mut self, width: f32);

    fn set_blending(&mut self, enabled: bool);

    /// Draws independent line segments in the current local space.
    fn draw_lines(&mut self, segments: &[[Vec3; 2]]);

    /// Draws independent triangles in the current local space.
    fn draw_triangles(&mut self, triangles: &[[Vec3; 3]]);

    fn translate(&mut self, offset: Vec3) {
        self.mult_matrix(Mat4::translation(offset.x, offset.y, offset.z));
    }

    /// Rotates by `degrees` around `axis`, counter-clockwise looking down the axis.
    fn rotate(&mut self, degrees: f32, axis: Vec3) {
        self.mult_matrix(Mat4::rotation(axis, degrees.to_radians()));
    }

    fn scale(&mut self, factor: f32) {
        self.mult_matrix(Mat4::scaling(factor, factor, factor));
    }

    fn look_at(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.mult_matrix(Mat4::look_at_rh(eye, target, up));
    }

    /// Axis-aligned solid cube of edge `size` centred on the local origin.
    fn solid_cube(&mut self, size: f32) {
        self.draw_triangles(&shapes::cube(size));
    }

    /// UV sphere of `radius` centred on the local origin.
    fn solid_sphere(&mut self, radius: f32, slices: u32, stacks: u32) {
        self.draw_triangles(&shapes::sphere(radius, slices, stacks));
    }

    /// Runs `draw` between a matching push and pop.
    fn isolated<F>(&mut self, draw: F)
    where
        Self: Sized,
        F: FnOnce(&mut Self),
    {
        self.push_matrix();
        draw(self);
        self.pop_matrix();
    }
}
