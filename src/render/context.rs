//! CPU implementation of the immediate-mode API.
//!
//! Each submitted vertex goes through `projection * modelview`, is clipped in
//! clip space, divided by w and mapped to the viewport before rasterization.

use super::clipper::{clip_segment, clip_triangle};
use super::framebuffer::FrameBuffer;
use super::rasterizer::{self, Fill, ScreenVertex};
use super::DrawContext;
use crate::color::{Color, Rgba};
use crate::math::{Mat4, Vec3, Vec4};
use crate::projection::Projection;

pub struct SoftwareContext {
    framebuffer: FrameBuffer,
    projection: Projection,
    modelview: Vec<Mat4>,
    clear_color: Color,
    color: Rgba,
    line_width: f32,
    blending: bool,
}

impl SoftwareContext {
    pub fn new(width: u32, height: u32, projection: Projection, clear_color: Color) -> Self {
        let mut context = Self {
            framebuffer: FrameBuffer::new(width, height),
            projection,
            modelview: vec![Mat4::identity()],
            clear_color,
            color: Rgba::default(),
            line_width: 1.0,
            blending: false,
        };
        context.set_viewport(width, height);
        context
    }

    /// Resizes the buffers and updates the projection's aspect ratio.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.framebuffer.resize(width, height);
        self.projection.reshape(width, height);
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Number of entries on the model-view stack (1 when balanced).
    pub fn stack_depth(&self) -> usize {
        self.modelview.len()
    }

    fn top(&self) -> Mat4 {
        self.modelview.last().copied().unwrap_or_default()
    }

    fn to_clip(&self, mvp: &Mat4, v: Vec3) -> Vec4 {
        *mvp * Vec4::point(v)
    }

    fn to_screen(&self, clip: Vec4) -> ScreenVertex {
        let ndc = clip.to_ndc();
        let width = self.framebuffer.width() as f32;
        let height = self.framebuffer.height() as f32;
        ScreenVertex::new(
            (ndc.x + 1.0) * 0.5 * width,
            (1.0 - ndc.y) * 0.5 * height,
            1.0 / clip.w,
        )
    }

    fn fill(&self) -> Fill {
        Fill {
            color: self.color,
            blend: self.blending,
        }
    }
}

impl DrawContext for SoftwareContext {
    fn clear(&mut self) {
        self.framebuffer.clear(self.clear_color.to_argb());
    }

    fn load_identity(&mut self) {
        if let Some(top) = self.modelview.last_mut() {
            *top = Mat4::identity();
        }
    }

    fn push_matrix(&mut self) {
        let top = self.top();
        self.modelview.push(top);
    }

    fn pop_matrix(&mut self) {
        if self.modelview.len() > 1 {
            self.modelview.pop();
        } else {
            log::warn!("model-view stack underflow; pop ignored");
        }
    }

    fn mult_matrix(&mut self, m: Mat4) {
        if let Some(top) = self.modelview.last_mut() {
            *top = *top * m;
        }
    }

    fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn set_blending(&mut self, enabled: bool) {
        self.blending = enabled;
    }

    fn draw_lines(&mut self, segments: &[[Vec3; 2]]) {
        let mvp = self.projection.matrix() * self.top();
        let fill = self.fill();

        for &[a, b] in segments {
            let Some([a, b]) = clip_segment(self.to_clip(&mvp, a), self.to_clip(&mvp, b)) else {
                continue;
            };
            let (a, b) = (self.to_screen(a), self.to_screen(b));
            rasterizer::draw_line(a, b, self.line_width, &mut self.framebuffer, fill);
        }
    }

    fn draw_triangles(&mut self, triangles: &[[Vec3; 3]]) {
        let mvp = self.projection.matrix() * self.top();
        let fill = self.fill();

        for &[a, b, c] in triangles {
            let clip = [
                self.to_clip(&mvp, a),
                self.to_clip(&mvp, b),
                self.to_clip(&mvp, c),
            ];
            for [p0, p1, p2] in clip_triangle(clip) {
                let screen = [self.to_screen(p0), self.to_screen(p1), self.to_screen(p2)];
                rasterizer::fill_triangle(screen, &mut self.framebuffer, fill);
            }
        }
    }
}
