//! A [`DrawContext`] that records geometry instead of rasterizing it.
//!
//! Vertices are stored in eye space (after the model-view transform, before
//! projection), so recorded frames can be compared and measured without a
//! window or a frame buffer.

use super::DrawContext;
use crate::color::Rgba;
use crate::math::{Mat4, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolidKind {
    Cube,
    Sphere,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Lines {
        color: Rgba,
        width: f32,
        blend: bool,
        segments: Vec<[Vec3; 2]>,
    },
    Triangles {
        color: Rgba,
        blend: bool,
        triangles: Vec<[Vec3; 3]>,
    },
    /// A convenience solid; `size` is the cube edge or sphere radius in local units.
    Solid {
        kind: SolidKind,
        color: Rgba,
        blend: bool,
        transform: Mat4,
        size: f32,
    },
}

impl DrawCommand {
    /// Eye-space size of a solid, or None for other commands.
    pub fn solid_size(&self) -> Option<f32> {
        match self {
            Self::Solid {
                transform, size, ..
            } => Some(size * transform.transform_vector(Vec3::X).magnitude()),
            _ => None,
        }
    }
}

pub struct RecordingContext {
    modelview: Vec<Mat4>,
    color: Rgba,
    line_width: f32,
    blending: bool,
    max_depth: usize,
    commands: Vec<DrawCommand>,
}

impl Default for RecordingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingContext {
    pub fn new() -> Self {
        Self {
            modelview: vec![Mat4::identity()],
            color: Rgba::default(),
            line_width: 1.0,
            blending: false,
            max_depth: 1,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn stack_depth(&self) -> usize {
        self.modelview.len()
    }

    /// Deepest the model-view stack has been since creation.
    pub fn max_stack_depth(&self) -> usize {
        self.max_depth
    }

    pub fn current_matrix(&self) -> Mat4 {
        self.modelview.last().copied().unwrap_or_default()
    }

    fn record_solid(&mut self, kind: SolidKind, size: f32) {
        self.commands.push(DrawCommand::Solid {
            kind,
            color: self.color,
            blend: self.blending,
            transform: self.current_matrix(),
            size,
        });
    }
}

impl DrawContext for RecordingContext {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn load_identity(&mut self) {
        if let Some(top) = self.modelview.last_mut() {
            *top = Mat4::identity();
        }
    }

    fn push_matrix(&mut self) {
        let top = self.current_matrix();
        self.modelview.push(top);
        self.max_depth = self.max_depth.max(self.modelview.len());
    }

    fn pop_matrix(&mut self) {
        if self.modelview.len() > 1 {
            self.modelview.pop();
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
        let m = self.current_matrix();
        self.commands.push(DrawCommand::Lines {
            color: self.color,
            width: self.line_width,
            blend: self.blending,
            segments: segments
                .iter()
                .map(|&[a, b]| [m.transform_point(a), m.transform_point(b)])
                .collect(),
        });
    }

    fn draw_triangles(&mut self, triangles: &[[Vec3; 3]]) {
        let m = self.current_matrix();
        self.commands.push(DrawCommand::Triangles {
            color: self.color,
            blend: self.blending,
            triangles: triangles
                .iter()
                .map(|tri| tri.map(|v| m.transform_point(v)))
                .collect(),
        });
    }

    fn solid_cube(&mut self, size: f32) {
        self.record_solid(SolidKind::Cube, size);
    }

    fn solid_sphere(&mut self, radius: f32, _slices: u32, _stacks: u32) {
        self.record_solid(SolidKind::Sphere, radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::RED;
    use approx::assert_relative_eq;

    #[test]
    fn lines_are_recorded_in_eye_space() {
        let mut ctx = RecordingContext::new();
        ctx.translate(Vec3::new(0.0, 1.0, 0.0));
        ctx.set_color(RED.opaque());
        ctx.draw_lines(&[[Vec3::ZERO, Vec3::X]]);

        let DrawCommand::Lines { segments, color, .. } = &ctx.commands()[0] else {
            panic!("expected a line batch");
        };
        assert_eq!(*color, RED.opaque());
        assert_eq!(segments[0], [Vec3::UP, Vec3::new(1.0, 1.0, 0.0)]);
    }

    #[test]
    fn solid_size_includes_parent_scale() {
        let mut ctx = RecordingContext::new();
        ctx.scale(4.0);
        ctx.solid_cube(0.25);
        assert_relative_eq!(ctx.commands()[0].solid_size().unwrap(), 1.0);
    }

    #[test]
    fn stack_depth_is_tracked() {
        let mut ctx = RecordingContext::new();
        ctx.isolated(|ctx| ctx.isolated(|_| {}));
        assert_eq!(ctx.max_stack_depth(), 3);
        assert_eq!(ctx.stack_depth(), 1);
    }
}
