//! Fixed look-at camera that frames the lantern assembly.

use crate::math::{Mat4, Vec3};

/// Midpoint between the highest and lowest points the camera must frame.
pub fn vertical_center(top_y: f32, bottom_y: f32) -> f32 {
    (top_y + bottom_y) / 2.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAtCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl LookAtCamera {
    /// Camera on the +Z axis `distance` units away, level with `center_y` and
    /// looking straight at it.
    pub fn framing(center_y: f32, distance: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, center_y, distance),
            target: Vec3::new(0.0, center_y, 0.0),
            up: Vec3::UP,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}
