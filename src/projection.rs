//! Perspective projection parameters.
//!
//! The [`Projection`] struct is the single source of truth for the perspective
//! parameters (FOV, aspect ratio, near/far planes) and rebuilds its matrix when
//! the window is reshaped.

use crate::config::ProjectionConfig;
use crate::math::mat4::Mat4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians.
    fov_y: f32,
    /// Aspect ratio (width / height).
    aspect_ratio: f32,
    z_near: f32,
    z_far: f32,
}

impl Projection {
    /// Creates a new projection with the given parameters.
    ///
    /// # Arguments
    /// * `fov_y` - Vertical field of view in radians
    /// * `aspect_ratio` - Width divided by height
    /// * `z_near` - Near clipping plane distance (must be > 0)
    /// * `z_far` - Far clipping plane distance (must be > z_near)
    pub fn new(fov_y: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            fov_y,
            aspect_ratio,
            z_near,
            z_far,
        }
    }

    /// Builds the projection for a viewport of the given size.
    pub fn from_config(config: &ProjectionConfig, width: u32, height: u32) -> Self {
        let mut projection = Self::new(
            config.fov_y_degrees.to_radians(),
            1.0,
            config.z_near,
            config.z_far,
        );
        projection.reshape(width, height);
        projection
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    pub fn z_far(&self) -> f32 {
        self.z_far
    }

    /// Recomputes the aspect ratio for a new viewport. A zero height is treated as 1.
    pub fn reshape(&mut self, width: u32, height: u32) {
        self.aspect_ratio = width as f32 / height.max(1) as f32;
    }

    /// Generates the right-handed perspective projection matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect_ratio, self.z_near, self.z_far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn defaults_follow_the_config() {
        let proj = Projection::from_config(&ProjectionConfig::default(), 1024, 768);
        assert_relative_eq!(proj.fov_y(), FRAC_PI_4, epsilon = 1e-6);
        assert_relative_eq!(proj.aspect_ratio(), 4.0 / 3.0, epsilon = 1e-6);
        assert_relative_eq!(proj.z_near(), 0.1);
        assert_relative_eq!(proj.z_far(), 150.0);
    }

    #[test]
    fn zero_height_is_treated_as_one() {
        let mut proj = Projection::new(FRAC_PI_4, 1.0, 0.1, 150.0);
        proj.reshape(640, 0);
        assert_relative_eq!(proj.aspect_ratio(), 640.0);
    }

    #[test]
    fn reshape_keeps_vertical_fov() {
        let mut proj = Projection::from_config(&ProjectionConfig::default(), 800, 600);
        let before = proj.matrix().get(1, 1);
        proj.reshape(1920, 600);
        assert_relative_eq!(proj.matrix().get(1, 1), before);
        assert!(proj.matrix().get(0, 0) < before);
    }
}
