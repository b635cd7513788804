//! Placement of a lantern: position, yaw and uniform scale.
//!
//! Provides a [`Transform`] struct with a fluent API. The composed matrix is
//! multiplied onto the draw context's stack in place of separate
//! translate/rotate/scale calls.

use crate::math::{mat4::Mat4, vec3::Vec3};

/// A 3D transform with position, yaw around +Y (degrees) and uniform scale.
///
/// Mutating methods return `&mut Self` for chaining:
///
/// ```ignore
/// transform
///     .set_position(Vec3::new(5.5, -4.0, 0.0))
///     .rotate_y(30.0)
///     .set_scale(1.2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    position: Vec3,
    yaw_degrees: f32,
    scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw_degrees: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform {
    /// Create a new transform with default values (position=0, yaw=0, scale=1).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) -> &mut Self {
        self.position = position;
        self
    }

    pub fn yaw_degrees(&self) -> f32 {
        self.yaw_degrees
    }

    /// Add to the yaw (degrees).
    pub fn rotate_y(&mut self, degrees: f32) -> &mut Self {
        self.yaw_degrees += degrees;
        self
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) -> &mut Self {
        self.scale = scale;
        self
    }

    /// Generate the transformation matrix.
    ///
    /// Order: Translation * RotationY * Scale
    /// (Scale applied first, then the yaw, then translation)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::translation(self.position.x, self.position.y, self.position.z)
            * Mat4::rotation_y(self.yaw_degrees.to_radians())
            * Mat4::scaling(self.scale, self.scale, self.scale)
    }
}
