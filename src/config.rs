//! Compile-time defaults for the window, animation, projection and scene.

use std::time::Duration;

use crate::color::{self, Color};
use crate::scene::SceneLayout;

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_color: Color,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "3D vesak lantern".to_string(),
            width: 1024,
            height: 768,
            clear_color: color::WHITE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    /// Cadence of the animation timer.
    pub tick_interval: Duration,
    /// Degrees added to the rotation angle per tick.
    pub step_degrees: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(16),
            step_degrees: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    pub fov_y_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            z_near: 0.1,
            z_far: 150.0,
        }
    }
}

/// Everything the application needs to start.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub window: WindowConfig,
    pub animation: AnimationConfig,
    pub projection: ProjectionConfig,
    pub scene: SceneLayout,
}
