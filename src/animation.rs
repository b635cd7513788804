//! Rotation angle driven by the animation timer.

use crate::config::AnimationConfig;

/// The single piece of mutable scene state: a rotation angle in degrees.
///
/// The angle always stays in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    angle: f32,
    step: f32,
}

/// Horizontal streamer offset derived from the angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sway {
    pub x: f32,
    pub z: f32,
}

const SWAY_FREQUENCY: f32 = 0.1;
const SWAY_AMPLITUDE: f32 = 0.1;

impl AnimationState {
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            angle: 0.0,
            step: config.step_degrees,
        }
    }

    /// Starts at an arbitrary angle, wrapped into range.
    pub fn at(angle: f32, step: f32) -> Self {
        Self {
            angle: wrap_degrees(angle),
            step,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// One timer tick.
    pub fn advance(&mut self) {
        self.angle = wrap_degrees(self.angle + self.step);
    }

    /// Streamer sway for the current angle. The angle in degrees is fed to
    /// the trigonometric functions as radians, giving a slow swing.
    pub fn sway(&self) -> Sway {
        let phase = self.angle * SWAY_FREQUENCY;
        Sway {
            x: phase.sin() * SWAY_AMPLITUDE,
            z: phase.cos() * SWAY_AMPLITUDE,
        }
    }
}

fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
