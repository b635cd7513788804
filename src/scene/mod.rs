//! The lantern assembly: a central lantern hung from a suspension line, with
//! six satellites on spokes revolving around its bottom attachment point.

pub mod lantern;
pub mod octahedron;
pub mod streamer;

pub use lantern::Lantern;

use crate::animation::AnimationState;
use crate::camera::{self, LookAtCamera};
use crate::color::{self, Color};
use crate::math::Vec3;
use crate::render::DrawContext;

pub const SATELLITE_COUNT: usize = 6;

pub const CENTRAL_SCALE: f32 = 4.0;
pub const SATELLITE_SCALE: f32 = 1.2;
pub const SPOKE_RADIUS: f32 = 5.5;
pub const SUSPENSION_HEIGHT: f32 = 3.0;
pub const CAMERA_DISTANCE: f32 = 28.0;
/// Extra yaw per satellite index, staggering their spin.
pub const SATELLITE_SPIN_STEP: f32 = 30.0;

const SUSPENSION_WIDTH: f32 = 5.0;
const SPOKE_WIDTH: f32 = 3.0;

/// Geometry and colors of the assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    pub central_scale: f32,
    pub satellite_scale: f32,
    pub spoke_radius: f32,
    pub suspension_height: f32,
    pub camera_distance: f32,
    pub central_color: Color,
    pub satellite_colors: [Color; SATELLITE_COUNT],
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            central_scale: CENTRAL_SCALE,
            satellite_scale: SATELLITE_SCALE,
            spoke_radius: SPOKE_RADIUS,
            suspension_height: SUSPENSION_HEIGHT,
            camera_distance: CAMERA_DISTANCE,
            central_color: color::YELLOW,
            satellite_colors: [
                color::PINK,
                color::ORANGE,
                color::GREEN,
                color::BLUE,
                color::TEAL,
                color::RED,
            ],
        }
    }
}

impl SceneLayout {
    /// Where the suspension line meets the central lantern's top vertex.
    pub fn top_attach_y(&self) -> f32 {
        self.central_scale
    }

    /// Upper end of the suspension line.
    pub fn ceiling_y(&self) -> f32 {
        self.top_attach_y() + self.suspension_height
    }

    /// The central lantern's bottom vertex, where the spokes start.
    pub fn attach_point(&self) -> Vec3 {
        Vec3::new(0.0, -self.central_scale, 0.0)
    }

    pub fn camera(&self) -> LookAtCamera {
        let center = camera::vertical_center(self.ceiling_y(), self.attach_point().y);
        LookAtCamera::framing(center, self.camera_distance)
    }

    pub fn central_lantern(&self) -> Lantern {
        Lantern {
            position: Vec3::ZERO,
            scale: self.central_scale,
            color: self.central_color,
            spin_offset: 0.0,
        }
    }

    /// Satellites evenly spaced on a horizontal circle around the attach point,
    /// satellite `i` at `i * 360 / n` degrees.
    pub fn satellites(&self) -> impl Iterator<Item = Lantern> + '_ {
        let center = self.attach_point();
        let count = self.satellite_colors.len();

        self.satellite_colors
            .iter()
            .enumerate()
            .map(move |(i, &color)| {
                let orbit = (i as f32 * (360.0 / count as f32)).to_radians();
                Lantern {
                    position: Vec3::new(
                        center.x + self.spoke_radius * orbit.cos(),
                        center.y,
                        center.z + self.spoke_radius * orbit.sin(),
                    ),
                    scale: self.satellite_scale,
                    color,
                    spin_offset: i as f32 * SATELLITE_SPIN_STEP,
                }
            })
    }

    /// Draws one full frame for the given animation state.
    pub fn draw_frame<C: DrawContext>(&self, ctx: &mut C, animation: &AnimationState) {
        ctx.clear();
        ctx.load_identity();

        let camera = self.camera();
        ctx.look_at(camera.eye, camera.target, camera.up);

        ctx.set_line_width(SUSPENSION_WIDTH);
        ctx.set_color(color::BLACK.opaque());
        ctx.draw_lines(&[[
            Vec3::new(0.0, self.ceiling_y(), 0.0),
            Vec3::new(0.0, self.top_attach_y(), 0.0),
        ]]);

        // Everything below revolves together
        ctx.rotate(animation.angle(), Vec3::UP);
        self.central_lantern().draw(ctx, animation);

        let attach = self.attach_point();
        for satellite in self.satellites() {
            ctx.set_line_width(SPOKE_WIDTH);
            ctx.set_color(color::BLACK.opaque());
            ctx.draw_lines(&[[attach, satellite.position]]);
            satellite.draw(ctx, animation);
        }
    }
}
