//! A single lantern: translucent octahedron body, accent panels, wireframe,
//! vertex gems and swaying streamers.

use super::octahedron;
use super::streamer;
use crate::animation::{AnimationState, Sway};
use crate::color::{self, Color};
use crate::math::Vec3;
use crate::render::{face, DrawContext};
use crate::transform::Transform;

const BODY_ALPHA: f32 = 0.8;
const ACCENT_ALPHA: f32 = 0.9;
const EDGE_WIDTH: f32 = 3.0;
const STREAMER_WIDTH: f32 = 2.0;

/// World-space edge of the equator cubes, whatever the lantern's scale.
pub const EMBELLISHMENT_SIZE: f32 = 0.15;
/// Pole sphere radius relative to the cube edge.
const SPHERE_RATIO: f32 = 1.5;
const SPHERE_DETAIL: u32 = 10;

/// World-space length of the streamer under the bottom vertex.
pub const BOTTOM_STREAMER_LENGTH: f32 = 4.0;
/// World-space length of the streamers under the equatorial vertices.
pub const SIDE_STREAMER_LENGTH: f32 = 2.5;

const ACCENT_PANELS: [[Vec3; 3]; 2] = [
    face(
        Vec3::new(0.0, 0.75, 0.0),
        Vec3::new(0.3, 0.3, 0.1),
        Vec3::new(0.1, 0.3, 0.3),
    ),
    face(
        Vec3::new(0.0, 0.75, 0.0),
        Vec3::new(-0.3, 0.3, 0.1),
        Vec3::new(-0.1, 0.3, 0.3),
    ),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lantern {
    pub position: Vec3,
    pub scale: f32,
    pub color: Color,
    /// Extra yaw in degrees on top of the animation angle.
    pub spin_offset: f32,
}

impl Lantern {
    /// Local-to-parent placement for the given animation state.
    pub fn transform(&self, animation: &AnimationState) -> Transform {
        let mut transform = Transform::new();
        transform
            .set_position(self.position)
            .rotate_y(animation.angle() + self.spin_offset)
            .set_scale(self.scale);
        transform
    }

    /// Local size of the vertex gems, cancelling out the lantern's own scale.
    pub fn detail_size(&self) -> f32 {
        EMBELLISHMENT_SIZE / self.scale
    }

    pub fn draw<C: DrawContext>(&self, ctx: &mut C, animation: &AnimationState) {
        ctx.isolated(|ctx| {
            ctx.mult_matrix(self.transform(animation).to_matrix());

            ctx.set_blending(true);
            ctx.set_color(self.color.with_alpha(BODY_ALPHA));
            ctx.draw_triangles(&octahedron::FACES);

            ctx.set_color(self.color.accent().with_alpha(ACCENT_ALPHA));
            ctx.draw_triangles(&ACCENT_PANELS);

            ctx.set_line_width(EDGE_WIDTH);
            ctx.set_color(color::BLACK.opaque());
            ctx.draw_lines(&octahedron::EDGES);
            ctx.set_blending(false);

            self.draw_embellishments(ctx);
            self.draw_streamers(ctx, animation.sway());
        });
    }

    fn draw_embellishments<C: DrawContext>(&self, ctx: &mut C) {
        let size = self.detail_size();
        ctx.set_color(color::SHINE.opaque());

        for vertex in octahedron::EQUATOR {
            ctx.isolated(|ctx| {
                ctx.translate(vertex);
                ctx.solid_cube(size);
            });
        }
        for vertex in [octahedron::TOP, octahedron::BOTTOM] {
            ctx.isolated(|ctx| {
                ctx.translate(vertex);
                ctx.solid_sphere(size * SPHERE_RATIO, SPHERE_DETAIL, SPHERE_DETAIL);
            });
        }
    }

    fn draw_streamers<C: DrawContext>(&self, ctx: &mut C, sway: Sway) {
        ctx.set_line_width(STREAMER_WIDTH);
        ctx.set_color(self.color.opaque());

        let tail = streamer::segments(BOTTOM_STREAMER_LENGTH / self.scale, sway);
        ctx.isolated(|ctx| {
            ctx.translate(octahedron::BOTTOM);
            ctx.draw_lines(&tail);
        });

        let side = streamer::segments(SIDE_STREAMER_LENGTH / self.scale, sway);
        for vertex in octahedron::EQUATOR {
            ctx.isolated(|ctx| {
                ctx.translate(vertex);
                ctx.draw_lines(&side);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{PINK, RED, SHINE, YELLOW};
    use crate::render::{DrawCommand, RecordingContext, SolidKind};
    use approx::assert_relative_eq;

    fn lantern(scale: f32, color: Color) -> Lantern {
        Lantern {
            position: Vec3::ZERO,
            scale,
            color,
            spin_offset: 0.0,
        }
    }

    fn record(lantern: &Lantern, angle: f32) -> Vec<DrawCommand> {
        let mut ctx = RecordingContext::new();
        lantern.draw(&mut ctx, &AnimationState::at(angle, 0.5));
        assert_eq!(ctx.stack_depth(), 1);
        ctx.into_commands()
    }

    fn triangle_batches(commands: &[DrawCommand]) -> Vec<(crate::color::Rgba, bool, usize)> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Triangles {
                    color,
                    blend,
                    triangles,
                } => Some((*color, *blend, triangles.len())),
                _ => None,
            })
            .collect()
    }

    fn line_batches(commands: &[DrawCommand]) -> Vec<(crate::color::Rgba, f32, &Vec<[Vec3; 2]>)> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Lines {
                    color,
                    width,
                    segments,
                    ..
                } => Some((*color, *width, segments)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn body_is_translucent_and_blended() {
        let batches = triangle_batches(&record(&lantern(1.0, PINK), 0.0));
        assert_eq!(batches[0], (PINK.with_alpha(0.8), true, 8));
    }

    #[test]
    fn yellow_lantern_gets_red_panels() {
        let batches = triangle_batches(&record(&lantern(4.0, YELLOW), 0.0));
        assert_eq!(batches[1], (RED.with_alpha(0.9), true, 2));
    }

    #[test]
    fn pink_lantern_gets_yellow_panels() {
        let batches = triangle_batches(&record(&lantern(1.2, PINK), 0.0));
        assert_eq!(batches[1], (YELLOW.with_alpha(0.9), true, 2));
    }

    #[test]
    fn wireframe_then_five_streamers() {
        let commands = record(&lantern(1.2, PINK), 0.0);
        let lines = line_batches(&commands);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].0, color::BLACK.opaque());
        assert_eq!(lines[0].1, 3.0);
        assert_eq!(lines[0].2.len(), 12);
        for (color, width, segments) in &lines[1..] {
            assert_eq!(*color, PINK.opaque());
            assert_eq!(*width, 2.0);
            assert_eq!(segments.len(), streamer::SEGMENTS);
        }
    }

    #[test]
    fn gems_mark_every_vertex() {
        let commands = record(&lantern(1.2, PINK), 0.0);
        let solids: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Solid { kind, color, .. } => Some((*kind, *color)),
                _ => None,
            })
            .collect();
        assert_eq!(
            solids.iter().filter(|(k, _)| *k == SolidKind::Cube).count(),
            4
        );
        assert_eq!(
            solids.iter().filter(|(k, _)| *k == SolidKind::Sphere).count(),
            2
        );
        assert!(solids.iter().all(|(_, c)| *c == SHINE.opaque()));
    }

    #[test]
    fn blending_ends_after_the_wireframe() {
        let commands = record(&lantern(1.2, PINK), 0.0);
        let blends: Vec<(bool, bool)> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Lines { blend, .. } => Some((false, *blend)),
                DrawCommand::Solid { blend, .. } => Some((true, *blend)),
                _ => None,
            })
            .collect();

        // Wireframe, four cubes, two spheres, five streamers
        assert_eq!(blends.len(), 1 + 6 + 5);
        assert_eq!(blends[0], (false, true));
        assert!(blends[1..7].iter().all(|&(solid, blend)| solid && !blend));
        assert!(blends[7..].iter().all(|&(solid, blend)| !solid && !blend));
    }

    #[test]
    fn gem_world_size_ignores_lantern_scale() {
        for scale in [4.0, 1.2] {
            let l = lantern(scale, PINK);
            assert_relative_eq!(l.detail_size() * scale, EMBELLISHMENT_SIZE, epsilon = 1e-6);
            for command in record(&l, 10.0) {
                if let DrawCommand::Solid { kind, .. } = &command {
                    let expected = match kind {
                        SolidKind::Cube => EMBELLISHMENT_SIZE,
                        SolidKind::Sphere => EMBELLISHMENT_SIZE * 1.5,
                    };
                    assert_relative_eq!(command.solid_size().unwrap(), expected, epsilon = 1e-5);
                }
            }
        }
    }

    #[test]
    fn bottom_streamer_hangs_its_world_length() {
        let commands = record(&lantern(4.0, YELLOW), 0.0);
        let lines = line_batches(&commands);
        for [top, bottom] in lines[1].2 {
            assert_relative_eq!(top.y, -4.0, epsilon = 1e-5);
            assert_relative_eq!(top.y - bottom.y, BOTTOM_STREAMER_LENGTH, epsilon = 1e-5);
        }
        for (_, _, segments) in &lines[2..] {
            for [top, bottom] in segments.iter() {
                assert_relative_eq!(top.y - bottom.y, SIDE_STREAMER_LENGTH, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn spin_offset_adds_to_the_angle() {
        let mut l = lantern(1.0, PINK);
        l.spin_offset = 30.0;
        let t = l.transform(&AnimationState::at(15.0, 0.5));
        assert_relative_eq!(t.yaw_degrees(), 45.0);
        assert_eq!(t.scale(), 1.0);
    }

    #[test]
    fn streamers_sway_with_the_angle() {
        // Cancel the spin so only the sway differs
        let mut turned = lantern(1.0, PINK);
        turned.spin_offset = -90.0;
        let still = record(&lantern(1.0, PINK), 0.0);
        let moved = record(&turned, 90.0);
        assert_ne!(line_batches(&still)[1].2, line_batches(&moved)[1].2);
    }
}
