//! Procedural streamers: fans of line segments hanging from a vertex.

use crate::animation::Sway;
use crate::math::Vec3;

pub const SEGMENTS: usize = 20;

/// How much wider the fan is at its lower end.
const SPREAD: f32 = 1.5;
/// Width of the grid the segment tops are laid out on.
const GRID_SPAN: f32 = 0.4;

/// Segments of one streamer hanging `length` units below the local origin.
///
/// Segment `i` starts on a small grid picked by `i mod 5` along x and
/// `i mod 4` along z, shifted by the sway, and ends `length` below with its
/// horizontal offset widened by [`SPREAD`].
pub fn segments(length: f32, sway: Sway) -> [[Vec3; 2]; SEGMENTS] {
    std::array::from_fn(|i| {
        let x = grid_offset(i % 5, 5) + sway.x;
        let z = grid_offset(i % 4, 4) + sway.z;
        [
            Vec3::new(x, 0.0, z),
            Vec3::new(x * SPREAD, -length, z * SPREAD),
        ]
    })
}

fn grid_offset(cell: usize, cells: usize) -> f32 {
    cell as f32 / cells as f32 * GRID_SPAN - GRID_SPAN / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const STILL: Sway = Sway { x: 0.0, z: 0.0 };

    #[test]
    fn segments_hang_to_full_length() {
        for [top, bottom] in segments(2.5, STILL) {
            assert_eq!(top.y, 0.0);
            assert_eq!(bottom.y, -2.5);
        }
    }

    #[test]
    fn tops_form_a_small_grid() {
        let segs = segments(1.0, STILL);
        assert_relative_eq!(segs[0][0].x, -0.2);
        assert_relative_eq!(segs[0][0].z, -0.2);
        assert_relative_eq!(segs[4][0].x, 0.12, epsilon = 1e-6);
        assert_relative_eq!(segs[3][0].z, 0.1, epsilon = 1e-6);
        for [top, _] in segs {
            assert!(top.x >= -0.2 - 1e-6 && top.x < 0.2);
            assert!(top.z >= -0.2 - 1e-6 && top.z < 0.2);
        }
    }

    #[test]
    fn lower_ends_are_widened() {
        let sway = Sway { x: 0.05, z: -0.03 };
        for [top, bottom] in segments(1.0, sway) {
            assert_relative_eq!(bottom.x, top.x * 1.5);
            assert_relative_eq!(bottom.z, top.z * 1.5);
        }
    }

    #[test]
    fn sway_shifts_every_top_equally() {
        let still = segments(1.0, STILL);
        let swayed = segments(1.0, Sway { x: 0.1, z: 0.0 });
        for (a, b) in still.iter().zip(&swayed) {
            assert_relative_eq!(b[0].x - a[0].x, 0.1, epsilon = 1e-6);
            assert_relative_eq!(b[0].z, a[0].z);
        }
    }
}
