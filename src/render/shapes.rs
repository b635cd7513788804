//! Tessellation of the convenience solids.

use std::f32::consts::{PI, TAU};

use super::face;
use crate::math::Vec3;

pub const CUBE_TRIANGLES: usize = 12;

// Corner order: bottom ring (-y) then top ring (+y), counter-clockwise from +x+z.
const CUBE_CORNERS: [Vec3; 8] = [
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
];

const CUBE_FACES: [[usize; 3]; CUBE_TRIANGLES] = [
    // Top
    [4, 5, 6],
    [4, 6, 7],
    // Bottom
    [0, 3, 2],
    [0, 2, 1],
    // Front (+z)
    [0, 1, 5],
    [0, 5, 4],
    // Back (-z)
    [3, 7, 6],
    [3, 6, 2],
    // Right (+x)
    [0, 4, 7],
    [0, 7, 3],
    // Left (-x)
    [1, 2, 6],
    [1, 6, 5],
];

/// Cube of edge `size` centred on the origin.
pub fn cube(size: f32) -> Vec<[Vec3; 3]> {
    let half = size / 2.0;
    CUBE_FACES
        .iter()
        .map(|&[a, b, c]| {
            face(
                CUBE_CORNERS[a] * half,
                CUBE_CORNERS[b] * half,
                CUBE_CORNERS[c] * half,
            )
        })
        .collect()
}

/// Latitude/longitude sphere with `slices` around the Y axis and `stacks`
/// from pole to pole. Degenerate counts are raised to the minimum closed shape.
pub fn sphere(radius: f32, slices: u32, stacks: u32) -> Vec<[Vec3; 3]> {
    let slices = slices.max(3);
    let stacks = stacks.max(2);

    let point = |slice: u32, stack: u32| {
        let theta = TAU * slice as f32 / slices as f32;
        let phi = PI * stack as f32 / stacks as f32;
        Vec3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.cos(),
            radius * phi.sin() * theta.sin(),
        )
    };

    let mut triangles = Vec::with_capacity((slices * stacks * 2) as usize);
    for stack in 0..stacks {
        for slice in 0..slices {
            let top_left = point(slice, stack);
            let top_right = point(slice + 1, stack);
            let bottom_left = point(slice, stack + 1);
            let bottom_right = point(slice + 1, stack + 1);

            // The pole rows collapse one edge; skip the zero-area half.
            if stack != 0 {
                triangles.push(face(top_left, top_right, bottom_left));
            }
            if stack != stacks - 1 {
                triangles.push(face(top_right, bottom_right, bottom_left));
            }
        }
    }
    triangles
}
