//! Unit bipyramid shared by every lantern body.

use crate::math::Vec3;
use crate::render::face;

pub const TOP: Vec3 = Vec3::new(0.0, 1.0, 0.0);
pub const BOTTOM: Vec3 = Vec3::new(0.0, -1.0, 0.0);
pub const V1: Vec3 = Vec3::new(1.0, 0.0, 1.0);
pub const V2: Vec3 = Vec3::new(-1.0, 0.0, 1.0);
pub const V3: Vec3 = Vec3::new(-1.0, 0.0, -1.0);
pub const V4: Vec3 = Vec3::new(1.0, 0.0, -1.0);

/// Equatorial vertices in winding order.
pub const EQUATOR: [Vec3; 4] = [V1, V2, V3, V4];

pub const FACES: [[Vec3; 3]; 8] = [
    // Upper pyramid
    face(TOP, V2, V1),
    face(TOP, V3, V2),
    face(TOP, V4, V3),
    face(TOP, V1, V4),
    // Lower pyramid
    face(BOTTOM, V1, V2),
    face(BOTTOM, V2, V3),
    face(BOTTOM, V3, V4),
    face(BOTTOM, V4, V1),
];

pub const EDGES: [[Vec3; 2]; 12] = [
    [TOP, V1],
    [TOP, V2],
    [TOP, V3],
    [TOP, V4],
    [BOTTOM, V1],
    [BOTTOM, V2],
    [BOTTOM, V3],
    [BOTTOM, V4],
    [V2, V1],
    [V1, V4],
    [V4, V3],
    [V3, V2],
];

#[cfg(test)]
mod tests {
    use super::*;

    fn same_edge(a: [Vec3; 2], b: [Vec3; 2]) -> bool {
        a == b || a == [b[1], b[0]]
    }

    #[test]
    fn every_face_edge_is_a_wireframe_edge() {
        for [a, b, c] in FACES {
            for edge in [[a, b], [b, c], [c, a]] {
                assert!(
                    EDGES.iter().any(|&e| same_edge(e, edge)),
                    "missing edge {edge:?}"
                );
            }
        }
    }

    #[test]
    fn edges_are_unique() {
        for (i, &a) in EDGES.iter().enumerate() {
            for &b in &EDGES[i + 1..] {
                assert!(!same_edge(a, b));
            }
        }
    }

    #[test]
    fn faces_touch_exactly_one_pole() {
        for tri in FACES {
            let poles = tri.iter().filter(|&&v| v == TOP || v == BOTTOM).count();
            assert_eq!(poles, 1);
        }
    }
}
