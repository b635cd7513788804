//! Clip-space clipping against the homogeneous clip cube.
//!
//! Clipping occurs after projection, before the perspective divide. The clip
//! volume is defined by:
//!
//! ```text
//! -w <= x <= w
//! -w <= y <= w
//! -w <= z <= w
//! ```
//!
//! Triangles are clipped with Sutherland-Hodgman and fan-triangulated back;
//! line segments are clipped parametrically against the same planes.

use crate::math::Vec4;

/// The 6 planes of the canonical clip-space cube.
#[derive(Clone, Copy, Debug)]
enum ClipPlane {
    Left,
    Right,
    Bottom,
    Top,
    Near,
    Far,
}

const PLANES: [ClipPlane; 6] = [
    ClipPlane::Left,
    ClipPlane::Right,
    ClipPlane::Bottom,
    ClipPlane::Top,
    ClipPlane::Near,
    ClipPlane::Far,
];

impl ClipPlane {
    /// Signed distance; positive inside the clip volume.
    #[inline]
    fn signed_distance(self, p: Vec4) -> f32 {
        match self {
            Self::Left => p.w + p.x,
            Self::Right => p.w - p.x,
            Self::Bottom => p.w + p.y,
            Self::Top => p.w - p.y,
            Self::Near => p.w + p.z,
            Self::Far => p.w - p.z,
        }
    }
}

/// Clips a clip-space triangle, returning zero or more triangles inside the volume.
pub fn clip_triangle(triangle: [Vec4; 3]) -> Vec<[Vec4; 3]> {
    let mut polygon = triangle.to_vec();

    for plane in PLANES {
        if polygon.len() < 3 {
            return Vec::new();
        }
        polygon = clip_polygon_against(&polygon, plane);
    }

    if polygon.len() < 3 {
        return Vec::new();
    }
    (1..polygon.len() - 1)
        .map(|i| [polygon[0], polygon[i], polygon[i + 1]])
        .collect()
}

fn clip_polygon_against(vertices: &[Vec4], plane: ClipPlane) -> Vec<Vec4> {
    let mut output = Vec::with_capacity(vertices.len() + 1);

    for (i, &current) in vertices.iter().enumerate() {
        let next = vertices[(i + 1) % vertices.len()];
        let d1 = plane.signed_distance(current);
        let d2 = plane.signed_distance(next);

        if d1 >= 0.0 {
            output.push(current);
            if d2 < 0.0 {
                output.push(current.lerp(next, d1 / (d1 - d2)));
            }
        } else if d2 >= 0.0 {
            output.push(current.lerp(next, d1 / (d1 - d2)));
        }
    }

    output
}

/// Clips a clip-space segment, returning the visible part if any.
pub fn clip_segment(a: Vec4, b: Vec4) -> Option<[Vec4; 2]> {
    let mut t_enter = 0.0f32;
    let mut t_exit = 1.0f32;

    for plane in PLANES {
        let da = plane.signed_distance(a);
        let db = plane.signed_distance(b);
        if da < 0.0 && db < 0.0 {
            return None;
        }
        if da < 0.0 {
            t_enter = t_enter.max(da / (da - db));
        } else if db < 0.0 {
            t_exit = t_exit.min(da / (da - db));
        }
    }

    if t_enter > t_exit {
        return None;
    }
    Some([a.lerp(b, t_enter), a.lerp(b, t_exit)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn v(x: f32, y: f32, z: f32) -> Vec4 {
        Vec4::new(x, y, z, 1.0)
    }

    #[test]
    fn inside_triangle_is_untouched() {
        let tri = [v(0.0, 0.0, 0.0), v(0.5, 0.0, 0.0), v(0.0, 0.5, 0.0)];
        assert_eq!(clip_triangle(tri), vec![tri]);
    }

    #[test]
    fn outside_triangle_is_dropped() {
        let tri = [v(2.0, 2.0, 0.0), v(3.0, 2.0, 0.0), v(2.0, 3.0, 0.0)];
        assert!(clip_triangle(tri).is_empty());
    }

    #[test]
    fn straddling_triangle_stays_inside() {
        let tri = [v(0.0, 0.0, 0.0), v(2.0, 0.0, 0.0), v(0.0, 0.5, 0.0)];
        let clipped = clip_triangle(tri);
        assert_eq!(clipped.len(), 2);
        for p in clipped.iter().flatten() {
            assert!(p.x <= p.w + 1e-6);
        }
    }

    #[test]
    fn segment_is_trimmed_to_the_volume() {
        let [a, b] = clip_segment(v(-2.0, 0.0, 0.0), v(0.0, 0.0, 0.0)).unwrap();
        assert_relative_eq!(a.x, -1.0);
        assert_relative_eq!(b.x, 0.0);
    }

    #[test]
    fn segment_behind_camera_is_dropped() {
        let behind = Vec4::new(0.0, 0.0, 0.5, -1.0);
        assert!(clip_segment(behind, Vec4::new(0.0, 0.0, 1.0, -2.0)).is_none());
    }
}
