//! Triangle and line rasterization into a [`FrameBuffer`].
//!
//! Triangles use the edge function algorithm: iterate the bounding box and
//! keep pixels whose centre lies on the inner side of all three edges.
//!
//! ```text
//! E(P) = (P.x - A.x) * (B.y - A.y) - (P.y - A.y) * (B.x - A.x)
//! ```
//!
//! The edge values, divided by the total, are the barycentric weights used to
//! interpolate 1/w for the depth test. Both windings are accepted since the
//! immediate-mode API draws without back-face culling.
//!
//! Lines use Bresenham's algorithm with 1/w interpolated along the major axis.

use super::framebuffer::FrameBuffer;
use crate::color::Rgba;

/// Depth bias so lines drawn on a face render in front of it.
const LINE_DEPTH_BIAS: f32 = 0.0001;

/// A vertex after the viewport transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenVertex {
    pub x: f32,
    pub y: f32,
    /// Reciprocal of clip-space w; larger is closer.
    pub inv_w: f32,
}

impl ScreenVertex {
    pub fn new(x: f32, y: f32, inv_w: f32) -> Self {
        Self { x, y, inv_w }
    }
}

/// Flat color and blend state shared by every fragment of a primitive.
#[derive(Debug, Clone, Copy)]
pub struct Fill {
    pub color: Rgba,
    pub blend: bool,
}

#[inline]
fn edge_function(a: ScreenVertex, b: ScreenVertex, px: f32, py: f32) -> f32 {
    (px - a.x) * (b.y - a.y) - (py - a.y) * (b.x - a.x)
}

pub fn fill_triangle(triangle: [ScreenVertex; 3], buffer: &mut FrameBuffer, fill: Fill) {
    let [v0, v1, v2] = triangle;

    let area = edge_function(v0, v1, v2.x, v2.y);
    if area.abs() < f32::EPSILON {
        return;
    }
    let inv_area = 1.0 / area;

    // Bounding box clipped to the buffer
    let min_x = v0.x.min(v1.x).min(v2.x).floor().max(0.0) as i32;
    let max_x = (v0.x.max(v1.x).max(v2.x).ceil() as i32).min(buffer.width() as i32 - 1);
    let min_y = v0.y.min(v1.y).min(v2.y).floor().max(0.0) as i32;
    let max_y = (v0.y.max(v1.y).max(v2.y).ceil() as i32).min(buffer.height() as i32 - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            let w0 = edge_function(v1, v2, px, py);
            let w1 = edge_function(v2, v0, px, py);
            let w2 = edge_function(v0, v1, px, py);

            let inside = if area > 0.0 {
                w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
            } else {
                w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
            };
            if !inside {
                continue;
            }

            let inv_w = (w0 * v0.inv_w + w1 * v1.inv_w + w2 * v2.inv_w) * inv_area;
            buffer.write_fragment(x, y, inv_w, fill.color, fill.blend);
        }
    }
}

/// Draws a segment `width` pixels wide by stamping a square at each
/// Bresenham step.
pub fn draw_line(
    a: ScreenVertex,
    b: ScreenVertex,
    width: f32,
    buffer: &mut FrameBuffer,
    fill: Fill,
) {
    let (x0, y0) = (a.x.floor() as i32, a.y.floor() as i32);
    let (x1, y1) = (b.x.floor() as i32, b.y.floor() as i32);

    let pen = width.round().max(1.0) as i32;
    let pen_offset = (pen - 1) / 2;
    let mut stamp = |x: i32, y: i32, inv_w: f32| {
        for dy in 0..pen {
            for dx in 0..pen {
                buffer.write_fragment(
                    x + dx - pen_offset,
                    y + dy - pen_offset,
                    inv_w + LINE_DEPTH_BIAS,
                    fill.color,
                    fill.blend,
                );
            }
        }
    };

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let steps = dx.max(dy);
    if steps == 0 {
        stamp(x0, y0, a.inv_w.max(b.inv_w));
        return;
    }

    let x_step = if x0 < x1 { 1 } else { -1 };
    let y_step = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;
    let (mut x, mut y) = (x0, y0);
    let mut step = 0;

    loop {
        let t = step as f32 / steps as f32;
        stamp(x, y, a.inv_w + t * (b.inv_w - a.inv_w));

        if x == x1 && y == y1 {
            break;
        }
        step += 1;

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += x_step;
        }
        if e2 < dx {
            err += dx;
            y += y_step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, RED, WHITE};

    fn fill(color: Rgba) -> Fill {
        Fill {
            color,
            blend: false,
        }
    }

    fn count(buffer: &FrameBuffer, argb: u32) -> usize {
        buffer.pixels().iter().filter(|&&p| p == argb).count()
    }

    #[test]
    fn both_windings_are_filled() {
        let a = ScreenVertex::new(1.0, 1.0, 1.0);
        let b = ScreenVertex::new(9.0, 1.0, 1.0);
        let c = ScreenVertex::new(1.0, 9.0, 1.0);

        let mut ccw = FrameBuffer::new(10, 10);
        fill_triangle([a, b, c], &mut ccw, fill(RED.opaque()));
        let mut cw = FrameBuffer::new(10, 10);
        fill_triangle([a, c, b], &mut cw, fill(RED.opaque()));

        assert!(count(&ccw, RED.to_argb()) > 20);
        assert_eq!(ccw.pixels(), cw.pixels());
    }

    #[test]
    fn degenerate_triangle_draws_nothing() {
        let mut buffer = FrameBuffer::new(10, 10);
        let p = ScreenVertex::new(2.0, 2.0, 1.0);
        fill_triangle([p, p, ScreenVertex::new(8.0, 8.0, 1.0)], &mut buffer, fill(RED.opaque()));
        assert_eq!(count(&buffer, RED.to_argb()), 0);
    }

    #[test]
    fn nearer_triangle_occludes_regardless_of_order() {
        let tri = |inv_w| {
            [
                ScreenVertex::new(0.0, 0.0, inv_w),
                ScreenVertex::new(10.0, 0.0, inv_w),
                ScreenVertex::new(0.0, 10.0, inv_w),
            ]
        };
        let mut buffer = FrameBuffer::new(10, 10);
        fill_triangle(tri(0.5), &mut buffer, fill(RED.opaque()));
        fill_triangle(tri(0.1), &mut buffer, fill(BLACK.opaque()));
        assert_eq!(buffer.pixel(2, 2), Some(RED.to_argb()));
    }

    #[test]
    fn blended_fill_mixes_with_background() {
        let mut buffer = FrameBuffer::new(4, 4);
        let tri = [
            ScreenVertex::new(0.0, 0.0, 1.0),
            ScreenVertex::new(4.0, 0.0, 1.0),
            ScreenVertex::new(0.0, 4.0, 1.0),
        ];
        fill_triangle(
            tri,
            &mut buffer,
            Fill {
                color: BLACK.with_alpha(0.8),
                blend: true,
            },
        );
        let pixel = buffer.pixel(0, 0).unwrap();
        assert_ne!(pixel, BLACK.to_argb());
        assert_ne!(pixel, WHITE.to_argb());
    }

    #[test]
    fn line_covers_both_endpoints() {
        let mut buffer = FrameBuffer::new(10, 10);
        draw_line(
            ScreenVertex::new(1.0, 1.0, 1.0),
            ScreenVertex::new(8.0, 5.0, 1.0),
            1.0,
            &mut buffer,
            fill(BLACK.opaque()),
        );
        assert_eq!(buffer.pixel(1, 1), Some(BLACK.to_argb()));
        assert_eq!(buffer.pixel(8, 5), Some(BLACK.to_argb()));
        assert_eq!(count(&buffer, BLACK.to_argb()), 8);
    }

    #[test]
    fn wide_line_is_thicker() {
        let mut thin = FrameBuffer::new(20, 20);
        let mut wide = FrameBuffer::new(20, 20);
        let a = ScreenVertex::new(2.0, 10.0, 1.0);
        let b = ScreenVertex::new(17.0, 10.0, 1.0);
        draw_line(a, b, 1.0, &mut thin, fill(BLACK.opaque()));
        draw_line(a, b, 3.0, &mut wide, fill(BLACK.opaque()));
        assert_eq!(count(&wide, BLACK.to_argb()), 3 * count(&thin, BLACK.to_argb()) + 2 * 3);
    }

    #[test]
    fn line_wins_over_coplanar_face() {
        let mut buffer = FrameBuffer::new(10, 10);
        let tri = [
            ScreenVertex::new(0.0, 0.0, 0.5),
            ScreenVertex::new(10.0, 0.0, 0.5),
            ScreenVertex::new(0.0, 10.0, 0.5),
        ];
        fill_triangle(tri, &mut buffer, fill(RED.opaque()));
        draw_line(
            ScreenVertex::new(1.0, 2.0, 0.5),
            ScreenVertex::new(5.0, 2.0, 0.5),
            1.0,
            &mut buffer,
            fill(BLACK.opaque()),
        );
        assert_eq!(buffer.pixel(3, 2), Some(BLACK.to_argb()));
    }
}
