//! Color and depth buffers.
//!
//! The depth buffer stores 1/w values (reciprocal of clip-space W) for each pixel.
//! Using 1/w instead of z because it can be linearly interpolated in screen space.
//! Larger values are closer to the camera; a cleared buffer holds 0.0, which is
//! infinitely far away.

use crate::color::{self, Rgba};

pub struct FrameBuffer {
    color_buffer: Vec<u32>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Creates buffers of at least 1x1 pixels.
    pub fn new(width: u32, height: u32) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![color::WHITE.to_argb(); size],
            depth_buffer: vec![0.0; size],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, argb: u32) {
        self.color_buffer.fill(argb);
        self.depth_buffer.fill(0.0);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some((y as u32 * self.width + x as u32) as usize)
        } else {
            None
        }
    }

    /// Writes a fragment at (x, y) with depth testing.
    ///
    /// The fragment is kept only if `inv_depth` is strictly greater than the stored
    /// depth. With `blend` set the color is mixed over the existing pixel using its
    /// alpha, otherwise it replaces it. Depth is written in both cases.
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn write_fragment(&mut self, x: i32, y: i32, inv_depth: f32, color: Rgba, blend: bool) {
        let Some(idx) = self.index(x, y) else {
            return;
        };
        if inv_depth <= self.depth_buffer[idx] {
            return;
        }
        self.depth_buffer[idx] = inv_depth;
        self.color_buffer[idx] = if blend {
            color::blend_over(color, self.color_buffer[idx])
        } else {
            color.color.to_argb()
        };
    }

    /// Get the color at (x, y), or None if out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    /// Get the stored 1/w at (x, y), or None if out of bounds.
    pub fn depth(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|idx| self.depth_buffer[idx])
    }

    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    /// The color buffer as ARGB8888 bytes in native endianness, ready for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.color_buffer)
    }
}
