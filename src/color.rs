//! Floating-point colors, the scene palette, and ARGB8888 packing.
//!
//! Colors are authored as `f32` channels in `[0, 1]` and packed into the
//! frame buffer's `0xAARRGGBB` layout at the last moment.

/// An RGB color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Pairs this color with an opacity.
    pub const fn with_alpha(self, a: f32) -> Rgba {
        Rgba { color: self, a }
    }

    /// Opaque variant of this color.
    pub const fn opaque(self) -> Rgba {
        self.with_alpha(1.0)
    }

    /// True for light, yellow-like colors (both red and green above half).
    pub fn is_yellowish(&self) -> bool {
        self.r > 0.5 && self.g > 0.5
    }

    /// Accent color for details drawn on top of a body of this color.
    ///
    /// Yellow-like bodies get a red accent, everything else a yellow one.
    pub fn accent(&self) -> Color {
        if self.is_yellowish() {
            RED
        } else {
            YELLOW
        }
    }

    /// Packs into `0xAARRGGBB` with full alpha.
    pub fn to_argb(self) -> u32 {
        pack_color(self.r, self.g, self.b, 1.0)
    }

    /// Inverse of [`Color::to_argb`], discarding alpha.
    pub fn from_argb(argb: u32) -> Self {
        let (r, g, b) = unpack_color(argb);
        Self::new(r, g, b)
    }
}

/// A color with opacity, the "current color" of the immediate-mode API.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub color: Color,
    pub a: f32,
}

impl Default for Rgba {
    fn default() -> Self {
        WHITE.opaque()
    }
}

pub const PINK: Color = Color::new(1.0, 0.0, 0.5);
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
pub const ORANGE: Color = Color::new(1.0, 0.5, 0.0);
pub const GREEN: Color = Color::new(0.0, 0.8, 0.4);
pub const BLUE: Color = Color::new(0.2, 0.2, 1.0);
pub const TEAL: Color = Color::new(0.0, 0.8, 0.8);
pub const RED: Color = Color::new(1.0, 0.1, 0.1);
/// Gem color used for vertex embellishments.
pub const SHINE: Color = Color::new(1.0, 0.9, 0.2);
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

/// Packs float channels into `0xAARRGGBB`, clamping to `[0, 1]`.
#[inline]
pub fn pack_color(r: f32, g: f32, b: f32, a: f32) -> u32 {
    let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
    (to_byte(a) << 24) | (to_byte(r) << 16) | (to_byte(g) << 8) | to_byte(b)
}

/// Unpacks the RGB channels of a `0xAARRGGBB` value.
#[inline]
pub fn unpack_color(argb: u32) -> (f32, f32, f32) {
    let channel = |shift: u32| ((argb >> shift) & 0xFF) as f32 / 255.0;
    (channel(16), channel(8), channel(0))
}

/// Source-over blend of `src` onto the packed destination pixel.
///
/// `result = src * a + dst * (1 - a)`; the stored alpha is always opaque.
#[inline]
pub fn blend_over(src: Rgba, dst: u32) -> u32 {
    let (dr, dg, db) = unpack_color(dst);
    let a = src.a.clamp(0.0, 1.0);
    let mix = |s: f32, d: f32| s * a + d * (1.0 - a);
    pack_color(
        mix(src.color.r, dr),
        mix(src.color.g, dg),
        mix(src.color.b, db),
        1.0,
    )
}
