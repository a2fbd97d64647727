//! 8-bit RGB color with saturating arithmetic.

use std::ops::{Add, Mul};

/// An RGB color with 8-bit channels.
///
/// Scaling and addition saturate at 255 so bright sums never wrap. There is
/// no separate low-end clamp: a negative scale factor simply lands on 0
/// through the saturating float-to-int conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into a 24-bit `0xRRGGBB` value.
    #[inline]
    pub fn to_rgb24(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Unpack a `0xRRGGBB` value. Bits above 24 are ignored.
    #[inline]
    pub fn from_rgb24(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    #[inline]
    fn scale_channel(channel: u8, k: f32) -> u8 {
        // `as u8` truncates, maps NaN and negatives to 0 and saturates at 255.
        (channel as f32 * k) as u8
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    #[inline]
    fn mul(self, k: f32) -> Color {
        Color::new(
            Self::scale_channel(self.r, k),
            Self::scale_channel(self.g, k),
            Self::scale_channel(self.b, k),
        )
    }
}

impl Add for Color {
    type Output = Color;

    #[inline]
    fn add(self, other: Color) -> Color {
        Color::new(
            self.r.saturating_add(other.r),
            self.g.saturating_add(other.g),
            self.b.saturating_add(other.b),
        )
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_saturates_high() {
        let c = Color::new(200, 100, 10) * 2.0;
        assert_eq!(c, Color::new(255, 200, 20));
    }

    #[test]
    fn test_scale_truncates() {
        let c = Color::new(215, 130, 80) * 0.5;
        assert_eq!(c, Color::new(107, 65, 40));
    }

    #[test]
    fn test_negative_scale_lands_on_zero() {
        assert_eq!(Color::WHITE * -0.5, Color::BLACK);
        assert_eq!(Color::WHITE * f32::NAN, Color::BLACK);
    }

    #[test]
    fn test_add_saturates() {
        let c = Color::new(250, 10, 128) + Color::new(10, 10, 128);
        assert_eq!(c, Color::new(255, 20, 255));
    }

    #[test]
    fn test_rgb24_packing() {
        let c = Color::new(0x12, 0x34, 0x56);
        assert_eq!(c.to_rgb24(), 0x123456);
        assert_eq!(Color::from_rgb24(0x123456), c);
        assert_eq!(Color::WHITE.to_rgb24(), 0xFFFFFF);
        assert_eq!(Color::from_rgb24(0xFF00_0000), Color::BLACK);
    }
}
