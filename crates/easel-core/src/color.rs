use palette::{FromColor, Hsv, Srgb};

/// Straight (non-premultiplied) sRGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn from_array(c: [u8; 4]) -> Self {
        Self::rgba(c[0], c[1], c[2], c[3])
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Convert from hue in degrees (wrapped into `[0, 360)`), saturation and
    /// value in percent (`0..=100`). The result is fully opaque.
    pub fn from_hsv(hue: u16, saturation: u8, value: u8) -> Self {
        let hsv: Hsv = Hsv::new(
            (hue % 360) as f32,
            saturation.min(100) as f32 / 100.0,
            value.min(100) as f32 / 100.0,
        );
        let rgb: Srgb<u8> = Srgb::<f32>::from_color(hsv).into_format();
        Self::rgba(rgb.red, rgb.green, rgb.blue, 255)
    }

    /// Pack as `0xAABBGGRR`, the layout used by pixel buffers.
    #[inline]
    pub const fn to_pixel(self) -> u32 {
        (self.r as u32) | ((self.g as u32) << 8) | ((self.b as u32) << 16) | ((self.a as u32) << 24)
    }

    #[inline]
    pub const fn from_pixel(px: u32) -> Self {
        Self::rgba(
            (px & 0xFF) as u8,
            ((px >> 8) & 0xFF) as u8,
            ((px >> 16) & 0xFF) as u8,
            ((px >> 24) & 0xFF) as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(Color::from_hsv(0, 100, 100), Color::rgba(255, 0, 0, 255));
        assert_eq!(Color::from_hsv(120, 100, 100), Color::rgba(0, 255, 0, 255));
        assert_eq!(Color::from_hsv(240, 100, 100), Color::rgba(0, 0, 255, 255));
        // hue wraps
        assert_eq!(Color::from_hsv(360, 100, 100), Color::from_hsv(0, 100, 100));
    }

    #[test]
    fn test_hsv_grays() {
        assert_eq!(Color::from_hsv(200, 0, 0), Color::BLACK);
        assert_eq!(Color::from_hsv(200, 0, 100), Color::WHITE);
    }

    #[test]
    fn test_pixel_packing() {
        let c = Color::rgba(1, 2, 3, 4);
        assert_eq!(c.to_pixel(), 0x0403_0201);
        assert_eq!(Color::from_pixel(c.to_pixel()), c);
    }
}
