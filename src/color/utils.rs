use crate::color::Rgb;

/// Pack separate channels into a `0x00RRGGBB` value
///
/// The packed layout does not depend on the strip's color order.
#[inline]
pub const fn color(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
///
/// The most significant byte is ignored.
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 value (0x00RRGGBB format)
pub const fn rgb_to_u32(rgb: Rgb) -> u32 {
    color(rgb.r, rgb.g, rgb.b)
}
