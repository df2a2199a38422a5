//! 16-bit hue to RGB conversion
//!
//! The 8-bit RGB hexcone only holds 1530 distinct hues: the last step of each
//! 256-wide slice equals the first step of the next one, so every slice is
//! 255 wide and shares its boundary value with its neighbour.

/// Width of one hexcone slice
const SLICE: u32 = 255;
/// Number of distinct hues on the wheel
const HUES: u32 = SLICE * 6;

/// Convert hue, saturation and value into a packed `0x00RRGGBB` color.
///
/// # Arguments
/// * `hue` - One full turn of the color wheel over 0-65535. Pure red is
///   centered on the 16-bit rollover, so hues just above 0 and just below
///   65536 both give red and the wheel wraps contiguously in both directions.
/// * `sat` - 0 is grey, 255 is the pure hue
/// * `val` - 0 is off, 255 is full brightness
///
/// The result is linear. Pass it through [`crate::gamma::gamma32`] for
/// perceptually even output.
pub fn color_hsv(hue: u16, sat: u8, val: u8) -> u32 {
    // 0..=1530, where 1530 is the upper half of red again
    let hue = (u32::from(hue) * HUES + 32768) / 65536;

    let (r, g, b) = if hue < SLICE * 2 {
        if hue < SLICE {
            (255, hue, 0)
        } else {
            (SLICE * 2 - hue, 255, 0)
        }
    } else if hue < SLICE * 4 {
        if hue < SLICE * 3 {
            (0, 255, hue - SLICE * 2)
        } else {
            (0, SLICE * 4 - hue, 255)
        }
    } else if hue < HUES {
        if hue < SLICE * 5 {
            (hue - SLICE * 4, 0, 255)
        } else {
            (255, 0, HUES - hue)
        }
    } else {
        (255, 0, 0)
    };

    let v1 = 1 + u32::from(val);
    let s1 = 1 + u32::from(sat);
    let s2 = 255 - u32::from(sat);
    let apply = |channel: u32| (((channel * s1) >> 8) + s2) * v1;

    ((apply(r) & 0xff00) << 8) | (apply(g) & 0xff00) | (apply(b) >> 8)
}

/// Fully saturated, full brightness color for a hue
#[inline]
pub fn color_hue(hue: u16) -> u32 {
    color_hsv(hue, 255, 255)
}
