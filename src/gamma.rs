//! Gamma correction lookup tables
//!
//! Both tables use a fixed exponent of 2.6. They are literal constants so
//! that no floating point is needed on the target; [`gamma8_curve`] and
//! [`gamma16_curve`] rebuild the same curves for arbitrary exponents.

use crate::color::{Rgb, rgb_from_u32, rgb_to_u32};

/// 8-bit to 8-bit gamma curve, `floor((x / 255)^2.6 * 255 + 0.5)`
pub static GAMMA8: [u8; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 5, 6, 6, 6,
    6, 7, 7, 7, 8, 8, 8, 9, 9, 9, 10, 10, 10, 11, 11, 11, 12, 12, 13, 13, 13, 14, 14, 15, 15,
    16, 16, 17, 17, 18, 18, 19, 19, 20, 20, 21, 21, 22, 22, 23, 24, 24, 25, 25, 26, 27, 27, 28,
    29, 29, 30, 31, 31, 32, 33, 34, 34, 35, 36, 37, 38, 38, 39, 40, 41, 42, 42, 43, 44, 45, 46,
    47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 68, 69, 70,
    71, 72, 73, 75, 76, 77, 78, 80, 81, 82, 84, 85, 86, 88, 89, 90, 92, 93, 94, 96, 97, 99, 100,
    102, 103, 105, 106, 108, 109, 111, 112, 114, 115, 117, 119, 120, 122, 124, 125, 127, 129,
    130, 132, 134, 136, 137, 139, 141, 143, 145, 146, 148, 150, 152, 154, 156, 158, 160, 162,
    164, 166, 168, 170, 172, 174, 176, 178, 180, 182, 184, 186, 188, 191, 193, 195, 197, 199,
    202, 204, 206, 209, 211, 213, 215, 218, 220, 223, 225, 227, 230, 232, 235, 237, 240, 242,
    245, 247, 250, 252, 255,
];

/// 8-bit to 16-bit gamma curve, `round((x / 255)^2.6 * 65535)`
///
/// Feeds the HD quantizer, which needs more precision than 8 bits to pick a
/// power level for dim colors.
pub static GAMMA16: [u16; 256] = [
    0, 0, 0, 1, 1, 2, 4, 6, 8, 11, 14, 18, 23, 29, 35, 41, 49, 57, 67, 77, 88, 99, 112, 126,
    141, 156, 173, 191, 210, 230, 251, 274, 297, 322, 348, 375, 404, 433, 464, 497, 531, 566,
    602, 640, 680, 721, 763, 807, 853, 899, 948, 998, 1050, 1103, 1158, 1215, 1273, 1333, 1394,
    1458, 1523, 1590, 1658, 1729, 1801, 1875, 1951, 2029, 2109, 2190, 2274, 2359, 2446, 2536,
    2627, 2720, 2816, 2913, 3012, 3114, 3217, 3323, 3431, 3541, 3653, 3767, 3883, 4001, 4122,
    4245, 4370, 4498, 4627, 4759, 4893, 5030, 5169, 5310, 5453, 5599, 5747, 5898, 6051, 6206,
    6364, 6525, 6688, 6853, 7021, 7191, 7364, 7539, 7717, 7897, 8080, 8266, 8454, 8645, 8838,
    9034, 9233, 9434, 9638, 9845, 10055, 10267, 10482, 10699, 10920, 11143, 11369, 11598, 11829,
    12064, 12301, 12541, 12784, 13030, 13279, 13530, 13785, 14042, 14303, 14566, 14832, 15102,
    15374, 15649, 15928, 16209, 16493, 16781, 17071, 17365, 17661, 17961, 18264, 18570, 18879,
    19191, 19507, 19825, 20147, 20472, 20800, 21131, 21466, 21804, 22145, 22489, 22837, 23188,
    23542, 23899, 24260, 24625, 24992, 25363, 25737, 26115, 26496, 26880, 27268, 27659, 28054,
    28452, 28854, 29259, 29667, 30079, 30495, 30914, 31337, 31763, 32192, 32626, 33062, 33503,
    33947, 34394, 34846, 35300, 35759, 36221, 36687, 37156, 37629, 38106, 38586, 39071, 39558,
    40050, 40545, 41045, 41547, 42054, 42565, 43079, 43597, 44119, 44644, 45174, 45707, 46245,
    46786, 47331, 47880, 48432, 48989, 49550, 50114, 50683, 51255, 51832, 52412, 52996, 53585,
    54177, 54773, 55374, 55978, 56587, 57199, 57816, 58436, 59061, 59690, 60323, 60960, 61601,
    62246, 62896, 63549, 64207, 64869, 65535,
];

/// Gamma-correct a single channel value
#[inline]
pub fn gamma8(value: u8) -> u8 {
    GAMMA8[usize::from(value)]
}

/// Expand a channel value to a gamma-corrected 16-bit value
#[inline]
pub fn gamma16(value: u8) -> u16 {
    GAMMA16[usize::from(value)]
}

/// Gamma-correct every byte of a packed `0x00RRGGBB` color.
///
/// The unused high byte goes through the table as well, so 0 stays 0.
pub fn gamma32(color: u32) -> u32 {
    u32::from_be_bytes(color.to_be_bytes().map(gamma8))
}

/// Gamma-correct an [`Rgb`] color
pub fn gamma_rgb(color: Rgb) -> Rgb {
    rgb_from_u32(gamma32(rgb_to_u32(color)))
}

/// Compute an 8-bit gamma curve entry for an arbitrary exponent
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn gamma8_curve(value: u8, exponent: f64) -> u8 {
    let normalized = f64::from(value) / 255.0;
    libm::floor(libm::pow(normalized, exponent) * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}

/// Compute a 16-bit gamma curve entry for an arbitrary exponent
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn gamma16_curve(value: u8, exponent: f64) -> u16 {
    let normalized = f64::from(value) / 255.0;
    libm::round(libm::pow(normalized, exponent) * 65535.0).clamp(0.0, 65535.0) as u16
}
