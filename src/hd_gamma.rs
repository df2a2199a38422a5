//! Five-bit HD gamma
//!
//! HD capable APA102 pixels take three 8-bit channel values plus one 5-bit
//! global brightness shared by the channels. Treating the 5-bit value as a
//! shared exponent and the channel bytes as mantissas, a 16-bit gamma
//! corrected color can keep far more precision than plain 8-bit truncation:
//! dim colors move to a lower power level and get their mantissas scaled up.
//!
//! Both the gamma expansion and the whole quantizer are plain function
//! pointers, so callers can swap in their own curve or algorithm.

use crate::color::Rgb;
use crate::gamma::gamma16;

/// Expands 8-bit channels to gamma-corrected 16-bit channels
pub type GammaExpansion = fn(r: u8, g: u8, b: u8) -> (u16, u16, u16);

/// Encodes an 8-bit color into mantissa bytes plus a 5-bit power level
pub type HdQuantizer = fn(r: u8, g: u8, b: u8) -> HdColor;

/// Power levels the quantizer can pick, coarsest first
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum PowerLevel {
    P1 = 1,
    P3 = 3,
    P7 = 7,
    P15 = 15,
    P31 = 31,
}

impl PowerLevel {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            1 => Self::P1,
            3 => Self::P3,
            7 => Self::P7,
            15 => Self::P15,
            31 => Self::P31,
            _ => return None,
        })
    }
}

impl From<PowerLevel> for u8 {
    fn from(level: PowerLevel) -> Self {
        level.as_u8()
    }
}

/// Quantized HD color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HdColor {
    /// Per-channel mantissas
    pub color: Rgb,
    /// Shared 5-bit brightness, only the low 5 bits reach the wire
    pub power: u8,
}

/// A step down the power ladder
struct LadderStep {
    level: PowerLevel,
    /// Multiplier for the 16-bit channel in the overflow test
    test_factor: u32,
    /// Multiplier for 0xFFFF in the overflow test
    limit_factor: u32,
    numerator: u32,
    denominator: u32,
}

/// Coarser power levels in the order they are tried.
///
/// The limits must stay exact to match other encoders: the last step
/// reuses the previous limit and denominator.
const LADDER: [LadderStep; 4] = [
    LadderStep {
        level: PowerLevel::P15,
        test_factor: 31,
        limit_factor: 15,
        numerator: 31,
        denominator: 15,
    },
    LadderStep {
        level: PowerLevel::P7,
        test_factor: 31 * 15,
        limit_factor: 15 * 7,
        numerator: 31 * 15,
        denominator: 15 * 7,
    },
    LadderStep {
        level: PowerLevel::P3,
        test_factor: 31 * 15 * 7,
        limit_factor: 15 * 7 * 3,
        numerator: 31 * 15 * 7,
        denominator: 15 * 7 * 3,
    },
    LadderStep {
        level: PowerLevel::P1,
        test_factor: 31 * 15 * 7 * 3,
        limit_factor: 15 * 7 * 3,
        numerator: 31 * 15 * 7 * 3,
        denominator: 15 * 7 * 3,
    },
];

/// Default gamma expansion: per-channel lookup in the 2.6 gamma table
pub fn default_gamma_expansion(r: u8, g: u8, b: u8) -> (u16, u16, u16) {
    (gamma16(r), gamma16(g), gamma16(b))
}

/// Quantize with the default gamma expansion
pub fn five_bit_hd_gamma(r: u8, g: u8, b: u8) -> HdColor {
    five_bit_hd_gamma_with(default_gamma_expansion, r, g, b)
}

/// Quantize with a caller supplied gamma expansion.
///
/// Starting from power 31 with identity scaling, walks down the ladder
/// 15, 7, 3, 1 and stops at the first level where any channel would overflow
/// 16 bits after rescaling. It never skips a level or backtracks.
pub fn five_bit_hd_gamma_with(expand: GammaExpansion, r: u8, g: u8, b: u8) -> HdColor {
    let (r16, g16, b16) = expand(r, g, b);

    // Black has nothing to amplify
    if (r16 | g16 | b16) == 0 {
        return HdColor {
            color: Rgb::default(),
            power: PowerLevel::P31.as_u8(),
        };
    }

    let channels = [u32::from(r16), u32::from(g16), u32::from(b16)];

    let mut power = PowerLevel::P31;
    let mut numerator = 1;
    let mut denominator = 1;

    for step in &LADDER {
        let limit = 0xFFFF * step.limit_factor;
        if channels.iter().any(|&c| c * step.test_factor > limit) {
            break;
        }
        power = step.level;
        numerator = step.numerator;
        denominator = step.denominator;
    }

    let [r16, g16, b16] = channels.map(|c| rescale(c, numerator, denominator));

    HdColor {
        color: Rgb::new(
            to_mantissa(r, r16),
            to_mantissa(g, g16),
            to_mantissa(b, b16),
        ),
        power: power.as_u8(),
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn rescale(value: u32, numerator: u32, denominator: u32) -> u16 {
    // Every accepted step keeps the result within 16 bits
    (value * numerator / denominator) as u16
}

/// High byte of the rescaled channel; a full input stays full.
#[allow(clippy::cast_possible_truncation)]
const fn to_mantissa(input: u8, value: u16) -> u8 {
    let high = (value >> 8) as u8;
    if input == 255 && high >= 254 { 255 } else { high }
}
