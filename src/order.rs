//! Channel order of the pixel data on the wire
//!
//! Flag encoding: bits 0-1 hold the red byte offset, bits 2-3 the green
//! offset and bits 4-5 the blue offset within a 3-byte pixel.

const fn flags(r: u8, g: u8, b: u8) -> u8 {
    r | (g << 2) | (b << 4)
}

pub const FLAGS_RGB: u8 = flags(0, 1, 2);
pub const FLAGS_RBG: u8 = flags(0, 2, 1);
pub const FLAGS_GRB: u8 = flags(1, 0, 2);
pub const FLAGS_GBR: u8 = flags(2, 0, 1);
pub const FLAGS_BRG: u8 = flags(1, 2, 0);
pub const FLAGS_BGR: u8 = flags(2, 1, 0);
pub const FLAGS_MONO: u8 = 0;

/// Order in which a strip expects the three color bytes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ColorOrder {
    Rgb = FLAGS_RGB,
    Rbg = FLAGS_RBG,
    Grb = FLAGS_GRB,
    Gbr = FLAGS_GBR,
    /// Order used by most DotStar strips
    #[default]
    Brg = FLAGS_BRG,
    Bgr = FLAGS_BGR,
    /// Single-color strip, 10 bits per pixel
    Mono = FLAGS_MONO,
}

/// Byte offsets of the red, green and blue channels within a pixel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelOffsets {
    pub r: usize,
    pub g: usize,
    pub b: usize,
}

impl ColorOrder {
    /// All orders with three distinct channels
    pub const COLOR_ORDERS: [Self; 6] = [
        Self::Rgb,
        Self::Rbg,
        Self::Grb,
        Self::Gbr,
        Self::Brg,
        Self::Bgr,
    ];

    /// Parse packed offset flags
    ///
    /// Returns None unless the flags describe a permutation of {0, 1, 2}
    /// or the mono layout.
    pub const fn from_flags(value: u8) -> Option<Self> {
        Some(match value {
            FLAGS_RGB => Self::Rgb,
            FLAGS_RBG => Self::Rbg,
            FLAGS_GRB => Self::Grb,
            FLAGS_GBR => Self::Gbr,
            FLAGS_BRG => Self::Brg,
            FLAGS_BGR => Self::Bgr,
            FLAGS_MONO => Self::Mono,
            _ => return None,
        })
    }

    pub const fn flags(self) -> u8 {
        self as u8
    }

    pub const fn offsets(self) -> ChannelOffsets {
        let flags = self.flags();
        ChannelOffsets {
            r: (flags & 3) as usize,
            g: ((flags >> 2) & 3) as usize,
            b: ((flags >> 4) & 3) as usize,
        }
    }

    /// Returns true if two channel roles share one byte
    pub const fn is_mono(self) -> bool {
        matches!(self, Self::Mono)
    }

    /// Number of buffer bytes needed for `count` pixels
    pub const fn buffer_len(self, count: usize) -> usize {
        if self.is_mono() {
            count + count.div_ceil(4)
        } else {
            count * 3
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Rbg => "rbg",
            Self::Grb => "grb",
            Self::Gbr => "gbr",
            Self::Brg => "brg",
            Self::Bgr => "bgr",
            Self::Mono => "mono",
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            "rgb" => Some(Self::Rgb),
            "rbg" => Some(Self::Rbg),
            "grb" => Some(Self::Grb),
            "gbr" => Some(Self::Gbr),
            "brg" => Some(Self::Brg),
            "bgr" => Some(Self::Bgr),
            "mono" => Some(Self::Mono),
            _ => None,
        }
    }
}
