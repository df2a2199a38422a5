use crate::math8::scale8;

/// Global strip brightness
///
/// Stored as `logical + 1` (wrapping), so the stored value 0 means "no
/// scaling" and 1..=255 are the factors 1/256..=255/256 applied with a single
/// 8x8-bit multiply on output. Scaling never touches the pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brightness(u8);

impl Brightness {
    /// Full brightness, bytes go out as stored
    pub const FULL: Self = Self(0);

    /// Create from a logical brightness (0 = off, 255 = full)
    pub const fn new(logical: u8) -> Self {
        Self(logical.wrapping_add(1))
    }

    /// Create from the stored representation
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Logical brightness (0 = off, 255 = full)
    pub const fn logical(self) -> u8 {
        self.0.wrapping_sub(1)
    }

    /// Stored representation
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Returns true if output bytes are scaled
    pub const fn is_scaling(self) -> bool {
        self.0 != 0
    }

    /// Scale one output byte: `(value * raw) >> 8`, or `value` when not scaling
    #[inline]
    pub const fn apply(self, value: u8) -> u8 {
        if self.is_scaling() {
            scale8(value, self.logical())
        } else {
            value
        }
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<u8> for Brightness {
    fn from(logical: u8) -> Self {
        Self::new(logical)
    }
}
