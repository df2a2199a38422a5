//! Pixel storage in wire order
//!
//! Bytes are kept exactly as the strip expects them, so the frame encoder
//! can stream them without reordering. Storage is a fixed-capacity
//! `heapless::Vec`; a length that does not fit leaves the buffer absent.

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Rgb, color, rgb_from_u32};
use crate::order::ColorOrder;

/// Error returned when a strip length does not fit the buffer capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    /// Bytes needed for the requested length
    pub required: usize,
    /// Bytes available
    pub capacity: usize,
}

/// Pixel buffer for up to `MAX_BYTES` bytes of pixel data
#[derive(Debug, Clone)]
pub struct PixelBuffer<const MAX_BYTES: usize> {
    data: Option<Vec<u8, MAX_BYTES>>,
    len: u16,
    order: ColorOrder,
}

impl<const MAX_BYTES: usize> PixelBuffer<MAX_BYTES> {
    /// Create a cleared buffer for `len` pixels
    ///
    /// If `len` pixels do not fit, the buffer starts out absent with length 0.
    pub fn new(len: u16, order: ColorOrder) -> Self {
        let mut buffer = Self {
            data: None,
            len: 0,
            order,
        };
        // A failed resize leaves the buffer degraded, which is a valid state.
        let _ = buffer.resize(len);
        buffer
    }

    /// Drop the current contents and allocate room for `len` pixels.
    ///
    /// All pixels are cleared to off. On failure the buffer becomes absent
    /// and the length drops to 0.
    pub fn resize(&mut self, len: u16) -> Result<(), CapacityError> {
        self.data = None;
        self.len = 0;

        let required = self.order.buffer_len(usize::from(len));
        let mut data: Vec<u8, MAX_BYTES> = Vec::new();
        if data.resize(required, 0).is_err() {
            #[cfg(feature = "esp32-log")]
            println!(
                "[PixelBuffer.resize] {} pixels need {} bytes, capacity is {}",
                len, required, MAX_BYTES
            );
            return Err(CapacityError {
                required,
                capacity: MAX_BYTES,
            });
        }

        self.data = Some(data);
        self.len = len;
        Ok(())
    }

    /// Number of pixels
    pub const fn len(&self) -> u16 {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns false if the last resize failed
    pub const fn is_allocated(&self) -> bool {
        self.data.is_some()
    }

    pub const fn order(&self) -> ColorOrder {
        self.order
    }

    /// Raw pixel bytes in wire order
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    /// Mutable raw pixel bytes in wire order
    ///
    /// Any resize invalidates the layout assumptions of the caller.
    pub fn as_bytes_mut(&mut self) -> Option<&mut [u8]> {
        self.data.as_deref_mut()
    }

    /// Set all pixels to off
    pub fn clear(&mut self) {
        if let Some(data) = self.data.as_mut() {
            data.fill(0);
        }
    }

    /// Set a pixel from separate channels
    ///
    /// Out of range indices are ignored.
    pub fn set_rgb(&mut self, index: u16, r: u8, g: u8, b: u8) {
        if index >= self.len {
            return;
        }
        if self.order.is_mono() {
            let level = r.max(g).max(b);
            // Replicate the top bits so 255 maps to the full 10-bit range
            self.set_level(index, (u16::from(level) << 2) | u16::from(level >> 6));
            return;
        }
        let Some(data) = self.data.as_mut() else {
            return;
        };
        let offsets = self.order.offsets();
        let base = usize::from(index) * 3;
        data[base + offsets.r] = r;
        data[base + offsets.g] = g;
        data[base + offsets.b] = b;
    }

    /// Set a pixel from an [`Rgb`] color
    pub fn set(&mut self, index: u16, color: Rgb) {
        self.set_rgb(index, color.r, color.g, color.b);
    }

    /// Set a pixel from a packed `0x00RRGGBB` color
    pub fn set_packed(&mut self, index: u16, packed: u32) {
        self.set(index, rgb_from_u32(packed));
    }

    /// Read back a pixel
    ///
    /// Returns black for out of range indices. Mono pixels read back as grey.
    pub fn get(&self, index: u16) -> Rgb {
        if index >= self.len {
            return Rgb::default();
        }
        if self.order.is_mono() {
            let level = self.mono_byte(index);
            return Rgb::new(level, level, level);
        }
        let Some(data) = self.data.as_ref() else {
            return Rgb::default();
        };
        let offsets = self.order.offsets();
        let base = usize::from(index) * 3;
        Rgb::new(
            data[base + offsets.r],
            data[base + offsets.g],
            data[base + offsets.b],
        )
    }

    /// Read back a pixel as a packed `0x00RRGGBB` color
    pub fn get_packed(&self, index: u16) -> u32 {
        let rgb = self.get(index);
        color(rgb.r, rgb.g, rgb.b)
    }

    /// Fill `count` pixels starting at `first` with a packed color.
    ///
    /// `count == 0` fills to the end of the strip. The range is clipped to the
    /// strip, and a `first` past the end does nothing.
    pub fn fill(&mut self, packed: u32, first: u16, count: u16) {
        if first >= self.len {
            return;
        }
        let end = if count == 0 {
            self.len
        } else {
            first.saturating_add(count).min(self.len)
        };
        for index in first..end {
            self.set_packed(index, packed);
        }
    }

    /// Set the 10-bit level of a mono pixel
    ///
    /// Ignored for color layouts and out of range indices.
    #[allow(clippy::cast_possible_truncation)]
    pub fn set_level(&mut self, index: u16, level: u16) {
        if !self.order.is_mono() || index >= self.len {
            return;
        }
        let Some(data) = self.data.as_mut() else {
            return;
        };
        let level = level.min(0x3FF);
        let index = usize::from(index);
        let (high, low_byte, shift) = mono_position(index, usize::from(self.len));
        data[high] = (level >> 2) as u8;
        data[low_byte] = (data[low_byte] & !(0b11u8 << shift)) | (((level & 0b11) as u8) << shift);
    }

    /// 10-bit level of a mono pixel, 0 for color layouts
    pub fn level(&self, index: u16) -> u16 {
        if !self.order.is_mono() || index >= self.len {
            return 0;
        }
        let Some(data) = self.data.as_ref() else {
            return 0;
        };
        let (high, low_byte, shift) = mono_position(usize::from(index), usize::from(self.len));
        (u16::from(data[high]) << 2) | u16::from((data[low_byte] >> shift) & 0b11)
    }

    /// 8-bit level of a mono pixel
    pub(crate) fn mono_byte(&self, index: u16) -> u8 {
        self.data
            .as_ref()
            .and_then(|data| data.get(usize::from(index)).copied())
            .unwrap_or(0)
    }
}

/// Location of a mono pixel: high byte index, low-bits byte index, bit shift
const fn mono_position(index: usize, len: usize) -> (usize, usize, usize) {
    (index, len + index / 4, (index % 4) * 2)
}
