//! APA102 frame encoding
//!
//! A frame is a start marker of four zero bytes, four bytes per pixel and an
//! end run of `0xFF` bytes long enough to clock the data through every
//! pixel's shift register:
//!
//! ```text
//! 00 00 00 00 | FF c0 c1 c2 | FF c0 c1 c2 | ... | FF FF ...
//! ```
//!
//! In HD mode the pixel header carries the quantizer's power level in its low
//! five bits instead of being a fixed `0xFF`.

use crate::Transport;
use crate::brightness::Brightness;
use crate::buffer::PixelBuffer;
use crate::hd_gamma::{HdQuantizer, five_bit_hd_gamma};
use crate::order::ColorOrder;

/// Number of zero bytes in the start frame
pub const START_FRAME_LEN: usize = 4;
/// Bytes per pixel on the wire
pub const PIXEL_FRAME_LEN: usize = 4;
/// Top three bits of every pixel header
const PIXEL_HEADER: u8 = 0b1110_0000;
const POWER_MASK: u8 = 0b0001_1111;

/// Length of the end frame for `count` pixels: `ceil((count + 15) / 16)`.
///
/// Always exceeds the datasheet minimum of `ceil((count + 1) / 2)` high bits.
/// Rounds up, so it is one byte longer than `(count + 15) / 16` unless
/// `count + 15` is a multiple of 16.
pub const fn end_frame_len(count: usize) -> usize {
    (count + 15).div_ceil(16)
}

/// Total bytes sent for one frame of `count` pixels
pub const fn frame_len(count: usize) -> usize {
    START_FRAME_LEN + PIXEL_FRAME_LEN * count + end_frame_len(count)
}

/// Wire protocol variant
#[derive(Clone, Copy, Debug, Default)]
pub enum Protocol {
    /// Fixed `0xFF` pixel header, channel bytes as stored
    #[default]
    Standard,
    /// Per-pixel 5-bit brightness chosen by the quantizer
    Hd(HdQuantizer),
}

impl Protocol {
    /// HD protocol with the default quantizer
    pub const fn hd() -> Self {
        Self::Hd(five_bit_hd_gamma)
    }

    pub const fn is_hd(self) -> bool {
        matches!(self, Self::Hd(_))
    }
}

/// Serializes a pixel buffer into APA102 frames
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameEncoder {
    pub brightness: Brightness,
    pub protocol: Protocol,
}

impl FrameEncoder {
    pub const fn new(brightness: Brightness, protocol: Protocol) -> Self {
        Self {
            brightness,
            protocol,
        }
    }

    /// Byte iterator over one frame
    ///
    /// Returns None if the buffer is absent.
    pub fn frame<'a, const MAX_BYTES: usize>(
        &self,
        buffer: &'a PixelBuffer<MAX_BYTES>,
    ) -> Option<Frame<'a>> {
        let bytes = buffer.as_bytes()?;
        Some(Frame {
            bytes,
            count: usize::from(buffer.len()),
            order: buffer.order(),
            brightness: self.brightness,
            protocol: self.protocol,
            phase: FramePhase::Start { sent: 0 },
        })
    }

    /// Send one frame through the transport
    ///
    /// Makes no transport calls at all if the buffer is absent.
    pub fn encode<T: Transport, const MAX_BYTES: usize>(
        &self,
        buffer: &PixelBuffer<MAX_BYTES>,
        transport: &mut T,
    ) {
        let Some(frame) = self.frame(buffer) else {
            return;
        };
        transport.begin();
        for byte in frame {
            transport.transfer(byte);
        }
        transport.end();
    }
}

#[derive(Clone, Copy, Debug)]
enum FramePhase {
    Start { sent: usize },
    Pixel { index: usize, data: [u8; PIXEL_FRAME_LEN], sent: usize },
    End { sent: usize },
    Done,
}

/// Bytes of a single frame, in transmission order
#[derive(Clone, Debug)]
pub struct Frame<'a> {
    bytes: &'a [u8],
    count: usize,
    order: ColorOrder,
    brightness: Brightness,
    protocol: Protocol,
    phase: FramePhase,
}

impl Frame<'_> {
    /// Wire bytes for one pixel
    fn encode_pixel(&self, index: usize) -> [u8; PIXEL_FRAME_LEN] {
        let stored = if self.order.is_mono() {
            let level = self.bytes.get(index).copied().unwrap_or(0);
            [level; 3]
        } else {
            let base = index * 3;
            match self.bytes.get(base..base + 3) {
                Some(&[c0, c1, c2]) => [c0, c1, c2],
                _ => [0; 3],
            }
        };
        let scaled = stored.map(|byte| self.brightness.apply(byte));

        match self.protocol {
            Protocol::Standard => [0xFF, scaled[0], scaled[1], scaled[2]],
            Protocol::Hd(quantize) if self.order.is_mono() => {
                let level = scaled[0];
                let hd = quantize(level, level, level);
                let mantissa = hd.color.r;
                [PIXEL_HEADER | (hd.power & POWER_MASK), mantissa, mantissa, mantissa]
            }
            Protocol::Hd(quantize) => {
                let offsets = self.order.offsets();
                let hd = quantize(scaled[offsets.r], scaled[offsets.g], scaled[offsets.b]);
                let mut out = [0; 3];
                out[offsets.b] = hd.color.b;
                out[offsets.g] = hd.color.g;
                out[offsets.r] = hd.color.r;
                [PIXEL_HEADER | (hd.power & POWER_MASK), out[0], out[1], out[2]]
            }
        }
    }

    /// Phase that follows the start frame or the pixel at `index`
    fn pixel_or_end(&self, index: usize) -> FramePhase {
        if index < self.count {
            FramePhase::Pixel {
                index,
                data: self.encode_pixel(index),
                sent: 0,
            }
        } else {
            FramePhase::End { sent: 0 }
        }
    }

    fn remaining(&self) -> usize {
        let end = end_frame_len(self.count);
        match self.phase {
            FramePhase::Start { sent } => frame_len(self.count) - sent,
            FramePhase::Pixel { index, sent, .. } => {
                (self.count - index) * PIXEL_FRAME_LEN - sent + end
            }
            FramePhase::End { sent } => end - sent,
            FramePhase::Done => 0,
        }
    }
}

impl Iterator for Frame<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        loop {
            match self.phase {
                FramePhase::Start { sent } if sent < START_FRAME_LEN => {
                    self.phase = FramePhase::Start { sent: sent + 1 };
                    return Some(0x00);
                }
                FramePhase::Start { .. } => {
                    self.phase = self.pixel_or_end(0);
                }
                FramePhase::Pixel { index, data, sent } if sent < PIXEL_FRAME_LEN => {
                    self.phase = FramePhase::Pixel {
                        index,
                        data,
                        sent: sent + 1,
                    };
                    return Some(data[sent]);
                }
                FramePhase::Pixel { index, .. } => {
                    self.phase = self.pixel_or_end(index + 1);
                }
                FramePhase::End { sent } if sent < end_frame_len(self.count) => {
                    self.phase = FramePhase::End { sent: sent + 1 };
                    return Some(0xFF);
                }
                FramePhase::End { .. } => {
                    self.phase = FramePhase::Done;
                }
                FramePhase::Done => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Frame<'_> {}
