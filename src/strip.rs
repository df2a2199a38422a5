use core::convert::Infallible;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use smart_leds::SmartLedsWrite;

use crate::Transport;
use crate::brightness::Brightness;
use crate::buffer::{CapacityError, PixelBuffer};
use crate::color::{Rgb, color_hsv};
use crate::frame::{FrameEncoder, Protocol};
use crate::gamma::gamma32;
use crate::order::ColorOrder;

/// Configuration for a strip
#[derive(Debug, Clone, Copy)]
pub struct StripConfig {
    /// Channel order expected by the LEDs
    pub order: ColorOrder,
    /// Initial brightness (0 = off, 255 = full)
    pub brightness: u8,
    /// Wire protocol
    pub protocol: Protocol,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            order: ColorOrder::default(),
            brightness: 255,
            protocol: Protocol::Standard,
        }
    }
}

/// DotStar (APA102) strip
///
/// Holds the pixel data in RAM; nothing reaches the LEDs until
/// [`DotStar::show`]. `MAX_BYTES` is the buffer capacity, see
/// [`ColorOrder::buffer_len`].
pub struct DotStar<T: Transport, const MAX_BYTES: usize> {
    transport: T,
    pixels: PixelBuffer<MAX_BYTES>,
    encoder: FrameEncoder,
}

impl<T: Transport, const MAX_BYTES: usize> DotStar<T, MAX_BYTES> {
    /// Create a strip of `len` pixels
    ///
    /// If the pixels do not fit in `MAX_BYTES`, the strip starts with length 0
    /// and every operation is a no-op.
    pub fn new(len: u16, transport: T, config: &StripConfig) -> Self {
        Self {
            transport,
            pixels: PixelBuffer::new(len, config.order),
            encoder: FrameEncoder::new(
                Brightness::new(config.brightness),
                config.protocol,
            ),
        }
    }

    /// Send the pixel buffer to the strip
    pub fn show(&mut self) {
        self.encoder.encode(&self.pixels, &mut self.transport);
    }

    /// Set a pixel from a packed `0x00RRGGBB` color
    pub fn set_pixel_color(&mut self, index: u16, packed: u32) {
        self.pixels.set_packed(index, packed);
    }

    /// Set a pixel from separate channels
    pub fn set_pixel_rgb(&mut self, index: u16, r: u8, g: u8, b: u8) {
        self.pixels.set_rgb(index, r, g, b);
    }

    /// Set a pixel from an [`Rgb`] color
    pub fn set_pixel(&mut self, index: u16, rgb: Rgb) {
        self.pixels.set(index, rgb);
    }

    /// Stored color of a pixel, unaffected by brightness
    pub fn pixel_color(&self, index: u16) -> u32 {
        self.pixels.get_packed(index)
    }

    pub fn pixel(&self, index: u16) -> Rgb {
        self.pixels.get(index)
    }

    /// Fill part of the strip, see [`PixelBuffer::fill`]
    pub fn fill(&mut self, packed: u32, first: u16, count: u16) {
        self.pixels.fill(packed, first, count);
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.pixels.clear();
    }

    /// Set the output brightness (0 = off, 255 = full)
    ///
    /// Applied while sending, so stored pixel colors keep full precision.
    pub fn set_brightness(&mut self, brightness: u8) {
        #[cfg(feature = "esp32-log")]
        println!("[DotStar.set_brightness] brightness {}", brightness);
        self.encoder.brightness = Brightness::new(brightness);
    }

    pub const fn brightness(&self) -> u8 {
        self.encoder.brightness.logical()
    }

    pub fn set_protocol(&mut self, protocol: Protocol) {
        #[cfg(feature = "esp32-log")]
        println!("[DotStar.set_protocol] hd: {}", protocol.is_hd());
        self.encoder.protocol = protocol;
    }

    pub const fn protocol(&self) -> Protocol {
        self.encoder.protocol
    }

    /// Change the strip length
    ///
    /// Previous pixel data is discarded and the new pixels start off.
    pub fn update_length(&mut self, len: u16) -> Result<(), CapacityError> {
        self.pixels.resize(len)
    }

    pub const fn num_pixels(&self) -> u16 {
        self.pixels.len()
    }

    pub const fn color_order(&self) -> ColorOrder {
        self.pixels.order()
    }

    /// Raw pixel bytes in device order
    pub fn pixels(&self) -> Option<&[u8]> {
        self.pixels.as_bytes()
    }

    /// Mutable raw pixel bytes in device order
    pub fn pixels_mut(&mut self) -> Option<&mut [u8]> {
        self.pixels.as_bytes_mut()
    }

    pub const fn buffer(&self) -> &PixelBuffer<MAX_BYTES> {
        &self.pixels
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Return the transport
    pub fn release(self) -> T {
        self.transport
    }

    /// Fill the strip with one or more cycles of the color wheel.
    ///
    /// # Arguments
    /// * `first_hue` - Hue of the first pixel
    /// * `reps` - Wheel cycles over the strip, negative to reverse
    /// * `sat` - Saturation
    /// * `val` - Value, combined with the global brightness on output
    /// * `gammify` - Apply gamma correction
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rainbow(&mut self, first_hue: u16, reps: i8, sat: u8, val: u8, gammify: bool) {
        let len = self.pixels.len();
        for index in 0..len {
            let offset = i64::from(index) * i64::from(reps) * 65536 / i64::from(len);
            let hue = first_hue.wrapping_add(offset as u16);
            let mut packed = color_hsv(hue, sat, val);
            if gammify {
                packed = gamma32(packed);
            }
            self.pixels.set_packed(index, packed);
        }
    }
}

impl<T: Transport, const MAX_BYTES: usize> SmartLedsWrite for DotStar<T, MAX_BYTES> {
    type Error = Infallible;
    type Color = Rgb;

    /// Store the colors from index 0 and show them
    ///
    /// Colors past the end of the strip are ignored.
    fn write<I, C>(&mut self, iterator: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = C>,
        C: Into<Self::Color>,
    {
        for (index, item) in (0..self.pixels.len()).zip(iterator) {
            self.pixels.set(index, item.into());
        }
        self.show();
        Ok(())
    }
}
