#![no_std]

pub mod brightness;
pub mod buffer;
pub mod color;
pub mod frame;
pub mod gamma;
pub mod hd_gamma;
pub mod math8;
pub mod order;
pub mod strip;
pub mod transport;

pub use brightness::Brightness;
pub use buffer::{CapacityError, PixelBuffer};
pub use frame::{Frame, FrameEncoder, Protocol, frame_len};
pub use hd_gamma::{GammaExpansion, HdColor, HdQuantizer, PowerLevel, five_bit_hd_gamma};
pub use order::ColorOrder;
pub use strip::{DotStar, StripConfig};
pub use transport::{BitBangTransport, SpiTransport};

pub use color::{Rgb, color, color_hsv, color_hue};
pub use gamma::{gamma8, gamma32};
pub use math8::sine8;

/// Byte sink for the clock and data lines
///
/// Implement this trait to support different hardware platforms. Bytes must
/// go out in the order they are passed, without reordering or dropping.
pub trait Transport {
    /// Start of a frame
    fn begin(&mut self) {}

    /// End of a frame
    fn end(&mut self) {}

    /// Send one byte, MSB first
    fn transfer(&mut self, byte: u8);
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn begin(&mut self) {
        (**self).begin();
    }

    fn end(&mut self) {
        (**self).end();
    }

    fn transfer(&mut self, byte: u8) {
        (**self).transfer(byte);
    }
}
