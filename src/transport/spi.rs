use embedded_hal::spi::SpiBus;

use crate::Transport;

/// Hardware SPI transport
///
/// The data line goes to MOSI and the clock to SCK. Bus errors do not
/// interrupt a frame: the first one is latched, later bytes of the same
/// frame are dropped, and the error can be collected with
/// [`SpiTransport::take_error`].
#[derive(Debug)]
pub struct SpiTransport<S: SpiBus> {
    bus: S,
    error: Option<S::Error>,
}

impl<S: SpiBus> SpiTransport<S> {
    pub const fn new(bus: S) -> Self {
        Self { bus, error: None }
    }

    /// Take the error latched during the last frame, if any
    pub fn take_error(&mut self) -> Option<S::Error> {
        self.error.take()
    }

    /// Return the underlying bus
    pub fn release(self) -> S {
        self.bus
    }
}

impl<S: SpiBus> Transport for SpiTransport<S> {
    fn begin(&mut self) {
        self.error = None;
    }

    fn end(&mut self) {
        if self.error.is_none() {
            self.error = self.bus.flush().err();
        }
    }

    fn transfer(&mut self, byte: u8) {
        if self.error.is_some() {
            return;
        }
        self.error = self.bus.write(&[byte]).err();
    }
}
