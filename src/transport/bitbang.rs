use embedded_hal::digital::OutputPin;

use crate::Transport;

/// Pin error raised by [`BitBangTransport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBangError<D, C> {
    Data(D),
    Clock(C),
}

/// Software SPI over two GPIO pins
///
/// Shifts each byte out MSB first: the data line is set while the clock is
/// low and latched by the strip on the rising clock edge. The first pin
/// error ends the frame early, see [`BitBangTransport::take_error`].
#[derive(Debug)]
pub struct BitBangTransport<D: OutputPin, C: OutputPin> {
    data: D,
    clock: C,
    error: Option<BitBangError<D::Error, C::Error>>,
}

impl<D: OutputPin, C: OutputPin> BitBangTransport<D, C> {
    pub const fn new(data: D, clock: C) -> Self {
        Self {
            data,
            clock,
            error: None,
        }
    }

    /// Take the error latched during the last frame, if any
    pub fn take_error(&mut self) -> Option<BitBangError<D::Error, C::Error>> {
        self.error.take()
    }

    /// Return the data and clock pins
    pub fn release(self) -> (D, C) {
        (self.data, self.clock)
    }

    fn shift_out(&mut self, byte: u8) -> Result<(), BitBangError<D::Error, C::Error>> {
        for bit in (0..8).rev() {
            if byte & (1 << bit) == 0 {
                self.data.set_low().map_err(BitBangError::Data)?;
            } else {
                self.data.set_high().map_err(BitBangError::Data)?;
            }
            self.clock.set_high().map_err(BitBangError::Clock)?;
            self.clock.set_low().map_err(BitBangError::Clock)?;
        }
        Ok(())
    }

    fn idle(&mut self) -> Result<(), BitBangError<D::Error, C::Error>> {
        self.data.set_low().map_err(BitBangError::Data)?;
        self.clock.set_low().map_err(BitBangError::Clock)
    }
}

impl<D: OutputPin, C: OutputPin> Transport for BitBangTransport<D, C> {
    fn begin(&mut self) {
        self.error = self.idle().err();
    }

    fn end(&mut self) {
        if self.error.is_none() {
            self.error = self.idle().err();
        }
    }

    fn transfer(&mut self, byte: u8) {
        if self.error.is_some() {
            return;
        }
        self.error = self.shift_out(byte).err();
    }
}
