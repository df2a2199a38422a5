//! Transports for the clock and data lines

mod bitbang;
mod spi;

pub use bitbang::{BitBangError, BitBangTransport};
pub use spi::SpiTransport;
