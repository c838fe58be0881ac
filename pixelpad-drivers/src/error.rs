//! Display error type

use crate::st7735::command::WindowOverflow;

/// Errors surfaced by the display driver and frame pipeline
///
/// `E` is the error type of the underlying SPI bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError<E> {
    /// Transmit failure on the SPI bus
    Bus(E),
    /// Address window end does not fit in 16 bits
    InvalidWindow,
    /// Splash image dimensions differ from the panel
    SplashSize,
}

impl<E> From<WindowOverflow> for DisplayError<E> {
    fn from(_: WindowOverflow) -> Self {
        DisplayError::InvalidWindow
    }
}
