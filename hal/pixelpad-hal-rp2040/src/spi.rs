//! Blocking SPI transmit
//!
//! The display transfer is a tight loop with nothing else to schedule, so
//! the blocking driver is used. Chip-select is a plain GPIO held low for
//! the duration of each [`SpiBus::write`].

use embassy_rp::gpio::Output;
use embassy_rp::spi::{self, Blocking, Instance, Spi};
use pixelpad_hal::spi::{Phase, Polarity, SpiConfig};
use pixelpad_hal::SpiBus;

/// Convert the shared SPI configuration to embassy's
pub fn spi_config(config: &SpiConfig) -> spi::Config {
    let (polarity, phase): (Polarity, Phase) = config.mode.into();
    let mut out = spi::Config::default();
    out.frequency = config.frequency;
    out.polarity = match polarity {
        Polarity::IdleLow => spi::Polarity::IdleLow,
        Polarity::IdleHigh => spi::Polarity::IdleHigh,
    };
    out.phase = match phase {
        Phase::CaptureOnFirstTransition => spi::Phase::CaptureOnFirstTransition,
        Phase::CaptureOnSecondTransition => spi::Phase::CaptureOnSecondTransition,
    };
    out
}

/// Transmit-only SPI master with software chip-select
pub struct BlockingSpi<'d, T: Instance> {
    spi: Spi<'d, T, Blocking>,
    cs: Output<'d>,
}

impl<'d, T: Instance> BlockingSpi<'d, T> {
    /// Wrap a blocking SPI and its chip-select output
    ///
    /// `cs` should be created high (deselected).
    pub fn new(spi: Spi<'d, T, Blocking>, cs: Output<'d>) -> Self {
        Self { spi, cs }
    }
}

impl<T: Instance> SpiBus for BlockingSpi<'_, T> {
    type Error = spi::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.cs.set_low();
        let result = self.spi.blocking_write(data);
        self.cs.set_high();
        result
    }
}
