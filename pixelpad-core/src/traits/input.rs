//! Input source traits
//!
//! Scenes sample their inputs once per frame through these traits. A
//! source returns the freshest value it has; a peripheral that fails to
//! convert keeps returning its last good reading instead of stalling the
//! frame loop.

/// Valid bits of a 12-bit ADC conversion
pub const ADC_MASK: u16 = 0x0FFF;

/// Single analog axis (joystick)
pub trait AxisSource {
    /// Take a reading in `0..=ADC_MASK`
    fn sample(&mut self) -> u16;
}

/// Block grid published by another producer
///
/// Each row is a 32-bit word whose low bits are the column occupancy,
/// bit `c` set meaning column `c` is filled.
pub trait GridSource {
    /// Read row `index`
    fn row(&mut self, index: usize) -> u32;
}

impl<T: AxisSource + ?Sized> AxisSource for &mut T {
    fn sample(&mut self) -> u16 {
        (**self).sample()
    }
}

impl<T: GridSource + ?Sized> GridSource for &mut T {
    fn row(&mut self, index: usize) -> u32 {
        (**self).row(index)
    }
}
