//! Joystick axis behind an ADC bridge register

use pixelpad_core::traits::{AxisSource, ADC_MASK};
use pixelpad_hal::RegisterRead;

/// Axis read from one ADC result register
///
/// The bridge reports status bits above the 12-bit conversion result;
/// they are masked off.
pub struct RegisterAxis<R> {
    regs: R,
    offset: usize,
}

impl<R: RegisterRead> RegisterAxis<R> {
    /// Create for the result register at `offset`
    pub fn new(regs: R, offset: usize) -> Self {
        Self { regs, offset }
    }
}

impl<R: RegisterRead> AxisSource for RegisterAxis<R> {
    fn sample(&mut self) -> u16 {
        (self.regs.read(self.offset) & u32::from(ADC_MASK)) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockRegs;

    #[test]
    fn test_masks_to_12_bits() {
        let regs = MockRegs::with_words(&[0, 0x8000_1ABC]);
        let mut axis = RegisterAxis::new(&regs, 4);
        assert_eq!(axis.sample(), 0xABC);
    }

    #[test]
    fn test_reads_every_sample() {
        let mut regs = MockRegs::with_words(&[1499]);
        assert_eq!(RegisterAxis::new(&regs, 0).sample(), 1499);
        regs.words[0] = 1801;
        assert_eq!(RegisterAxis::new(&regs, 0).sample(), 1801);
    }
}
