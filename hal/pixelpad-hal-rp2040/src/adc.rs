//! Joystick axis on the RP2040 ADC
//!
//! The RP2040 ADC has 4 external channels:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29

use embassy_rp::adc::{Adc, Blocking, Channel};
use pixelpad_core::traits::{AxisSource, ADC_MASK};

/// Mid-scale reading used until the first conversion succeeds
const MID_SCALE: u16 = 0x0800;

/// Joystick axis sampled with one blocking conversion per frame
pub struct JoystickAdc<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
    last: u16,
}

impl<'d> JoystickAdc<'d> {
    /// Create from the ADC driver and the axis channel
    pub fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>) -> Self {
        Self {
            adc,
            channel,
            last: MID_SCALE,
        }
    }
}

impl AxisSource for JoystickAdc<'_> {
    fn sample(&mut self) -> u16 {
        // A failed conversion repeats the previous reading
        if let Ok(raw) = self.adc.blocking_read(&mut self.channel) {
            self.last = raw & ADC_MASK;
        }
        self.last
    }
}
