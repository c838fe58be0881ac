//! GPIO output wrapper

use embassy_rp::gpio::Output;

/// Push-pull output implementing [`pixelpad_hal::OutputPin`]
pub struct Pin<'d> {
    output: Output<'d>,
}

impl<'d> Pin<'d> {
    /// Wrap a configured embassy output
    pub fn new(output: Output<'d>) -> Self {
        Self { output }
    }
}

impl pixelpad_hal::OutputPin for Pin<'_> {
    fn set_high(&mut self) {
        self.output.set_high();
    }

    fn set_low(&mut self) {
        self.output.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.output.is_set_high()
    }
}
