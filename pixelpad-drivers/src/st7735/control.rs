//! Register-select and reset lines
//!
//! The ST7735 latches each SPI byte as a command or as parameter/pixel data
//! depending on the register-select (D/C) line. Boards either wire RS and
//! RST to two GPIOs or expose them as bits of one memory-mapped control
//! word.

use pixelpad_hal::{OutputPin, RegisterWrite};

/// Interpretation of the bytes that follow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Command byte (RS low)
    Command,
    /// Parameter or pixel data (RS high)
    Data,
}

/// Control lines owned by the driver
pub trait ControlLines {
    /// Drive register-select for `mode`
    fn select(&mut self, mode: Mode);

    /// Assert (`true`) or release the active-low reset line
    fn set_reset(&mut self, asserted: bool);
}

impl<T: ControlLines + ?Sized> ControlLines for &mut T {
    fn select(&mut self, mode: Mode) {
        (**self).select(mode)
    }

    fn set_reset(&mut self, asserted: bool) {
        (**self).set_reset(asserted)
    }
}

/// RS and RST on two GPIO outputs
pub struct PinControl<RS, RST> {
    rs: RS,
    rst: RST,
}

impl<RS: OutputPin, RST: OutputPin> PinControl<RS, RST> {
    /// Create from the two pins
    pub fn new(rs: RS, rst: RST) -> Self {
        Self { rs, rst }
    }

    /// Give the pins back
    pub fn release(self) -> (RS, RST) {
        (self.rs, self.rst)
    }
}

impl<RS: OutputPin, RST: OutputPin> ControlLines for PinControl<RS, RST> {
    fn select(&mut self, mode: Mode) {
        self.rs.set_state(mode == Mode::Data);
    }

    fn set_reset(&mut self, asserted: bool) {
        self.rst.set_state(!asserted);
    }
}

/// RS bit of the control word
pub const CTRL_RS: u32 = 0x01;

/// RST bit of the control word (active low)
pub const CTRL_RST: u32 = 0x02;

/// RS and RST as bits of one memory-mapped control word
///
/// The register is write-only from the driver's point of view, so the
/// current word is kept in a shadow copy and written whole on each change.
pub struct RegisterControl<R> {
    regs: R,
    offset: usize,
    shadow: u32,
}

impl<R: RegisterWrite> RegisterControl<R> {
    /// Create for the control word at `offset`
    ///
    /// Nothing is written until the first line change. The shadow starts
    /// in command mode with reset released.
    pub fn new(regs: R, offset: usize) -> Self {
        Self {
            regs,
            offset,
            shadow: CTRL_RST,
        }
    }

    /// Last value written (or about to be written) to the control word
    pub fn shadow(&self) -> u32 {
        self.shadow
    }

    fn update(&mut self, bit: u32, set: bool) {
        if set {
            self.shadow |= bit;
        } else {
            self.shadow &= !bit;
        }
        self.regs.write(self.offset, self.shadow);
    }
}

impl<R: RegisterWrite> ControlLines for RegisterControl<R> {
    fn select(&mut self, mode: Mode) {
        self.update(CTRL_RS, mode == Mode::Data);
    }

    fn set_reset(&mut self, asserted: bool) {
        self.update(CTRL_RST, !asserted);
    }
}
