//! ST7735 TFT controller
//!
//! The ST7735 is a 132x162 RGB TFT controller driven over a write-only
//! 4-wire SPI interface. Breakout modules mount a smaller panel inside the
//! controller's RAM, so the visible area sits at a small column/row offset.
//!
//! # Wire protocol
//!
//! - Register-select low: the byte is a command
//! - Register-select high: the bytes are command parameters or pixels
//! - Pixels are RGB565, high byte first
//!
//! # Bring-up
//!
//! Reset pulse, then [`sequence::bring_up_sequence`]: sleep out, gamma,
//! frame rate, power, 16 bpp, orientation, normal mode, display on,
//! address window, memory write.

pub mod command;
pub mod control;
pub mod driver;
pub mod sequence;

pub use command::{encode_window, madctl_byte, WindowOverflow};
pub use control::{ControlLines, Mode, PinControl, RegisterControl};
pub use driver::St7735;
pub use sequence::{bring_up_sequence, BringUp, InitSequence, InitStep};
