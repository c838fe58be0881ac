//! ST7735 command set and parameter encodings

use pixelpad_core::Orientation;

/// Command bytes used by the driver
pub mod cmd {
    /// No operation
    pub const NOP: u8 = 0x00;
    /// Leave sleep mode
    pub const SLPOUT: u8 = 0x11;
    /// Normal display mode on
    pub const NORON: u8 = 0x13;
    /// Gamma curve select
    pub const GAMSET: u8 = 0x26;
    /// Display on
    pub const DISPON: u8 = 0x29;
    /// Column address set
    pub const CASET: u8 = 0x2A;
    /// Row address set
    pub const RASET: u8 = 0x2B;
    /// Memory write
    pub const RAMWR: u8 = 0x2C;
    /// Memory data access control
    pub const MADCTL: u8 = 0x36;
    /// Interface pixel format
    pub const COLMOD: u8 = 0x3A;
    /// Frame rate control (normal mode)
    pub const FRMCTR1: u8 = 0xB1;
    /// Power control 1
    pub const PWCTR1: u8 = 0xC0;
}

/// MADCTL bits
pub mod madctl {
    /// Row address order (vertical mirror)
    pub const MY: u8 = 0x80;
    /// Column address order (horizontal mirror)
    pub const MX: u8 = 0x40;
    /// Row/column exchange
    pub const MV: u8 = 0x20;
    /// Vertical refresh order
    pub const ML: u8 = 0x10;
    /// BGR subpixel order
    pub const BGR: u8 = 0x08;
    /// Horizontal refresh order
    pub const MH: u8 = 0x04;
}

/// COLMOD parameter for 16 bits per pixel
pub const COLMOD_16BPP: u8 = 0x05;

/// Gamma curve 3
pub const GAMMA_CURVE_3: u8 = 0x04;

/// MADCTL parameter for an orientation
///
/// The panel has BGR subpixels, so the BGR bit is always set.
pub const fn madctl_byte(orientation: Orientation) -> u8 {
    match orientation {
        Orientation::Default => madctl::BGR,
        Orientation::Rotated => madctl::MV | madctl::MY | madctl::MX | madctl::BGR,
        Orientation::MirroredVertical => madctl::MY | madctl::BGR,
    }
}

/// Address window end past `u16::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WindowOverflow;

/// CASET/RASET parameters for `offset..=max + offset`
///
/// Start and end are 16-bit big-endian. The end is never clamped.
pub fn encode_window(offset: u16, max: u16) -> Result<[u8; 4], WindowOverflow> {
    let end = max.checked_add(offset).ok_or(WindowOverflow)?;
    let [start_hi, start_lo] = offset.to_be_bytes();
    let [end_hi, end_lo] = end.to_be_bytes();
    Ok([start_hi, start_lo, end_hi, end_lo])
}
