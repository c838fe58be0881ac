//! Bring-up sequence
//!
//! After the hardware reset pulse the controller is configured by a fixed,
//! ordered list of commands. Each step may carry up to four parameter
//! bytes and a minimum settle time before the next step.

use heapless::Vec;

use pixelpad_core::config::PanelConfig;
use pixelpad_core::{Orientation, PANEL_HEIGHT, PANEL_WIDTH};

use super::command::{
    cmd, encode_window, madctl_byte, WindowOverflow, COLMOD_16BPP, GAMMA_CURVE_3,
};

/// Maximum parameter bytes per step
pub const MAX_STEP_DATA: usize = 4;

/// Number of steps in the bring-up sequence
pub const INIT_STEPS: usize = 12;

/// Reset pulse low and recovery time (ms)
pub const RESET_HOLD_MS: u32 = 120;

/// Settle time after leaving sleep (ms)
pub const SLEEP_OUT_MS: u32 = 120;

/// Settle time after format and mode changes (ms)
pub const SETTLE_MS: u32 = 10;

/// One command of the bring-up sequence
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitStep {
    /// Command byte
    pub command: u8,
    /// Parameter bytes
    pub data: Vec<u8, MAX_STEP_DATA>,
    /// Wait after the step (ms)
    pub delay_ms: u32,
}

impl InitStep {
    /// Build a step
    ///
    /// `data` must fit in [`MAX_STEP_DATA`] bytes. Debug builds panic on a
    /// longer slice; release builds keep the first [`MAX_STEP_DATA`].
    pub fn new(command: u8, data: &[u8], delay_ms: u32) -> Self {
        debug_assert!(
            data.len() <= MAX_STEP_DATA,
            "init step parameters exceed MAX_STEP_DATA"
        );
        Self {
            command,
            data: data.iter().take(MAX_STEP_DATA).copied().collect(),
            delay_ms,
        }
    }
}

/// The full bring-up sequence
pub type InitSequence = Vec<InitStep, INIT_STEPS>;

/// Panel geometry and orientation programmed at bring-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BringUp {
    /// Initial scan orientation
    pub orientation: Orientation,
    /// Visible columns
    pub width: u16,
    /// Visible rows
    pub height: u16,
    /// First visible column in controller RAM
    pub col_offset: u16,
    /// First visible row in controller RAM
    pub row_offset: u16,
}

impl BringUp {
    /// Bring-up for the 128x128 panel with the configured offsets
    pub fn for_panel(panel: &PanelConfig, orientation: Orientation) -> Self {
        Self {
            orientation,
            width: PANEL_WIDTH as u16,
            height: PANEL_HEIGHT as u16,
            col_offset: u16::from(panel.col_offset),
            row_offset: u16::from(panel.row_offset),
        }
    }
}

/// Build the ordered bring-up steps
pub fn bring_up_sequence(bring_up: &BringUp) -> Result<InitSequence, WindowOverflow> {
    let columns = encode_window(bring_up.col_offset, bring_up.width.saturating_sub(1))?;
    let rows = encode_window(bring_up.row_offset, bring_up.height.saturating_sub(1))?;

    Ok([
        InitStep::new(cmd::SLPOUT, &[], SLEEP_OUT_MS),
        InitStep::new(cmd::GAMSET, &[GAMMA_CURVE_3], 0),
        InitStep::new(cmd::FRMCTR1, &[0x0A, 0x14], 0),
        InitStep::new(cmd::PWCTR1, &[0x0A, 0x00], 0),
        InitStep::new(cmd::COLMOD, &[COLMOD_16BPP], SETTLE_MS),
        InitStep::new(cmd::MADCTL, &[madctl_byte(bring_up.orientation)], 0),
        InitStep::new(cmd::NORON, &[], SETTLE_MS),
        InitStep::new(cmd::DISPON, &[], 0),
        InitStep::new(cmd::CASET, &columns, 0),
        InitStep::new(cmd::RASET, &rows, 0),
        InitStep::new(cmd::NOP, &[], 0),
        InitStep::new(cmd::RAMWR, &[], 0),
    ]
    .into_iter()
    .collect())
}
