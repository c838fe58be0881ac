//! Configuration type definitions
//!
//! These types describe one display application: which scene runs, how the
//! panel's visible area is offset inside controller RAM, whether a splash
//! is shown, and the tuning of the paddle and grid scenes. Defaults match
//! the 128x128 ST7735 module the firmware ships for.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::framebuffer::{PANEL_HEIGHT, PANEL_WIDTH};
use crate::grid::{GRID_COLUMNS, GRID_ROWS};
use crate::orientation::Orientation;

/// Which scene the frame loop renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AppMode {
    /// Joystick-driven paddle on a rotated panel
    Paddle,
    /// Block grid mirrored from shared memory
    #[default]
    Tetris,
}

impl AppMode {
    /// Orientation the frame loop renders in
    pub const fn frame_orientation(self) -> Orientation {
        match self {
            AppMode::Paddle => Orientation::Rotated,
            AppMode::Tetris => Orientation::MirroredVertical,
        }
    }

    /// Orientation programmed during bring-up
    ///
    /// A splash image is stored for the unrotated panel, so when one is
    /// shown the switch to the frame orientation happens afterwards.
    pub const fn bring_up_orientation(self, splash: bool) -> Orientation {
        if splash {
            Orientation::Default
        } else {
            self.frame_orientation()
        }
    }
}

/// Visible area placement inside controller RAM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PanelConfig {
    /// First visible column
    pub col_offset: u8,
    /// First visible row
    pub row_offset: u8,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            col_offset: 2,
            row_offset: 1,
        }
    }
}

/// Splash screen shown once after bring-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SplashConfig {
    /// Show the splash image
    pub enabled: bool,
    /// How long the image stays up (ms)
    pub hold_ms: u32,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            hold_ms: 1000,
        }
    }
}

/// Paddle scene tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PaddleConfig {
    /// Paddle width in pixels
    pub width: u16,
    /// Paddle height in pixels
    pub height: u16,
    /// Pixels moved per frame while the stick is deflected
    pub step: u16,
    /// Readings below this move the paddle left
    pub left_threshold: u16,
    /// Readings above this move the paddle right
    pub right_threshold: u16,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: 25,
            height: 5,
            step: 10,
            left_threshold: 1500,
            right_threshold: 1800,
        }
    }
}

/// Block grid scene tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct GridConfig {
    /// Address of the first grid row word
    pub base_address: u32,
    /// Edge length of one block in pixels
    pub block_size: u16,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            // SCRATCH_X bank on RP2040, free for the producer core
            base_address: 0x2004_0000,
            block_size: 6,
        }
    }
}

/// Complete display application configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DisplayConfig {
    /// Scene selection
    pub mode: AppMode,
    /// Visible area placement
    pub panel: PanelConfig,
    /// Splash screen
    pub splash: SplashConfig,
    /// Paddle scene tuning
    pub paddle: PaddleConfig,
    /// Grid scene tuning
    pub grid: GridConfig,
}

/// Configuration validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Paddle is wider than the panel
    PaddleTooWide,
    /// Paddle width or height is zero
    ZeroPaddleSize,
    /// Left threshold is above the right threshold
    ThresholdOrder,
    /// Grid at this block size does not fit on the panel
    GridTooLarge,
    /// Block size is zero
    ZeroBlockSize,
    /// Grid base address is not word aligned
    UnalignedGridBase,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ConfigError::PaddleTooWide => "paddle.width exceeds the panel width",
            ConfigError::ZeroPaddleSize => "paddle.width and paddle.height must be non-zero",
            ConfigError::ThresholdOrder => {
                "paddle.left_threshold must not exceed paddle.right_threshold"
            }
            ConfigError::GridTooLarge => "grid.block_size is too large for a 10x20 grid",
            ConfigError::ZeroBlockSize => "grid.block_size must be non-zero",
            ConfigError::UnalignedGridBase => "grid.base_address must be 4-byte aligned",
        };
        f.write_str(msg)
    }
}

impl DisplayConfig {
    /// Check the configuration against the panel geometry
    ///
    /// Paddle limits are checked for both axes since the rotated panel is
    /// square; grid limits use the unrotated panel.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let paddle = &self.paddle;
        if paddle.width == 0 || paddle.height == 0 {
            return Err(ConfigError::ZeroPaddleSize);
        }
        if usize::from(paddle.width) > PANEL_WIDTH.min(PANEL_HEIGHT)
            || usize::from(paddle.height) >= PANEL_WIDTH.min(PANEL_HEIGHT)
        {
            return Err(ConfigError::PaddleTooWide);
        }
        if paddle.left_threshold > paddle.right_threshold {
            return Err(ConfigError::ThresholdOrder);
        }

        let block = usize::from(self.grid.block_size);
        if block == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        if block * GRID_COLUMNS > PANEL_WIDTH || block * GRID_ROWS > PANEL_HEIGHT {
            return Err(ConfigError::GridTooLarge);
        }
        if self.grid.base_address % 4 != 0 {
            return Err(ConfigError::UnalignedGridBase);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(DisplayConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_paddle_matches_panel() {
        let paddle = PaddleConfig::default();
        assert_eq!(paddle.width, 25);
        assert_eq!(paddle.height, 5);
        assert_eq!(paddle.step, 10);
        assert!(paddle.left_threshold < paddle.right_threshold);
    }

    #[test]
    fn test_orientations_per_mode() {
        assert_eq!(AppMode::Paddle.frame_orientation(), Orientation::Rotated);
        assert_eq!(
            AppMode::Tetris.frame_orientation(),
            Orientation::MirroredVertical
        );
        assert_eq!(
            AppMode::Tetris.bring_up_orientation(true),
            Orientation::Default
        );
        assert_eq!(
            AppMode::Paddle.bring_up_orientation(false),
            Orientation::Rotated
        );
    }

    #[test]
    fn test_validate_rejects_bad_paddle() {
        let mut config = DisplayConfig::default();
        config.paddle.width = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroPaddleSize));

        config.paddle.width = 129;
        assert_eq!(config.validate(), Err(ConfigError::PaddleTooWide));

        config.paddle.width = 128;
        assert_eq!(config.validate(), Ok(()));

        config.paddle.left_threshold = 2000;
        assert_eq!(config.validate(), Err(ConfigError::ThresholdOrder));
    }

    #[test]
    fn test_validate_rejects_bad_grid() {
        let mut config = DisplayConfig::default();
        config.grid.block_size = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroBlockSize));

        // 7 * 20 rows = 140 > 128
        config.grid.block_size = 7;
        assert_eq!(config.validate(), Err(ConfigError::GridTooLarge));

        config.grid.block_size = 6;
        config.grid.base_address = 0x2004_0002;
        assert_eq!(config.validate(), Err(ConfigError::UnalignedGridBase));
    }
}
