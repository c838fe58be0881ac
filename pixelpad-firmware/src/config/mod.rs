//! Configuration loading
//!
//! The configuration is `display.toml`, embedded at build time and parsed
//! at boot with the allocation-free parser from `pixelpad-core`. build.rs
//! has already validated the same file, so the fallback below only
//! triggers if the two parsers disagree.

use defmt::{info, warn};
use pixelpad_core::config::{parse_config, DisplayConfig};

/// Embedded configuration (compiled into firmware)
/// Edit display.toml and rebuild to customize
pub const EMBEDDED_CONFIG: &str = include_str!("../../display.toml");

/// Parse and validate the embedded configuration
///
/// Falls back to the built-in defaults on any error.
pub fn load_config() -> DisplayConfig {
    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            warn!("display.toml parse error: {}, using defaults", e);
            return DisplayConfig::default();
        }
    };

    if let Err(e) = config.validate() {
        warn!("display.toml rejected: {}, using defaults", e);
        return DisplayConfig::default();
    }

    info!(
        "Config: mode={}, splash={} ({}ms), offsets={},{}",
        config.mode,
        config.splash.enabled,
        config.splash.hold_ms,
        config.panel.col_offset,
        config.panel.row_offset
    );
    config
}
