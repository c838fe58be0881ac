//! Minimal TOML parser for display configuration
//!
//! Handles only the subset the firmware's `display.toml` uses. It does NOT
//! support the full TOML grammar and never allocates.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - Integers in decimal or `0x` hex, with `_` separators
//! - [section] headers
//! - Comments (# ...)

use super::types::{
    AppMode, DisplayConfig, GridConfig, PaddleConfig, PanelConfig, SplashConfig,
};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not valid in its section
    UnknownKey,
    /// Value has the wrong type or is out of range
    InvalidValue,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::InvalidSection => f.write_str("invalid section header"),
            ParseError::UnknownKey => f.write_str("unknown key"),
            ParseError::InvalidValue => f.write_str("invalid value"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Panel,
    Splash,
    Paddle,
    Grid,
}

/// Parse TOML text into a [`DisplayConfig`]
///
/// Keys that are absent keep their defaults. The result is not validated;
/// call [`DisplayConfig::validate`] afterwards.
pub fn parse_config(input: &str) -> Result<DisplayConfig, ParseError> {
    let mut config = DisplayConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let header = header.strip_suffix(']').ok_or(ParseError::InvalidSection)?;
            section = parse_section_header(header)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        match section {
            Section::Root => apply_root(&mut config, key, value)?,
            Section::Panel => apply_panel(&mut config.panel, key, value)?,
            Section::Splash => apply_splash(&mut config.splash, key, value)?,
            Section::Paddle => apply_paddle(&mut config.paddle, key, value)?,
            Section::Grid => apply_grid(&mut config.grid, key, value)?,
        }
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "panel" => Ok(Section::Panel),
        "splash" => Ok(Section::Splash),
        "paddle" => Ok(Section::Paddle),
        "grid" => Ok(Section::Grid),
        _ => Err(ParseError::InvalidSection),
    }
}

fn apply_root(config: &mut DisplayConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "mode" => config.mode = parse_mode(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn apply_panel(panel: &mut PanelConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "col_offset" => panel.col_offset = parse_int(value)?,
        "row_offset" => panel.row_offset = parse_int(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn apply_splash(splash: &mut SplashConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "enabled" => splash.enabled = parse_bool(value)?,
        "hold_ms" => splash.hold_ms = parse_int(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn apply_paddle(paddle: &mut PaddleConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "width" => paddle.width = parse_int(value)?,
        "height" => paddle.height = parse_int(value)?,
        "step" => paddle.step = parse_int(value)?,
        "left_threshold" => paddle.left_threshold = parse_int(value)?,
        "right_threshold" => paddle.right_threshold = parse_int(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn apply_grid(grid: &mut GridConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "base_address" => grid.base_address = parse_int(value)?,
        "block_size" => grid.block_size = parse_int(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

/// Drop a trailing `# comment` that is not inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (idx, ch) in line.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..idx],
            _ => {}
        }
    }
    line
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> Result<&str, ParseError> {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or(ParseError::InvalidValue)
}

/// Parse an integer in decimal or `0x` hex
fn parse_int<T: TryFrom<u64>>(value: &str) -> Result<T, ParseError> {
    let (digits, radix) = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (value, 10),
    };
    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') {
        return Err(ParseError::InvalidValue);
    }

    let mut acc: u64 = 0;
    for ch in digits.chars().filter(|&c| c != '_') {
        let digit = ch.to_digit(radix).ok_or(ParseError::InvalidValue)?;
        acc = acc
            .checked_mul(u64::from(radix))
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or(ParseError::InvalidValue)?;
    }
    T::try_from(acc).map_err(|_| ParseError::InvalidValue)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

fn parse_mode(value: &str) -> Result<AppMode, ParseError> {
    match parse_string(value)? {
        "paddle" => Ok(AppMode::Paddle),
        "tetris" => Ok(AppMode::Tetris),
        _ => Err(ParseError::InvalidValue),
    }
}
