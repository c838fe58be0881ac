//! Configuration types
//!
//! Board-agnostic display configuration, parsed from an embedded TOML file.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError};
pub use types::*;
