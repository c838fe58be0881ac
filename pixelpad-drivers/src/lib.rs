//! Hardware driver implementations
//!
//! This crate provides the display side of Pixelpad on top of the traits
//! in pixelpad-hal and pixelpad-core:
//!
//! - ST7735 command set, bring-up sequence and driver
//! - Frame pipeline (splash, per-frame transfer and redraw)
//! - Register-backed input sources (ADC bridge, grid block)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod error;
pub mod input;
pub mod pipeline;
pub mod st7735;

#[cfg(test)]
pub(crate) mod mock;

pub use error::DisplayError;
pub use pipeline::FramePipeline;
pub use st7735::St7735;
