//! Board-agnostic core logic for the Pixelpad display firmware
//!
//! This crate contains all application logic that does not depend on
//! the display controller or a specific chip:
//!
//! - Configuration types and the embedded TOML parser
//! - Input source traits (joystick axis, block grid)
//! - RGB565 framebuffer with wire-order storage
//! - Panel orientation and logical coordinate mapping
//! - Paddle and block-grid scenes
//! - Splash image asset view
//! - Run control for the frame loop

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod framebuffer;
pub mod grid;
pub mod orientation;
pub mod paddle;
pub mod run;
pub mod scene;
pub mod splash;
pub mod traits;

pub use framebuffer::{Framebuffer, PanelFramebuffer, PANEL_HEIGHT, PANEL_WIDTH};
pub use orientation::Orientation;
pub use scene::Scene;
