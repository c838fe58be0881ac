//! Pixelpad Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the display driver and input
//! adapters are written against. Chip-specific HALs (currently RP2040)
//! implement them, and tests substitute simulated peripherals.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  pixelpad-firmware                      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pixelpad-drivers / pixelpad-core       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pixelpad-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           ┌───────────────────┐
//!           │ pixelpad-hal-     │
//!           │    rp2040         │
//!           └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (register-select, reset)
//! - [`spi::SpiBus`] - Byte-oriented SPI transmit
//! - [`mmio::RegisterRead`], [`mmio::RegisterWrite`] - Memory-mapped
//!   peripheral registers addressed by byte offset

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod mmio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use mmio::{RegisterRead, RegisterWrite};
pub use spi::SpiBus;
