//! RP2040-specific HAL for the Pixelpad firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `pixelpad-hal` and `pixelpad-core` traits on top of `embassy-rp`:
//!
//! - Blocking SPI transmit with a software chip-select
//! - GPIO outputs for the display control lines
//! - Joystick axis on an ADC channel
//! - Volatile access to memory-mapped register blocks

#![no_std]

pub mod adc;
pub mod gpio;
pub mod mmio;
pub mod spi;

pub use adc::JoystickAdc;
pub use gpio::Pin;
pub use mmio::MmioBlock;
pub use spi::BlockingSpi;
