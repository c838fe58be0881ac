//! Hardware abstraction traits
//!
//! These traits define the interface between the scenes and the
//! board-specific input peripherals.

pub mod input;

pub use input::{AxisSource, GridSource, ADC_MASK};
