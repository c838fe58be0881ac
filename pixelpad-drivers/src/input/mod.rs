//! Register-backed input sources
//!
//! Boards with an FPGA or co-processor publish joystick conversions and
//! the game grid as memory-mapped words. These adapters turn a register
//! block into the input traits the scenes sample.

pub mod register_axis;
pub mod register_grid;

pub use register_axis::RegisterAxis;
pub use register_grid::RegisterGrid;
