//! Memory-mapped register abstractions
//!
//! Soft-core and FPGA-hosted peripherals (ADC bridge, game grid, control
//! port) are exposed as blocks of 32-bit registers. Drivers receive the
//! block as a capability instead of dereferencing fixed addresses, so a
//! simulated block can stand in during tests.

/// Read access to a block of 32-bit registers
///
/// `offset` is a byte offset from the start of the block and must be a
/// multiple of 4. Reads are never cached: every call samples the hardware.
pub trait RegisterRead {
    /// Read the register at `offset`
    fn read(&self, offset: usize) -> u32;
}

/// Write access to a block of 32-bit registers
///
/// `offset` is a byte offset from the start of the block and must be a
/// multiple of 4.
pub trait RegisterWrite {
    /// Write `value` to the register at `offset`
    fn write(&mut self, offset: usize, value: u32);
}

impl<T: RegisterRead + ?Sized> RegisterRead for &T {
    fn read(&self, offset: usize) -> u32 {
        (**self).read(offset)
    }
}

impl<T: RegisterWrite + ?Sized> RegisterWrite for &mut T {
    fn write(&mut self, offset: usize, value: u32) {
        (**self).write(offset, value)
    }
}
