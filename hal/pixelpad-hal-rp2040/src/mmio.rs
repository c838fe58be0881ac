//! Volatile memory-mapped register block

use pixelpad_hal::{RegisterRead, RegisterWrite};

/// Block of 32-bit registers at a fixed address
///
/// Every access is a single volatile load or store, so values written by
/// the other core or by DMA are always observed.
pub struct MmioBlock {
    base: usize,
}

impl MmioBlock {
    /// Create a block starting at `base`
    ///
    /// # Safety
    ///
    /// `base` must be 4-byte aligned, and every offset the block is used
    /// with must address memory that is valid for volatile 32-bit access
    /// for as long as the block exists.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    /// Start address of the block
    pub fn base(&self) -> usize {
        self.base
    }
}

impl RegisterRead for MmioBlock {
    fn read(&self, offset: usize) -> u32 {
        let addr = (self.base + offset) as *const u32;
        // SAFETY: validity of the range is the contract of `MmioBlock::new`
        unsafe { core::ptr::read_volatile(addr) }
    }
}

impl RegisterWrite for MmioBlock {
    fn write(&mut self, offset: usize, value: u32) {
        let addr = (self.base + offset) as *mut u32;
        // SAFETY: validity of the range is the contract of `MmioBlock::new`
        unsafe { core::ptr::write_volatile(addr, value) }
    }
}
