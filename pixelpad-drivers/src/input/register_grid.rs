//! Game grid behind a block of row registers

use pixelpad_core::traits::GridSource;
use pixelpad_hal::RegisterRead;

/// Grid rows stored as consecutive 32-bit words
pub struct RegisterGrid<R> {
    regs: R,
    base: usize,
}

impl<R: RegisterRead> RegisterGrid<R> {
    /// Create for rows starting at byte offset `base`
    pub fn new(regs: R, base: usize) -> Self {
        Self { regs, base }
    }
}

impl<R: RegisterRead> GridSource for RegisterGrid<R> {
    fn row(&mut self, index: usize) -> u32 {
        self.regs.read(self.base + index * 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockRegs;

    #[test]
    fn test_row_offsets() {
        let regs = MockRegs::with_words(&[0xDEAD, 0b1, 0b11, 0x3FF]);
        let mut grid = RegisterGrid::new(&regs, 4);
        assert_eq!(grid.row(0), 0b1);
        assert_eq!(grid.row(1), 0b11);
        assert_eq!(grid.row(2), 0x3FF);
        assert_eq!(grid.row(3), 0);
    }
}
