//! Block grid scene
//!
//! Mirrors a 10x20 playfield published by another producer as one 32-bit
//! occupancy word per row. Every block is repainted each frame, filled or
//! cleared, so no separate clear pass is needed.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::GridConfig;
use crate::framebuffer::Framebuffer;
use crate::scene::Scene;
use crate::traits::GridSource;

/// Playfield rows
pub const GRID_ROWS: usize = 20;

/// Playfield columns
pub const GRID_COLUMNS: usize = 10;

/// One frame's snapshot of the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridSample {
    rows: [u32; GRID_ROWS],
}

impl GridSample {
    /// Read every row from `source`
    pub fn read<G: GridSource>(source: &mut G) -> Self {
        let mut rows = [0; GRID_ROWS];
        for (index, row) in rows.iter_mut().enumerate() {
            *row = source.row(index);
        }
        Self { rows }
    }

    /// Build a sample from raw row words
    pub const fn from_rows(rows: [u32; GRID_ROWS]) -> Self {
        Self { rows }
    }

    /// Whether block (`row`, `column`) is filled
    ///
    /// Bits above the last column are ignored.
    pub fn is_filled(&self, row: usize, column: usize) -> bool {
        column < GRID_COLUMNS
            && self
                .rows
                .get(row)
                .is_some_and(|word| word & (1 << column) != 0)
    }
}

/// Block placement on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridLayout {
    block_size: u32,
    x_offset: i32,
}

impl GridLayout {
    /// Center the grid horizontally on a panel `panel_width` pixels wide
    pub fn centered(block_size: u16, panel_width: usize) -> Self {
        let block_size = u32::from(block_size);
        let grid_width = block_size as usize * GRID_COLUMNS;
        Self {
            block_size,
            x_offset: (panel_width.saturating_sub(grid_width) / 2) as i32,
        }
    }

    /// Left edge of column 0
    pub fn x_offset(&self) -> i32 {
        self.x_offset
    }

    /// Area covered by block (`row`, `column`)
    pub fn block(&self, row: usize, column: usize) -> Rectangle {
        let size = self.block_size as i32;
        Rectangle::new(
            Point::new(self.x_offset + column as i32 * size, row as i32 * size),
            Size::new_equal(self.block_size),
        )
    }
}

/// Grid scene: white blocks for filled cells, black for empty ones
pub struct GridScene<G> {
    source: G,
    layout: GridLayout,
}

impl<G: GridSource> GridScene<G> {
    /// Create the scene for a panel `panel_width` pixels wide
    pub fn new(source: G, config: &GridConfig, panel_width: usize) -> Self {
        Self {
            source,
            layout: GridLayout::centered(config.block_size, panel_width),
        }
    }

    /// Block placement in use
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }
}

impl<G: GridSource, const W: usize, const H: usize> Scene<W, H> for GridScene<G> {
    fn name(&self) -> &'static str {
        "tetris"
    }

    fn render(&mut self, fb: &mut Framebuffer<W, H>) {
        let sample = GridSample::read(&mut self.source);
        for row in 0..GRID_ROWS {
            for column in 0..GRID_COLUMNS {
                let color = if sample.is_filled(row, column) {
                    Rgb565::WHITE
                } else {
                    Rgb565::BLACK
                };
                fb.fill_rect(&self.layout.block(row, column), color);
            }
        }
    }
}
