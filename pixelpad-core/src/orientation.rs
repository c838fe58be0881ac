//! Panel orientation
//!
//! The controller maps RAM to the glass according to its memory access
//! control register. When the row/column exchange is active, logical `x`
//! runs along RAM rows, so scenes drawing in logical coordinates transpose
//! before writing the framebuffer.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Scan orientation of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// Natural scan direction
    #[default]
    Default,
    /// Rows and columns exchanged, both axes mirrored
    Rotated,
    /// Row order mirrored
    MirroredVertical,
}

impl Orientation {
    /// Whether logical axes are exchanged relative to RAM
    pub const fn swaps_axes(self) -> bool {
        matches!(self, Orientation::Rotated)
    }

    /// Logical drawing area for a panel of `size`
    pub fn logical_size(self, size: Size) -> Size {
        if self.swaps_axes() {
            Size::new(size.height, size.width)
        } else {
            size
        }
    }

    /// Map a rectangle in logical coordinates to framebuffer coordinates
    pub fn to_framebuffer(self, rect: Rectangle) -> Rectangle {
        if self.swaps_axes() {
            Rectangle::new(
                Point::new(rect.top_left.y, rect.top_left.x),
                Size::new(rect.size.height, rect.size.width),
            )
        } else {
            rect
        }
    }
}
