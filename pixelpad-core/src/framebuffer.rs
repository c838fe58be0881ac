//! RGB565 framebuffer
//!
//! Pixels are stored row-major, already in the two-byte order the panel
//! expects on the wire (high byte first), so a frame transfer is a single
//! slice write with no conversion pass.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::raw::{RawData, RawU16};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Visible panel width in pixels
pub const PANEL_WIDTH: usize = 128;

/// Visible panel height in pixels
pub const PANEL_HEIGHT: usize = 128;

/// Framebuffer sized for the panel
pub type PanelFramebuffer = Framebuffer<PANEL_WIDTH, PANEL_HEIGHT>;

/// Fixed-size RGB565 framebuffer
///
/// Index `(x, y)` addresses column `x` of row `y` in controller RAM order.
/// Scenes that draw in rotated coordinates map through
/// [`Orientation`](crate::Orientation) before touching the buffer.
#[derive(Clone)]
pub struct Framebuffer<const W: usize, const H: usize> {
    rows: [[[u8; 2]; W]; H],
}

impl<const W: usize, const H: usize> Framebuffer<W, H> {
    /// Width in pixels
    pub const WIDTH: usize = W;
    /// Height in pixels
    pub const HEIGHT: usize = H;
    /// Size of one frame on the wire
    pub const BYTE_LEN: usize = W * H * 2;

    /// Create a black framebuffer
    pub const fn new() -> Self {
        Self {
            rows: [[[0; 2]; W]; H],
        }
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Rgb565) {
        let px = encode(color);
        for row in self.rows.iter_mut() {
            row.fill(px);
        }
    }

    /// Set one pixel, returning false when it lies outside the buffer
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgb565) -> bool {
        match self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            Some(cell) => {
                *cell = encode(color);
                true
            }
            None => false,
        }
    }

    /// Read back one pixel
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb565> {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .map(|&bytes| decode(bytes))
    }

    /// Fill a rectangle, clipped to the buffer
    pub fn fill_rect(&mut self, area: &Rectangle, color: Rgb565) {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return;
        };
        // Intersection with the buffer bounds keeps both corners non-negative
        let x0 = area.top_left.x as usize;
        let x1 = bottom_right.x as usize;
        let px = encode(color);
        for row in &mut self.rows[area.top_left.y as usize..=bottom_right.y as usize] {
            row[x0..=x1].fill(px);
        }
    }

    /// The whole frame in wire order
    pub fn as_bytes(&self) -> &[u8] {
        self.rows.as_flattened().as_flattened()
    }
}

impl<const W: usize, const H: usize> Default for Framebuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> OriginDimensions for Framebuffer<W, H> {
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

impl<const W: usize, const H: usize> DrawTarget for Framebuffer<W, H> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_rect(area, color);
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

/// RGB565 color as it goes on the wire
pub fn encode(color: Rgb565) -> [u8; 2] {
    RawU16::from(color).into_inner().to_be_bytes()
}

fn decode(bytes: [u8; 2]) -> Rgb565 {
    Rgb565::from(RawU16::new(u16::from_be_bytes(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::PrimitiveStyle;

    type SmallFb = Framebuffer<8, 4>;

    #[test]
    fn test_new_is_black() {
        let fb = SmallFb::new();
        assert_eq!(fb.as_bytes().len(), SmallFb::BYTE_LEN);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_wire_order_is_high_byte_first() {
        assert_eq!(encode(Rgb565::WHITE), [0xFF, 0xFF]);
        assert_eq!(encode(Rgb565::RED), [0xF8, 0x00]);
        assert_eq!(encode(Rgb565::BLUE), [0x00, 0x1F]);
    }

    #[test]
    fn test_row_major_layout() {
        let mut fb = SmallFb::new();
        assert!(fb.set_pixel(3, 2, Rgb565::RED));
        let offset = (2 * 8 + 3) * 2;
        assert_eq!(&fb.as_bytes()[offset..offset + 2], &[0xF8, 0x00]);
        assert_eq!(fb.pixel(3, 2), Some(Rgb565::RED));
        assert_eq!(fb.pixel(2, 3), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_out_of_bounds_pixel() {
        let mut fb = SmallFb::new();
        assert!(!fb.set_pixel(8, 0, Rgb565::WHITE));
        assert!(!fb.set_pixel(0, 4, Rgb565::WHITE));
        assert_eq!(fb.pixel(8, 0), None);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut fb = SmallFb::new();
        fb.fill_rect(
            &Rectangle::new(Point::new(6, -1), Size::new(5, 3)),
            Rgb565::WHITE,
        );
        assert_eq!(fb.pixel(6, 0), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(7, 1), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(7, 2), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(5, 0), Some(Rgb565::BLACK));

        // Entirely outside: no-op
        fb.fill_rect(
            &Rectangle::new(Point::new(20, 20), Size::new(2, 2)),
            Rgb565::RED,
        );
        assert!(!fb.as_bytes().contains(&0xF8));
    }

    #[test]
    fn test_draw_target() {
        let mut fb = SmallFb::new();
        Rectangle::new(Point::new(1, 1), Size::new(2, 2))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::GREEN))
            .draw(&mut fb)
            .unwrap();
        Pixel(Point::new(-1, 0), Rgb565::RED).draw(&mut fb).unwrap();

        assert_eq!(fb.pixel(1, 1), Some(Rgb565::GREEN));
        assert_eq!(fb.pixel(2, 2), Some(Rgb565::GREEN));
        assert_eq!(fb.pixel(0, 0), Some(Rgb565::BLACK));

        fb.clear(Rgb565::BLUE).unwrap();
        assert_eq!(fb.pixel(7, 3), Some(Rgb565::BLUE));
    }
}
