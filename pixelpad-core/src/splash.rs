//! Splash image asset
//!
//! The splash is a raw RGB565 image stored column-major (`(x * height + y)`
//! pixels), high byte first, produced at build time from a PNG. It is
//! streamed to the panel with both axes descending, which together with the
//! default scan direction shows the picture upright.

/// Splash asset error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SplashError {
    /// Byte length does not match the stated dimensions
    SizeMismatch {
        /// Bytes required for the dimensions
        expected: usize,
        /// Bytes supplied
        actual: usize,
    },
}

/// Borrowed view of a splash image
#[derive(Debug, Clone, Copy)]
pub struct SplashImage<'a> {
    bytes: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> SplashImage<'a> {
    /// Wrap `bytes` as a `width` x `height` image
    ///
    /// Dimensions whose byte size overflows `usize` report
    /// `expected: usize::MAX`.
    pub fn new(bytes: &'a [u8], width: usize, height: usize) -> Result<Self, SplashError> {
        let expected = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(2));
        if expected != Some(bytes.len()) {
            return Err(SplashError::SizeMismatch {
                expected: expected.unwrap_or(usize::MAX),
                actual: bytes.len(),
            });
        }
        Ok(Self {
            bytes,
            width,
            height,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw bytes of pixel (`x`, `y`)
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 2]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (x * self.height + y) * 2;
        Some([self.bytes[offset], self.bytes[offset + 1]])
    }

    /// Bytes in panel streaming order
    ///
    /// Columns from `width - 1` down to 0, and within each column rows from
    /// `height - 1` down to 0.
    pub fn stream(&self) -> impl Iterator<Item = u8> + 'a {
        let bytes = self.bytes;
        let height = self.height;
        (0..self.width).rev().flat_map(move |x| {
            (0..height).rev().flat_map(move |y| {
                let offset = (x * height + y) * 2;
                [bytes[offset], bytes[offset + 1]]
            })
        })
    }
}
