//! Borrowed pixel grid
//!
//! [`PixelGrid`] is an immutable `height × width × 3` view over a caller-owned
//! row-major RGB buffer. The engine never copies or mutates the pixels.

mod error;

pub use error::GridError;

use crate::color::Rgb;

/// An immutable view of decoded RGB pixels.
///
/// The buffer is row-major with three bytes per pixel (`[R, G, B, R, G, B, ...]`).
/// A grid with zero width or height is valid and yields no pixels.
///
/// # Example
///
/// ```
/// use color_histogram::{PixelGrid, Rgb};
///
/// let data = [255, 255, 255, 10, 20, 30];
/// let grid = PixelGrid::new(&data, 2, 1).unwrap();
///
/// assert_eq!(grid.len(), 2);
/// assert_eq!(grid.pixels().last(), Some(Rgb::new(10, 20, 30)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PixelGrid<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> PixelGrid<'a> {
    /// Bytes per pixel.
    pub const CHANNELS: usize = 3;

    /// Wrap a row-major RGB buffer.
    ///
    /// # Errors
    ///
    /// - [`GridError::DimensionOverflow`] if `width * height * 3` overflows `usize`
    /// - [`GridError::LengthMismatch`] if `data.len() != width * height * 3`
    pub fn new(data: &'a [u8], width: usize, height: usize) -> Result<Self, GridError> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(Self::CHANNELS))
            .ok_or(GridError::DimensionOverflow { width, height })?;

        if data.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// An empty grid with zero area.
    pub fn empty() -> Self {
        Self {
            data: &[],
            width: 0,
            height: 0,
        }
    }

    /// Grid width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of pixels (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Returns true if the grid has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The raw row-major RGB bytes.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Flatten the grid into its pixels, each exactly once, in row-major order.
    pub fn pixels(&self) -> impl ExactSizeIterator<Item = Rgb> + 'a {
        self.data
            .chunks_exact(Self::CHANNELS)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
    }

    /// Pixel at column `x`, row `y`, or `None` when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y * self.width + x) * Self::CHANNELS;
        let px = &self.data[offset..offset + Self::CHANNELS];
        Some(Rgb::new(px[0], px[1], px[2]))
    }
}
