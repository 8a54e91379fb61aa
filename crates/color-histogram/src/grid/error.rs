//! Error type for pixel grid construction

use std::fmt;

/// Error type for wrapping a raw buffer as a [`PixelGrid`](super::PixelGrid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Buffer length does not equal `width * height * 3`
    LengthMismatch {
        /// Expected byte length
        expected: usize,
        /// Actual byte length
        actual: usize,
    },
    /// `width * height * 3` does not fit in `usize`
    DimensionOverflow {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel buffer length mismatch: expected {} bytes, got {}",
                    expected, actual
                )
            }
            GridError::DimensionOverflow { width, height } => {
                write!(f, "grid dimensions overflow: {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for GridError {}
