//! Per-color statistics record

use crate::color::Rgb;

/// Aggregated statistics for one distinct RGB value.
///
/// The hex string is derived once at construction and always equals the
/// canonical `#rrggbb` encoding of the stored triple. Fields are read-only so
/// that invariant cannot be broken after the fact.
///
/// # Example
///
/// ```
/// use color_histogram::{ColorRecord, Rgb};
///
/// let record = ColorRecord::new(Rgb::new(10, 20, 30), 2, 100.0);
/// assert_eq!(record.hex(), "#0a141e");
/// assert_eq!(record.count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRecord {
    color: Rgb,
    count: u64,
    percentage: f64,
    hex: String,
}

impl ColorRecord {
    pub fn new(color: Rgb, count: u64, percentage: f64) -> Self {
        Self {
            color,
            count,
            percentage,
            hex: color.to_hex(),
        }
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[inline]
    pub fn r(&self) -> u8 {
        self.color.r
    }

    #[inline]
    pub fn g(&self) -> u8 {
        self.color.g
    }

    #[inline]
    pub fn b(&self) -> u8 {
        self.color.b
    }

    /// Number of pixels in the source grid exactly equal to this color.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Share of the white-suppressed pixel total, in percent, rounded to 2 decimals.
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    /// Canonical `#rrggbb` string.
    #[inline]
    pub fn hex(&self) -> &str {
        &self.hex
    }
}
