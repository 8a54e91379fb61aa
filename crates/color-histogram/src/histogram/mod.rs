//! The histogram pipeline
//!
//! ```text
//! PixelGrid ──> aggregate ──> suppress_white ──> normalize ──> rank ──> HistogramResult
//!              (exact counts)  (drop near-white,  (% of the     (>= threshold,
//!                               shrink total)      survivors)    count desc)
//! ```
//!
//! Each stage is a plain function so it can be tested on its own; [`analyze`]
//! runs them in order. Nothing here keeps state between calls.

mod aggregate;
mod normalize;
mod rank;
mod suppress;

pub use aggregate::{aggregate, ColorCount, DENSE_MIN_PIXELS};
pub use normalize::{normalize, percentage_of, round2};
pub use rank::{rank, rank_order};
pub use suppress::{suppress_white, Suppression};

use crate::api::AnalysisConfig;
use crate::export::{ExportView, CHART_CAP};
use crate::grid::PixelGrid;
use crate::record::ColorRecord;

/// Ranked color records for one grid and configuration, plus the pixel
/// accounting that produced them.
///
/// Invariant: `suppressed_total + effective_total == total_pixels`.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramResult {
    records: Vec<ColorRecord>,
    total_pixels: u64,
    suppressed_total: u64,
    distinct_colors: usize,
}

impl HistogramResult {
    /// A result with no records for a grid of `total_pixels` pixels.
    pub fn empty(total_pixels: u64) -> Self {
        Self {
            records: Vec::new(),
            total_pixels,
            suppressed_total: 0,
            distinct_colors: 0,
        }
    }

    /// Every record that passed the threshold, ranked.
    #[inline]
    pub fn records(&self) -> &[ColorRecord] {
        &self.records
    }

    /// At most [`CHART_CAP`] leading records.
    #[inline]
    pub fn chart(&self) -> &[ColorRecord] {
        &self.records[..self.records.len().min(CHART_CAP)]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no color qualified.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Pixels in the source grid (`H * W`).
    #[inline]
    pub fn total_pixels(&self) -> u64 {
        self.total_pixels
    }

    /// Pixels classified as white and excluded.
    #[inline]
    pub fn suppressed_total(&self) -> u64 {
        self.suppressed_total
    }

    /// Denominator for percentages: `total_pixels - suppressed_total`.
    #[inline]
    pub fn effective_total(&self) -> u64 {
        self.total_pixels - self.suppressed_total
    }

    /// Distinct colors in the grid before suppression and filtering.
    #[inline]
    pub fn distinct_colors(&self) -> usize {
        self.distinct_colors
    }

    /// Build the table/chart presentation of this result.
    pub fn view(&self) -> ExportView {
        ExportView::from_records(&self.records)
    }
}

/// Run the full pipeline over `grid`.
///
/// Pure and deterministic: identical inputs give identical results. Degenerate
/// grids and fully suppressed images produce an empty result, never an error.
///
/// # Example
///
/// ```
/// use color_histogram::{analyze, AnalysisConfig, PixelGrid};
///
/// let data = [255, 255, 255, 255, 255, 255, 10, 20, 30, 10, 20, 30];
/// let grid = PixelGrid::new(&data, 2, 2).unwrap();
/// let config = AnalysisConfig::new(250, 0.0);
///
/// let result = analyze(&grid, &config);
/// assert_eq!(result.len(), 1);
/// assert_eq!(result.records()[0].hex(), "#0a141e");
/// assert_eq!(result.records()[0].percentage(), 100.0);
/// ```
pub fn analyze(grid: &PixelGrid<'_>, config: &AnalysisConfig) -> HistogramResult {
    let total_pixels = grid.len() as u64;
    if total_pixels == 0 {
        return HistogramResult::empty(0);
    }

    let counts = aggregate(grid);
    let distinct_colors = counts.len();

    let Suppression {
        kept,
        suppressed_total,
    } = suppress_white(counts, config.white_threshold);

    let effective_total = total_pixels - suppressed_total;
    let records = rank(
        normalize(&kept, effective_total),
        config.percentage_threshold,
    );

    HistogramResult {
        records,
        total_pixels,
        suppressed_total,
        distinct_colors,
    }
}
