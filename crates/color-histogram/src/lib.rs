//! color-histogram: exact dominant-color extraction for RGB images
//!
//! Given a decoded RGB pixel grid and two thresholds, this library reports
//! every distinct color with its pixel count and its share of the image,
//! ignoring near-white background pixels.
//!
//! # Quick Start
//!
//! ```
//! use color_histogram::{ColorAnalyzer, ExportView};
//!
//! // 2x2 image: two white pixels, two #0a141e pixels
//! let pixels = [255, 255, 255, 255, 255, 255, 10, 20, 30, 10, 20, 30];
//!
//! let analyzer = ColorAnalyzer::new()
//!     .white_threshold(250)
//!     .percentage_threshold(0.0);
//! let result = analyzer.analyze_bytes(&pixels, 2, 2).unwrap();
//!
//! match result.view() {
//!     ExportView::Colors { table, chart } => {
//!         assert_eq!(table[0].hex, "#0a141e");
//!         assert_eq!(table[0].percentage, 100.0);
//!         assert_eq!(chart.len(), 1);
//!     }
//!     ExportView::NoQualifyingColors => unreachable!(),
//! }
//! ```
//!
//! # Pipeline
//!
//! ```text
//! PixelGrid (H x W x 3, borrowed)
//!     |
//!     v
//! aggregate         packed 24-bit key -> exact u64 count
//!     |
//!     v
//! suppress_white    drop colors with r,g,b >= white_threshold,
//!     |             remove their pixels from the denominator
//!     v
//! normalize         count / effective_total * 100, 2 decimals
//!     |
//!     v
//! rank              percentage >= threshold, count desc, (r,g,b) asc
//!     |
//!     v
//! HistogramResult ---> ExportView (full table + chart capped at 20)
//! ```
//!
//! # Determinism
//!
//! The analysis is a pure function of the grid and [`AnalysisConfig`]. Ties in
//! pixel count are ordered by ascending `(r, g, b)`, so two runs over the same
//! input are bit-identical.
//!
//! # Empty Results
//!
//! A zero-area grid, an image where every pixel counts as white, and a
//! threshold nothing reaches all yield an empty [`HistogramResult`], whose view
//! is [`ExportView::NoQualifyingColors`]. None of these are errors.

pub mod api;
pub mod color;
pub mod export;
pub mod grid;
pub mod histogram;
pub mod record;


pub use api::{AnalysisConfig, ColorAnalyzer};
pub use color::{ParseColorError, Rgb};
pub use export::{ChartBar, ExportView, TableRow, CHART_CAP};
pub use grid::{GridError, PixelGrid};
pub use histogram::{analyze, HistogramResult};
pub use record::ColorRecord;
