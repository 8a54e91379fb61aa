//! ColorAnalyzer builder -- the ergonomic entry point for the crate.

use super::config::AnalysisConfig;
use crate::grid::{GridError, PixelGrid};
use crate::histogram::{analyze, HistogramResult};

/// Reusable analyzer holding an [`AnalysisConfig`].
///
/// Configuration methods consume and return `self`; [`analyze()`](Self::analyze)
/// takes `&self`, so one analyzer can serve any number of grids, from any
/// number of threads.
///
/// # Example
///
/// ```
/// use color_histogram::ColorAnalyzer;
///
/// let analyzer = ColorAnalyzer::new()
///     .white_threshold(250)
///     .percentage_threshold(50.0);
///
/// let result = analyzer.analyze_bytes(&[0, 0, 0], 1, 1).unwrap();
/// assert_eq!(result.records()[0].percentage(), 100.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColorAnalyzer {
    config: AnalysisConfig,
}

impl ColorAnalyzer {
    /// Create an analyzer with default thresholds (white 252, percentage 1.0).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Set the white-suppression threshold.
    #[inline]
    pub fn white_threshold(mut self, threshold: u8) -> Self {
        self.config = self.config.white_threshold(threshold);
        self
    }

    /// Set the minimum percentage a color needs to be reported.
    #[inline]
    pub fn percentage_threshold(mut self, threshold: f64) -> Self {
        self.config = self.config.percentage_threshold(threshold);
        self
    }

    #[inline]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze a grid.
    pub fn analyze(&self, grid: &PixelGrid<'_>) -> HistogramResult {
        analyze(grid, &self.config)
    }

    /// Wrap a row-major RGB buffer and analyze it.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if the buffer does not match `width * height * 3`.
    pub fn analyze_bytes(
        &self,
        data: &[u8],
        width: usize,
        height: usize,
    ) -> Result<HistogramResult, GridError> {
        let grid = PixelGrid::new(data, width, height)?;
        Ok(self.analyze(&grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_applies_thresholds() {
        let analyzer = ColorAnalyzer::new()
            .white_threshold(200)
            .percentage_threshold(10.0);
        assert_eq!(analyzer.config(), &AnalysisConfig::new(200, 10.0));
    }

    #[test]
    fn test_analyze_bytes_rejects_bad_length() {
        let err = ColorAnalyzer::new().analyze_bytes(&[0, 0], 1, 1).unwrap_err();
        assert!(matches!(err, GridError::LengthMismatch { .. }));
    }

    #[test]
    fn test_analyzer_is_reusable() {
        let analyzer = ColorAnalyzer::new().percentage_threshold(0.0);
        let a = analyzer.analyze_bytes(&[1, 2, 3, 1, 2, 3], 2, 1).unwrap();
        let b = analyzer.analyze_bytes(&[9, 9, 9], 1, 1).unwrap();

        assert_eq!(a.records()[0].count(), 2);
        assert_eq!(b.records()[0].hex(), "#090909");
    }
}
