//! Per-request analysis parameters.

/// Thresholds for one analysis call.
///
/// Both values are applied literally. Nothing is clamped or rejected: a white
/// threshold of 0 suppresses every pixel and a percentage threshold above 100
/// keeps nothing, which is the expected outcome rather than a fault.
///
/// # Defaults
///
/// - `white_threshold`: 252
/// - `percentage_threshold`: 1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    /// A color is white when `r`, `g` and `b` are all `>=` this value.
    pub white_threshold: u8,
    /// Minimum share (percent) a color needs to be reported.
    pub percentage_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            white_threshold: 252,
            percentage_threshold: 1.0,
        }
    }
}

impl AnalysisConfig {
    #[inline]
    pub fn new(white_threshold: u8, percentage_threshold: f64) -> Self {
        Self {
            white_threshold,
            percentage_threshold,
        }
    }

    /// Set the white threshold.
    #[inline]
    pub fn white_threshold(mut self, threshold: u8) -> Self {
        self.white_threshold = threshold;
        self
    }

    /// Set the percentage threshold.
    #[inline]
    pub fn percentage_threshold(mut self, threshold: f64) -> Self {
        self.percentage_threshold = threshold;
        self
    }
}
