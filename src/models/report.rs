use color_histogram::{AnalysisConfig, ChartBar, ExportView, HistogramResult, TableRow};
use serde::Serialize;

/// Message shown when no color passes the thresholds
pub const NO_COLORS_MESSAGE: &str = "No colors matched the threshold";

/// JSON report of one analysis
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct JsonReport {
    /// Where the image came from (file name, or "pasted image")
    pub source: String,
    pub total_pixels: u64,
    pub suppressed_pixels: u64,
    pub effective_pixels: u64,
    pub distinct_colors: usize,
    pub config: ReportConfig,
    pub table: Vec<ReportRow>,
    pub chart: Vec<ReportBar>,
    /// Set only when nothing qualified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Thresholds the report was produced with
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ReportConfig {
    pub percentage_threshold: f64,
    pub white_threshold: u8,
}

impl From<&AnalysisConfig> for ReportConfig {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            percentage_threshold: config.percentage_threshold,
            white_threshold: config.white_threshold,
        }
    }
}

/// One table row
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportRow {
    pub hex: String,
    pub rgb: String,
    pub count: u64,
    pub percentage: f64,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<&TableRow> for ReportRow {
    fn from(row: &TableRow) -> Self {
        Self {
            hex: row.hex.clone(),
            rgb: row.rgb_text.clone(),
            count: row.count,
            percentage: row.percentage,
            r: row.r,
            g: row.g,
            b: row.b,
        }
    }
}

/// One chart bar
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportBar {
    pub label: String,
    pub percentage: f64,
    pub color: String,
    pub text: String,
}

impl From<&ChartBar> for ReportBar {
    fn from(bar: &ChartBar) -> Self {
        Self {
            label: bar.label.clone(),
            percentage: bar.percentage,
            color: bar.color.clone(),
            text: bar.text.clone(),
        }
    }
}

impl JsonReport {
    pub fn from_result(
        source: impl Into<String>,
        config: &AnalysisConfig,
        result: &HistogramResult,
        view: &ExportView,
    ) -> Self {
        let message = view.is_empty().then(|| NO_COLORS_MESSAGE.to_string());

        Self {
            source: source.into(),
            total_pixels: result.total_pixels(),
            suppressed_pixels: result.suppressed_total(),
            effective_pixels: result.effective_total(),
            distinct_colors: result.distinct_colors(),
            config: config.into(),
            table: view.table().iter().map(ReportRow::from).collect(),
            chart: view.chart().iter().map(ReportBar::from).collect(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_histogram::ColorAnalyzer;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_serialization() {
        let config = AnalysisConfig::new(250, 0.0);
        let result = ColorAnalyzer::with_config(config)
            .analyze_bytes(&[255, 255, 255, 10, 20, 30], 2, 1)
            .unwrap();
        let report = JsonReport::from_result("test.png", &config, &result, &result.view());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["source"], "test.png");
        assert_eq!(json["total_pixels"], 2);
        assert_eq!(json["suppressed_pixels"], 1);
        assert_eq!(json["effective_pixels"], 1);
        assert_eq!(json["table"][0]["hex"], "#0a141e");
        assert_eq!(json["table"][0]["rgb"], "(10, 20, 30)");
        assert_eq!(json["chart"][0]["text"], "100.00%");
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_empty_report_has_message() {
        let config = AnalysisConfig::new(250, 0.0);
        let result = ColorAnalyzer::with_config(config)
            .analyze_bytes(&[255, 255, 255], 1, 1)
            .unwrap();
        let report = JsonReport::from_result("white.png", &config, &result, &result.view());

        assert!(report.table.is_empty());
        assert!(report.chart.is_empty());
        assert_eq!(report.message.as_deref(), Some(NO_COLORS_MESSAGE));
    }
}
