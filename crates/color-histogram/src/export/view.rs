//! Table and chart rows.

use crate::color::Rgb;
use crate::record::ColorRecord;

/// Maximum number of bars handed to chart consumers.
pub const CHART_CAP: usize = 20;

/// One row of the full color table.
///
/// Carries the raw channel values alongside the display strings so that any
/// export format can be produced from a row without re-parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Canonical `#rrggbb`
    pub hex: String,
    /// `"(r, g, b)"`
    pub rgb_text: String,
    pub count: u64,
    pub percentage: f64,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl TableRow {
    pub fn color(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

impl From<&ColorRecord> for TableRow {
    fn from(record: &ColorRecord) -> Self {
        Self {
            hex: record.hex().to_string(),
            rgb_text: record.color().tuple_text(),
            count: record.count(),
            percentage: record.percentage(),
            r: record.r(),
            g: record.g(),
            b: record.b(),
        }
    }
}

/// One bar of the capped chart. The bar is filled with its own color.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    /// Category label (the hex string)
    pub label: String,
    pub percentage: f64,
    /// Fill color (same hex string as the label)
    pub color: String,
    /// Bar annotation, e.g. `"12.50%"`
    pub text: String,
}

impl From<&ColorRecord> for ChartBar {
    fn from(record: &ColorRecord) -> Self {
        Self {
            label: record.hex().to_string(),
            percentage: record.percentage(),
            color: record.hex().to_string(),
            text: format!("{:.2}%", record.percentage()),
        }
    }
}

/// Table and chart presentation of a ranked histogram.
///
/// # Example
///
/// ```
/// use color_histogram::{ColorRecord, ExportView, Rgb};
///
/// let records = [ColorRecord::new(Rgb::new(10, 20, 30), 2, 100.0)];
/// let view = ExportView::from_records(&records);
///
/// assert_eq!(view.table()[0].rgb_text, "(10, 20, 30)");
/// assert_eq!(view.chart()[0].text, "100.00%");
///
/// assert!(ExportView::from_records(&[]).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ExportView {
    /// Nothing passed the thresholds. Not an error.
    NoQualifyingColors,
    /// Every qualifying color as a table row, and the first
    /// [`CHART_CAP`] of them as chart bars.
    Colors {
        table: Vec<TableRow>,
        chart: Vec<ChartBar>,
    },
}

impl ExportView {
    /// Build the view from ranked records.
    pub fn from_records(records: &[ColorRecord]) -> Self {
        if records.is_empty() {
            return ExportView::NoQualifyingColors;
        }

        ExportView::Colors {
            table: records.iter().map(TableRow::from).collect(),
            chart: records.iter().take(CHART_CAP).map(ChartBar::from).collect(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, ExportView::NoQualifyingColors)
    }

    /// All table rows (empty slice when nothing qualified).
    pub fn table(&self) -> &[TableRow] {
        match self {
            ExportView::NoQualifyingColors => &[],
            ExportView::Colors { table, .. } => table,
        }
    }

    /// Chart bars, at most [`CHART_CAP`].
    pub fn chart(&self) -> &[ChartBar] {
        match self {
            ExportView::NoQualifyingColors => &[],
            ExportView::Colors { chart, .. } => chart,
        }
    }
}
