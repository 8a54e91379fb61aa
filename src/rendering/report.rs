//! Plain-text rendering of the color table and chart.

use color_histogram::{ChartBar, ExportView, TableRow};

use crate::models::NO_COLORS_MESSAGE;

/// Width of the longest chart bar in characters.
const BAR_WIDTH: usize = 40;

/// Render the full color table.
///
/// Columns: index, hex, RGB tuple, pixel count, percentage.
pub fn render_table(view: &ExportView) -> String {
    let rows = match view {
        ExportView::NoQualifyingColors => return format!("{NO_COLORS_MESSAGE}\n"),
        ExportView::Colors { table, .. } => table,
    };

    let mut out = format!(
        "{:>4}  {:<7}  {:<15}  {:>12}  {:>8}\n",
        "#", "Hex", "RGB", "Pixels", "Share(%)"
    );
    for (i, row) in rows.iter().enumerate() {
        out.push_str(&table_line(i, row));
        out.push('\n');
    }
    out
}

fn table_line(index: usize, row: &TableRow) -> String {
    format!(
        "{:>4}  {:<7}  {:<15}  {:>12}  {:>8.2}",
        index,
        row.hex,
        row.rgb_text,
        group_thousands(row.count),
        row.percentage
    )
}

/// Render the capped chart as horizontal bars scaled to the largest share.
pub fn render_chart(view: &ExportView) -> String {
    let bars = view.chart();
    if bars.is_empty() {
        return String::new();
    }

    let max = bars
        .iter()
        .map(|bar| bar.percentage)
        .fold(0.0_f64, f64::max);

    bars.iter()
        .map(|bar| chart_line(bar, max) + "\n")
        .collect()
}

fn chart_line(bar: &ChartBar, max: f64) -> String {
    let len = if max > 0.0 {
        ((bar.percentage / max) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    format!("{:<7} {:<width$} {}", bar.label, "#".repeat(len), bar.text, width = BAR_WIDTH)
}

/// `1234567` -> `"1,234,567"`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_histogram::{ColorRecord, Rgb};
    use pretty_assertions::assert_eq;

    fn view() -> ExportView {
        let records = [
            ColorRecord::new(Rgb::new(10, 20, 30), 1_500, 75.0),
            ColorRecord::new(Rgb::new(255, 0, 0), 500, 25.0),
        ];
        ExportView::from_records(&records)
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_render_table_rows() {
        let out = render_table(&view());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("#0a141e"));
        assert!(lines[1].contains("(10, 20, 30)"));
        assert!(lines[1].contains("1,500"));
        assert!(lines[1].ends_with("75.00"));
        assert!(lines[2].contains("#ff0000"));
    }

    #[test]
    fn test_render_empty_view() {
        let out = render_table(&ExportView::NoQualifyingColors);
        assert_eq!(out, format!("{NO_COLORS_MESSAGE}\n"));
        assert!(render_chart(&ExportView::NoQualifyingColors).is_empty());
    }

    #[test]
    fn test_render_chart_scaled() {
        let out = render_chart(&view());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].matches('#').count(), 1 + BAR_WIDTH);
        assert_eq!(lines[1].matches('#').count(), 1 + BAR_WIDTH / 3);
        assert!(lines[0].ends_with("75.00%"));
    }
}
