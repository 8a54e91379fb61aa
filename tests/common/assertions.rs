//! Assertion helpers for tests.

use color_histogram::HistogramResult;
use pretty_assertions::assert_eq;

/// Assert the result holds exactly these (hex, count, percentage) rows
pub fn assert_rows(result: &HistogramResult, expected: &[(&str, u64, f64)]) {
    let actual: Vec<(&str, u64, f64)> = result
        .records()
        .iter()
        .map(|r| (r.hex(), r.count(), r.percentage()))
        .collect();
    assert_eq!(actual, expected);
}

/// Assert records follow count descending, then (r, g, b) ascending
pub fn assert_ranked(result: &HistogramResult) {
    for pair in result.records().windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.count() > b.count() || (a.count() == b.count() && a.color() < b.color()),
            "Out of order: {} ({}) before {} ({})",
            a.hex(),
            a.count(),
            b.hex(),
            b.count()
        );
    }
}
