//! Threshold filtering and ranking.

use std::cmp::Ordering;

use crate::record::ColorRecord;

/// Ranking order: descending count, ties by ascending `(r, g, b)`.
#[inline]
pub fn rank_order(a: &ColorRecord, b: &ColorRecord) -> Ordering {
    b.count()
        .cmp(&a.count())
        .then_with(|| a.color().cmp(&b.color()))
}

/// Keep records with `percentage >= percentage_threshold`, then sort by
/// [`rank_order`].
pub fn rank(mut records: Vec<ColorRecord>, percentage_threshold: f64) -> Vec<ColorRecord> {
    records.retain(|r| r.percentage() >= percentage_threshold);
    records.sort_unstable_by(rank_order);
    records
}
