//! Percentage normalization against the white-suppressed total.

use super::aggregate::ColorCount;
use crate::record::ColorRecord;

/// Round to 2 decimal places, halves away from zero.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `count / total * 100`, rounded to 2 decimals. `total` must be non-zero.
#[inline]
pub fn percentage_of(count: u64, total: u64) -> f64 {
    round2(count as f64 / total as f64 * 100.0)
}

/// Turn surviving counts into records with percentages of `effective_total`.
///
/// An `effective_total` of zero yields no records.
pub fn normalize(kept: &[ColorCount], effective_total: u64) -> Vec<ColorRecord> {
    if effective_total == 0 {
        return Vec::new();
    }

    kept.iter()
        .map(|c| ColorRecord::new(c.color, c.count, percentage_of(c.count, effective_total)))
        .collect()
}
