//! Near-white removal.

use super::aggregate::ColorCount;

/// Outcome of white suppression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suppression {
    /// Colors that survived, in their original order.
    pub kept: Vec<ColorCount>,
    /// Pixels removed from the normalization denominator.
    pub suppressed_total: u64,
}

/// Remove every color whose channels all meet or exceed `white_threshold`.
///
/// The comparison is applied literally: 255 removes only pure white, 0
/// removes everything.
pub fn suppress_white(mut counts: Vec<ColorCount>, white_threshold: u8) -> Suppression {
    let mut suppressed_total = 0u64;

    counts.retain(|c| {
        if c.color.is_white(white_threshold) {
            suppressed_total += c.count;
            false
        } else {
            true
        }
    });

    Suppression {
        kept: counts,
        suppressed_total,
    }
}
