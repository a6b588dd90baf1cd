use log::warn;
use rust_decimal::Decimal;

use crate::normalize::NormalizedRuleSet;

/// Index of the tier with `start <= value < end`.
///
/// Tiers are sorted and contiguous, so a binary search on the two bounds is
/// enough. A value outside every tier (only possible below zero) is clamped
/// to the nearest index.
pub fn locate(rules: &NormalizedRuleSet, value: Decimal) -> usize {
    let ranges = rules.ranges();
    let mut lo = 0usize;
    let mut hi = ranges.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let range = &ranges[mid];
        if value < range.start {
            hi = mid;
        } else if range.end.is_above(value) {
            return mid;
        } else {
            lo = mid + 1;
        }
    }

    let clamped = lo.min(ranges.len().saturating_sub(1));
    if let (Some(first), Some(last)) = (ranges.first(), ranges.last()) {
        warn!(
            "value {value} is outside [{}, {}); clamped to tier {clamped}",
            first.start, last.end
        );
    }
    clamped
}
