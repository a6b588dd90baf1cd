use std::collections::BTreeMap;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::rules::{RangeConfig, RuleSet};
use crate::types::CommissionKind;

/// Largest magnitude accepted for a percentage rate (10 = 1000%).
pub const MAX_PERCENTAGE_RATE: Decimal = Decimal::TEN;

/// Reasons a rule set cannot be used for calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("rule set has no ranges")]
    EmptyRuleSet,
    #[error("percentage rate {amount} of the tier starting at {start} is outside [-10, 10]")]
    AmountOutOfBounds { start: Decimal, amount: Decimal },
    #[error("a lone tier must run from 0 to 0 (open-ended), found [{start}, {end})")]
    SingleTierNotBoundless { start: Decimal, end: Decimal },
    #[error("no tier starts at 0 with a finite end")]
    NoEntryTier,
    #[error("tier starting at {at} has zero width")]
    ZeroWidthTier { at: Decimal },
    #[error("tier [{start}, {end}) ends before it starts")]
    InvertedTier { start: Decimal, end: Decimal },
    #[error("gap detected: no tier starts at {at}")]
    GapDetected { at: Decimal },
    #[error("tier starting at {start} has max {max} below min {min}")]
    InvalidClampOrder {
        start: Decimal,
        min: Decimal,
        max: Decimal,
    },
    #[error("{supplied} tiers supplied but {visited} form the partition (nested, overlapping or duplicate tiers)")]
    MalformedPartition { visited: usize, supplied: usize },
}

/// Checks that the tiers partition `[0, +inf)` without gaps or overlaps and
/// that every tier's own parameters are usable.
pub fn validate(rules: &RuleSet) -> Result<(), ValidationError> {
    let ranges = rules.ranges();
    if ranges.is_empty() {
        return Err(ValidationError::EmptyRuleSet);
    }

    check_percentage_bounds(ranges)?;

    if let [only] = ranges {
        if !only.start.is_zero() || !only.end.is_zero() {
            return Err(ValidationError::SingleTierNotBoundless {
                start: only.start,
                end: only.end,
            });
        }
        return check_clamp_order(only);
    }

    walk_chain(ranges)
}

/// Same checks as [`validate`], without the reason.
pub fn is_valid(rules: &RuleSet) -> bool {
    validate(rules).is_ok()
}

fn check_percentage_bounds(ranges: &[RangeConfig]) -> Result<(), ValidationError> {
    let limit = MAX_PERCENTAGE_RATE;
    match ranges.iter().find(|range| {
        range.kind == CommissionKind::Percentage && (range.amount < -limit || range.amount > limit)
    }) {
        Some(range) => Err(ValidationError::AmountOutOfBounds {
            start: range.start,
            amount: range.amount,
        }),
        None => Ok(()),
    }
}

fn check_clamp_order(range: &RangeConfig) -> Result<(), ValidationError> {
    if range.clamp_order_holds() {
        Ok(())
    } else {
        Err(ValidationError::InvalidClampOrder {
            start: range.start,
            min: range.min,
            max: range.max,
        })
    }
}

// Follows start -> end links from the entry tier until the open tier. Every
// supplied tier has to be reached exactly once.
fn walk_chain(ranges: &[RangeConfig]) -> Result<(), ValidationError> {
    let entry = ranges
        .iter()
        .find(|range| range.start.is_zero() && range.end > Decimal::ZERO)
        .ok_or(ValidationError::NoEntryTier)?;
    check_clamp_order(entry)?;

    let mut by_start: BTreeMap<Decimal, &RangeConfig> = BTreeMap::new();
    for range in ranges {
        by_start.entry(range.start).or_insert(range);
    }

    let supplied = ranges.len();
    let mut visited = 1usize;
    let mut last_end = entry.end;
    while !last_end.is_zero() {
        let next = by_start
            .get(&last_end)
            .copied()
            .ok_or(ValidationError::GapDetected { at: last_end })?;
        if next.start == next.end {
            return Err(ValidationError::ZeroWidthTier { at: next.start });
        }
        if !next.end.is_zero() && next.end < next.start {
            return Err(ValidationError::InvertedTier {
                start: next.start,
                end: next.end,
            });
        }
        check_clamp_order(next)?;

        visited += 1;
        if visited > supplied {
            return Err(ValidationError::MalformedPartition { visited, supplied });
        }
        last_end = next.end;
    }

    if visited != supplied {
        return Err(ValidationError::MalformedPartition { visited, supplied });
    }
    Ok(())
}
