use log::debug;
use rust_decimal::Decimal;

use crate::formula::range_commission;
use crate::rules::{RangeConfig, RuleSet};
use crate::types::{Bound, CalculationMode, CommissionKind};
use crate::validation::{validate, ValidationError};

/// A tier with its sentinels resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedRange {
    pub start: Decimal,
    pub end: Bound,
    pub kind: CommissionKind,
    pub amount: Decimal,
    pub min: Decimal,
    pub max: Bound,
}

impl NormalizedRange {
    pub fn contains(&self, value: Decimal) -> bool {
        self.start <= value && self.end.is_above(value)
    }

    /// `end - start`, or `None` for the open-ended tier.
    pub fn width(&self) -> Option<Decimal> {
        self.end.finite().map(|end| end.saturating_sub(self.start))
    }

    pub fn commission(&self, portion: Decimal) -> Decimal {
        range_commission(self.kind, self.amount, self.min, self.max, portion)
    }
}

impl From<&RangeConfig> for NormalizedRange {
    fn from(value: &RangeConfig) -> Self {
        Self {
            start: value.start,
            end: Bound::from_sentinel(value.end),
            kind: value.kind,
            amount: value.amount,
            min: value.min,
            max: Bound::from_sentinel(value.max),
        }
    }
}

/// Calculation-ready form of a [`RuleSet`].
///
/// `ranges` are sorted by `start` and abut each other; only the last one is
/// open-ended. In proportional mode `prefix[i]` holds the summed full-width
/// commission of `ranges[..i]`, so `prefix.len() == ranges.len() + 1`. It is
/// empty in absolute mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRuleSet {
    mode: CalculationMode,
    decimal_places: u32,
    ranges: Vec<NormalizedRange>,
    prefix: Vec<Decimal>,
}

impl NormalizedRuleSet {
    pub fn mode(&self) -> CalculationMode {
        self.mode
    }

    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    pub fn ranges(&self) -> &[NormalizedRange] {
        &self.ranges
    }

    pub fn prefix(&self) -> &[Decimal] {
        &self.prefix
    }
}

/// Validates `rules` and builds its normalized form.
///
/// Most callers go through [`RuleSet::normalized`], which runs this once per
/// rule set and keeps the result.
pub fn normalize(rules: &RuleSet) -> Result<NormalizedRuleSet, ValidationError> {
    validate(rules)?;

    let mut ranges: Vec<NormalizedRange> =
        rules.ranges().iter().map(NormalizedRange::from).collect();
    // starts are unique once validated
    ranges.sort_by(|a, b| a.start.cmp(&b.start));

    let prefix = match rules.mode() {
        CalculationMode::Proportional => proportional_prefix(&ranges),
        CalculationMode::Absolute => Vec::new(),
    };

    debug!(
        "normalized rule set: mode={} tiers={} decimal_places={}",
        rules.mode(),
        ranges.len(),
        rules.decimal_places()
    );

    Ok(NormalizedRuleSet {
        mode: rules.mode(),
        decimal_places: rules.decimal_places(),
        ranges,
        prefix,
    })
}

// A finite tier is fully consumed once the value reaches its end, so its
// contribution is the formula at the exact width. The open tier is never
// fully consumed and carries the running total forward unchanged.
fn proportional_prefix(ranges: &[NormalizedRange]) -> Vec<Decimal> {
    let mut prefix = Vec::with_capacity(ranges.len() + 1);
    let mut running = Decimal::ZERO;
    prefix.push(running);
    for range in ranges {
        if let Some(width) = range.width() {
            running = running.saturating_add(range.commission(width));
        }
        prefix.push(running);
    }
    prefix
}
