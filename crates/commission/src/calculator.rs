use rust_decimal::Decimal;
use thiserror::Error;

use crate::locate::locate;
use crate::normalize::{NormalizedRange, NormalizedRuleSet};
use crate::rounding::round_commission;
use crate::rules::RuleSet;
use crate::types::CalculationMode;
use crate::validation::{validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommissionError {
    #[error("invalid rule set: {0}")]
    Configuration(#[from] ValidationError),
    #[error("selector-based calculation requires an absolute rule set, got {mode}")]
    IncompatibleMode { mode: CalculationMode },
}

/// Commission owed on `principal`, rounded to the rule set's precision.
///
/// The rule set is validated and normalized on its first use only.
pub fn compute_commission(principal: Decimal, rules: &RuleSet) -> Result<Decimal, CommissionError> {
    Ok(rules.normalized()?.commission(principal))
}

/// Commission on `principal` using the tier that holds `selector`.
///
/// Only absolute rule sets have a meaning for this; proportional ones are
/// rejected before any validation runs.
pub fn compute_commission_with_selector(
    principal: Decimal,
    selector: Decimal,
    rules: &RuleSet,
) -> Result<Decimal, CommissionError> {
    if rules.mode() == CalculationMode::Proportional {
        return Err(CommissionError::IncompatibleMode { mode: rules.mode() });
    }
    rules.normalized()?.commission_for_selector(principal, selector)
}

/// `true` when `rules` can be used for calculation. Never fails.
pub fn validate_rule(rules: &RuleSet) -> bool {
    rules.normalized().is_ok()
}

impl NormalizedRuleSet {
    pub fn commission(&self, principal: Decimal) -> Decimal {
        let index = locate(self, principal);
        let range = &self.ranges()[index];
        let raw = match self.mode() {
            CalculationMode::Absolute => range.commission(principal),
            CalculationMode::Proportional => {
                let partial = range.commission(principal.saturating_sub(range.start));
                self.prefix()[index].saturating_add(partial)
            }
        };
        round_commission(raw, self.decimal_places())
    }

    pub fn commission_for_selector(
        &self,
        principal: Decimal,
        selector: Decimal,
    ) -> Result<Decimal, CommissionError> {
        if self.mode() == CalculationMode::Proportional {
            return Err(CommissionError::IncompatibleMode { mode: self.mode() });
        }
        let range = &self.ranges()[locate(self, selector)];
        Ok(round_commission(
            range.commission(principal),
            self.decimal_places(),
        ))
    }
}

/// Per-call evaluation that scans every tier and skips the cache.
///
/// Produces the same result as [`compute_commission`] for every
/// non-negative principal. Useful as a baseline when measuring the cached
/// path.
pub fn compute_commission_linear(
    principal: Decimal,
    rules: &RuleSet,
) -> Result<Decimal, CommissionError> {
    validate(rules)?;
    let ranges: Vec<NormalizedRange> = rules.ranges().iter().map(NormalizedRange::from).collect();

    let raw = match rules.mode() {
        CalculationMode::Absolute => ranges
            .iter()
            .find(|range| range.contains(principal))
            .or_else(|| ranges.iter().min_by_key(|range| range.start))
            .map_or(Decimal::ZERO, |range| range.commission(principal)),
        CalculationMode::Proportional => {
            let mut total = Decimal::ZERO;
            for range in &ranges {
                if range.contains(principal) {
                    let portion = principal.saturating_sub(range.start);
                    total = total.saturating_add(range.commission(portion));
                } else if let (Some(end), Some(width)) = (range.end.finite(), range.width()) {
                    if principal >= end {
                        total = total.saturating_add(range.commission(width));
                    }
                }
            }
            total
        }
    };

    Ok(round_commission(raw, rules.decimal_places()))
}
