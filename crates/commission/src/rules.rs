use std::sync::OnceLock;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::locate::locate;
use crate::normalize::{normalize, NormalizedRange, NormalizedRuleSet};
use crate::types::{CalculationMode, CommissionKind};
use crate::validation::ValidationError;

const DEFAULT_DECIMAL_PLACES: u32 = 4;

/// One tier as written by the caller.
///
/// `end == 0` means the tier is open-ended and `max == 0` means the
/// percentage result is not capped. Both sentinels are resolved by
/// [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeConfig {
    pub start: Decimal,
    pub end: Decimal,
    pub kind: CommissionKind,
    pub amount: Decimal,
    #[serde(default)]
    pub min: Decimal,
    #[serde(default)]
    pub max: Decimal,
}

impl RangeConfig {
    pub fn flat(start: Decimal, end: Decimal, amount: Decimal) -> Self {
        Self {
            start,
            end,
            kind: CommissionKind::FlatRate,
            amount,
            min: Decimal::ZERO,
            max: Decimal::ZERO,
        }
    }

    pub fn percentage(
        start: Decimal,
        end: Decimal,
        rate: Decimal,
        min: Decimal,
        max: Decimal,
    ) -> Self {
        Self {
            start,
            end,
            kind: CommissionKind::Percentage,
            amount: rate,
            min,
            max,
        }
    }

    pub(crate) fn clamp_order_holds(&self) -> bool {
        self.max.is_zero() || self.max >= self.min
    }
}

/// A complete commission configuration.
///
/// The configuration cannot be changed after construction. The first
/// calculation validates and normalizes it and keeps the outcome for the
/// lifetime of this value, so later calls skip straight to the tier math.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSet {
    mode: CalculationMode,
    #[serde(default = "default_decimal_places")]
    decimal_places: u32,
    ranges: Vec<RangeConfig>,
    #[serde(skip)]
    normalized: OnceLock<Result<NormalizedRuleSet, ValidationError>>,
}

fn default_decimal_places() -> u32 {
    DEFAULT_DECIMAL_PLACES
}

impl RuleSet {
    pub fn new(mode: CalculationMode, decimal_places: u32, ranges: Vec<RangeConfig>) -> Self {
        Self {
            mode,
            decimal_places,
            ranges,
            normalized: OnceLock::new(),
        }
    }

    pub fn mode(&self) -> CalculationMode {
        self.mode
    }

    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Tiers in the order they were supplied.
    pub fn ranges(&self) -> &[RangeConfig] {
        &self.ranges
    }

    /// Validated, sorted form of this rule set, built on first use.
    ///
    /// Concurrent callers block on the first initialization and then share
    /// the stored result. A rejected configuration keeps returning the same
    /// error.
    pub fn normalized(&self) -> Result<&NormalizedRuleSet, ValidationError> {
        self.normalized
            .get_or_init(|| normalize(self))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Whether a previous call already populated the normalization slot.
    pub fn is_normalized(&self) -> bool {
        self.normalized.get().is_some()
    }

    /// Tier whose `[start, end)` interval holds `value`.
    pub fn tier_for(&self, value: Decimal) -> Result<&NormalizedRange, ValidationError> {
        let normalized = self.normalized()?;
        Ok(&normalized.ranges()[locate(normalized, value)])
    }
}

impl PartialEq for RuleSet {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode
            && self.decimal_places == other.decimal_places
            && self.ranges == other.ranges
    }
}

impl Eq for RuleSet {}
