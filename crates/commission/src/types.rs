use std::cmp::Ordering;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a tier turns its share of the principal into a commission.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommissionKind {
    FlatRate,
    Percentage,
}

/// How tiers are aggregated for a single principal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    /// Only the tier holding the value applies.
    #[default]
    Absolute,
    /// Every tier up to the value's tier contributes, like tax brackets.
    Proportional,
}

impl fmt::Display for CalculationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationMode::Absolute => f.write_str("absolute"),
            CalculationMode::Proportional => f.write_str("proportional"),
        }
    }
}

/// Upper limit of a tier or of a clamp.
///
/// Rule files encode "no limit" as `0`; once normalized that sentinel
/// becomes `Unbounded` so a real zero can never be mistaken for infinity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Bound {
    At(Decimal),
    Unbounded,
}

impl Bound {
    /// Reads the `0 means +inf` convention used at the input boundary.
    pub fn from_sentinel(value: Decimal) -> Self {
        if value.is_zero() {
            Bound::Unbounded
        } else {
            Bound::At(value)
        }
    }

    pub fn finite(self) -> Option<Decimal> {
        match self {
            Bound::At(value) => Some(value),
            Bound::Unbounded => None,
        }
    }

    /// `true` when `value` lies strictly below this bound.
    pub fn is_above(self, value: Decimal) -> bool {
        match self {
            Bound::At(limit) => value < limit,
            Bound::Unbounded => true,
        }
    }
}

impl PartialOrd for Bound {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bound {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Bound::At(a), Bound::At(b)) => a.cmp(b),
            (Bound::At(_), Bound::Unbounded) => Ordering::Less,
            (Bound::Unbounded, Bound::At(_)) => Ordering::Greater,
            (Bound::Unbounded, Bound::Unbounded) => Ordering::Equal,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::At(value) => write!(f, "{value}"),
            Bound::Unbounded => f.write_str("inf"),
        }
    }
}
