pub mod calculator;
pub mod formula;
pub mod locate;
pub mod normalize;
pub mod overlap;
pub mod rounding;
pub mod rules;
pub mod rule_file;
pub mod types;
pub mod validation;

pub use calculator::{
    compute_commission, compute_commission_linear, compute_commission_with_selector,
    validate_rule, CommissionError,
};
pub use formula::{range_commission, DECIMAL_EPSILON};
pub use locate::locate;
pub use normalize::{normalize, NormalizedRange, NormalizedRuleSet};
pub use overlap::{has_overlap, DateTimePair};
pub use rounding::round_commission;
pub use rule_file::{load_rule_set, parse_rule_set, rule_set_hash, RuleFileError};
pub use rules::{RangeConfig, RuleSet};
pub use types::{Bound, CalculationMode, CommissionKind};
pub use validation::{is_valid, validate, ValidationError, MAX_PERCENTAGE_RATE};

#[cfg(test)]
mod tests;
