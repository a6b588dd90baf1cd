use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{CalculationMode, RangeConfig, RuleSet};

mod overlap_periods;
mod selector_tiers;

/// Flat 25 / 10% clamped to [70, 90] / 20% clamped to [250, 1500] / flat 2000.
pub(super) fn clamped_tiers(mode: CalculationMode) -> RuleSet {
    RuleSet::new(
        mode,
        0,
        vec![
            RangeConfig::flat(dec!(10000), Decimal::ZERO, dec!(2000)),
            RangeConfig::flat(Decimal::ZERO, dec!(500), dec!(25)),
            RangeConfig::percentage(dec!(500), dec!(1000), dec!(0.1), dec!(70), dec!(90)),
            RangeConfig::percentage(dec!(1000), dec!(10000), dec!(0.2), dec!(250), dec!(1500)),
        ],
    )
}

/// Same brackets as [`clamped_tiers`] but the 10% tier is unclamped.
pub(super) fn progressive_tiers() -> RuleSet {
    RuleSet::new(
        CalculationMode::Proportional,
        0,
        vec![
            RangeConfig::flat(Decimal::ZERO, dec!(500), dec!(25)),
            RangeConfig::percentage(dec!(500), dec!(1000), dec!(0.1), Decimal::ZERO, Decimal::ZERO),
            RangeConfig::percentage(dec!(1000), dec!(10000), dec!(0.2), dec!(250), dec!(1500)),
            RangeConfig::flat(dec!(10000), Decimal::ZERO, dec!(2000)),
        ],
    )
}

/// Tiers chosen by ticket count: [0,2) flat 50, [2,4) 10%, [4,inf) flat 100.
pub(super) fn ticket_tiers() -> RuleSet {
    RuleSet::new(
        CalculationMode::Absolute,
        0,
        vec![
            RangeConfig::flat(Decimal::ZERO, dec!(2), dec!(50)),
            RangeConfig::percentage(dec!(2), dec!(4), dec!(0.10), Decimal::ZERO, Decimal::ZERO),
            RangeConfig::flat(dec!(4), Decimal::ZERO, dec!(100)),
        ],
    )
}

pub(super) fn percent(start: Decimal, end: Decimal, rate: Decimal) -> RangeConfig {
    RangeConfig::percentage(start, end, rate, Decimal::ZERO, Decimal::ZERO)
}
