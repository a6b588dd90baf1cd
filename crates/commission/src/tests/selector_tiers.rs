use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{
    compute_commission_with_selector, CalculationMode, CommissionError, RangeConfig, RuleSet,
    ValidationError,
};

use super::{progressive_tiers, ticket_tiers};

#[test]
fn selector_picks_tier_and_principal_drives_formula() {
    let rules = ticket_tiers();
    let cases = [
        (dec!(2000), dec!(3), dec!(200)),
        (dec!(200), dec!(1.5), dec!(50)),
        (dec!(500), dec!(5), dec!(100)),
        (dec!(1000), dec!(2), dec!(100)),
        (dec!(1000), dec!(3.9999), dec!(100)),
        (dec!(1000), dec!(4), dec!(100)),
    ];

    let observed: Vec<_> = cases
        .iter()
        .map(|(principal, selector, _)| {
            compute_commission_with_selector(*principal, *selector, &rules).expect("valid rules")
        })
        .collect();
    let expected: Vec<_> = cases.iter().map(|(_, _, commission)| *commission).collect();
    assert_eq!(observed, expected);
}

#[test]
fn selector_rejects_proportional_rules() {
    let single = RuleSet::new(
        CalculationMode::Proportional,
        2,
        vec![RangeConfig::percentage(
            Decimal::ZERO,
            Decimal::ZERO,
            dec!(0.05),
            Decimal::ZERO,
            Decimal::ZERO,
        )],
    );
    for rules in [single, progressive_tiers()] {
        let err = compute_commission_with_selector(dec!(1000), dec!(3), &rules)
            .expect_err("proportional selector call");
        assert_eq!(
            err,
            CommissionError::IncompatibleMode {
                mode: CalculationMode::Proportional
            }
        );
    }
}

#[test]
fn mode_is_checked_before_validation() {
    let broken = RuleSet::new(CalculationMode::Proportional, 0, Vec::new());
    let err = compute_commission_with_selector(dec!(1), dec!(1), &broken).expect_err("must fail");
    assert!(matches!(err, CommissionError::IncompatibleMode { .. }));
    assert!(!broken.is_normalized());
}

#[test]
fn selector_surfaces_validation_errors() {
    let empty = RuleSet::new(CalculationMode::Absolute, 0, Vec::new());
    let err = compute_commission_with_selector(dec!(1), dec!(1), &empty).expect_err("empty");
    assert_eq!(
        err,
        CommissionError::Configuration(ValidationError::EmptyRuleSet)
    );
}

#[test]
fn normalized_form_can_be_reused_directly() {
    let rules = ticket_tiers();
    let normalized = rules.normalized().expect("valid");
    assert_eq!(
        normalized.commission_for_selector(dec!(2000), dec!(3)),
        Ok(dec!(200))
    );
    assert_eq!(normalized.commission(dec!(1)), dec!(50));

    let progressive = progressive_tiers();
    let err = progressive
        .normalized()
        .expect("valid")
        .commission_for_selector(dec!(1000), dec!(700))
        .expect_err("proportional");
    assert!(matches!(err, CommissionError::IncompatibleMode { .. }));
}
