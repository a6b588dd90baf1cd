use rust_decimal::Decimal;

use crate::types::{Bound, CommissionKind};

/// Smallest positive value a `Decimal` can hold (1e-28).
pub const DECIMAL_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 28);

/// Commission produced by one tier for `portion` of the value.
///
/// Flat tiers ignore the portion and the clamp. Percentage tiers multiply
/// first and clamp the exact product to `[min, max]`; nothing is rounded
/// here. A product beyond the `Decimal` range saturates before clamping.
pub fn range_commission(
    kind: CommissionKind,
    amount: Decimal,
    min: Decimal,
    max: Bound,
    portion: Decimal,
) -> Decimal {
    match kind {
        CommissionKind::FlatRate => amount,
        CommissionKind::Percentage => {
            let raw = portion.saturating_mul(amount);
            if raw < min {
                return min;
            }
            match max {
                Bound::At(cap) if raw > cap => cap,
                _ => raw,
            }
        }
    }
}
