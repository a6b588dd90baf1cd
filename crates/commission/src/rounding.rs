use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a final commission to `decimal_places` fractional digits.
///
/// Midpoints go to the even neighbour (banker's rounding), so `2.5 -> 2`
/// and `3.5 -> 4`. Only aggregate results pass through here.
pub fn round_commission(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}
