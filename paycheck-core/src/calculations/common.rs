//! Common utility functions for paycheck calculations.
//!
//! The calculation code itself never rounds; these helpers are for the
//! floors the projections need and for callers that present amounts.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paycheck_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(687.745)), dec!(687.75));
/// assert_eq!(round_half_up(dec!(1153.846153)), dec!(1153.85));
/// assert_eq!(round_half_up(dec!(-12.345)), dec!(-12.35));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps negative values to zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paycheck_core::calculations::common::floor_at_zero;
///
/// assert_eq!(floor_at_zero(dec!(-250.00)), dec!(0));
/// assert_eq!(floor_at_zero(dec!(250.00)), dec!(250.00));
/// ```
pub fn floor_at_zero(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// `part` as a percentage of `whole`, or `None` when `whole` is zero.
pub fn percent_of(
    part: Decimal,
    whole: Decimal,
) -> Option<Decimal> {
    (part * dec!(100)).checked_div(whole)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
    }

    #[test]
    fn round_half_up_handles_repeating_division() {
        let weekly = dec!(60000) / dec!(52);

        assert_eq!(round_half_up(weekly), dec!(1153.85));
    }

    // =========================================================================
    // floor_at_zero tests
    // =========================================================================

    #[test]
    fn floor_at_zero_clamps_negative() {
        assert_eq!(floor_at_zero(dec!(-0.01)), dec!(0));
    }

    #[test]
    fn floor_at_zero_keeps_zero_and_positive() {
        assert_eq!(floor_at_zero(dec!(0)), dec!(0));
        assert_eq!(floor_at_zero(dec!(42.50)), dec!(42.50));
    }

    // =========================================================================
    // percent_of tests
    // =========================================================================

    #[test]
    fn percent_of_computes_percentage() {
        assert_eq!(percent_of(dec!(25), dec!(200)), Some(dec!(12.5)));
    }

    #[test]
    fn percent_of_zero_whole_is_none() {
        assert_eq!(percent_of(dec!(25), dec!(0)), None);
    }
}
