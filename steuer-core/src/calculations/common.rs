//! Common utility functions for tax calculations.
//!
//! This module provides shared functionality used by both calculators and
//! by the display formatting, including rounding and guarded division.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to `decimal_places` using half-up rounding.
///
/// Values exactly at the midpoint are rounded away from zero, which is the
/// convention German currency displays follow.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use steuer_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(198417.5), 0), dec!(198418));
/// assert_eq!(round_half_up(dec!(0.79125), 2), dec!(0.79));
/// assert_eq!(round_half_up(dec!(-0.125), 2), dec!(-0.13)); // Away from zero
/// ```
pub fn round_half_up(
    value: Decimal,
    decimal_places: u32,
) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use steuer_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(0)), dec!(0));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Divides `numerator` by `denominator`, returning zero when the
/// denominator is zero.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use steuer_core::calculations::common::ratio_or_zero;
///
/// assert_eq!(ratio_or_zero(dec!(1582.5), dec!(200000)), dec!(0.0079125));
/// assert_eq!(ratio_or_zero(dec!(1582.5), Decimal::ZERO), Decimal::ZERO);
/// ```
pub fn ratio_or_zero(
    numerator: Decimal,
    denominator: Decimal,
) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
}
