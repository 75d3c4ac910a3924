//! Display formatting for amounts and rates.
//!
//! Currency follows the German convention: `.` groups thousands, no
//! decimals, and the euro sign trails after a non-breaking space.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;

const GROUP_SEPARATOR: char = '.';
const CURRENCY_SUFFIX: &str = "\u{a0}€";

/// Formats an amount as whole euros, e.g. `198.418 €`.
///
/// Negative and very large values are formatted as-is.
///
/// ```
/// use rust_decimal_macros::dec;
/// use steuer_core::format::format_currency;
///
/// assert_eq!(format_currency(dec!(198417.5)), "198.418\u{a0}€");
/// assert_eq!(format_currency(dec!(-1234)), "-1.234\u{a0}€");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_half_up(value, 0);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    if rounded < Decimal::ZERO {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped.push_str(CURRENCY_SUFFIX);
    grouped
}

/// Formats a fraction as a percentage with two decimals, e.g. `0.79 %`.
///
/// ```
/// use rust_decimal_macros::dec;
/// use steuer_core::format::format_percent;
///
/// assert_eq!(format_percent(dec!(0.0079125)), "0.79 %");
/// assert_eq!(format_percent(dec!(0.15)), "15.00 %");
/// ```
pub fn format_percent(value: Decimal) -> String {
    let mut percent = round_half_up(value.saturating_mul(Decimal::ONE_HUNDRED), 2);
    if percent.is_zero() {
        percent = Decimal::ZERO;
    }
    format!("{percent:.2} %")
}
