use std::str::FromStr;

use rust_decimal::Decimal;

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses the raw text of a numeric field.
///
/// Handles comma as thousands separator (e.g. `"200,000"`) and scientific
/// notation (e.g. `"2e5"`). Empty or unparseable input is treated as 0; the
/// field never reports an error.
pub fn parse_amount(s: &str) -> Decimal {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .unwrap_or_else(|e| {
            tracing::debug!(input = %s, "unparseable number, using 0: {}", e);
            Decimal::ZERO
        })
}

/// Renders a stored value back into field text without trailing zeros.
pub fn amount_text(value: Decimal) -> String {
    value.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_amount_accepts_comma_thousands_separator() {
        assert_eq!(parse_amount("200,000"), dec!(200000));
        assert_eq!(parse_amount("1,234,567.89"), dec!(1234567.89));
    }

    #[test]
    fn parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("  0.055  "), dec!(0.055));
    }

    #[test]
    fn parse_amount_empty_treated_as_zero() {
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("   "), Decimal::ZERO);
    }

    #[test]
    fn parse_amount_invalid_treated_as_zero() {
        assert_eq!(parse_amount("abc"), Decimal::ZERO);
        assert_eq!(parse_amount("."), Decimal::ZERO);
        assert_eq!(parse_amount("-"), Decimal::ZERO);
    }

    #[test]
    fn parse_amount_accepts_scientific_notation() {
        assert_eq!(parse_amount("2e5"), dec!(200000));
    }

    #[test]
    fn parse_amount_keeps_negative_values() {
        assert_eq!(parse_amount("-1500"), dec!(-1500));
    }

    #[test]
    fn amount_text_strips_trailing_zeros() {
        assert_eq!(amount_text(dec!(0.150)), "0.15");
        assert_eq!(amount_text(dec!(200000)), "200000");
        assert_eq!(amount_text(dec!(0.20)), "0.2");
    }
}
