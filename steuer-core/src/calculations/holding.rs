//! Dividend taxation of a holding company under § 8b KStG.
//!
//! A corporation receiving dividends from a subsidiary is exempt on 95% of
//! the dividend; the remaining 5% is treated as non-deductible expense and
//! is subject to corporate tax, the solidarity surcharge on that corporate
//! tax, and trade tax unless the participation qualifies for the trade tax
//! exemption (at least 15% ownership).
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Taxable portion: dividend × 5% |
//! | 2    | Corporate tax: step 1 × corporate tax rate |
//! | 3    | Surcharge: step 2 × surcharge rate |
//! | 4    | Trade tax: step 1 × trade tax rate, or 0 when exempt |
//! | 5    | Total tax: steps 2 + 3 + 4 |
//! | 6    | Net to holding: dividend − step 5 |
//! | 7    | Effective rate: step 5 ÷ dividend (0 for a zero dividend) |
//!
//! No rounding happens here; amounts are exact and only the display rounds.
//! Arithmetic saturates at the `Decimal` bounds instead of overflowing.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use steuer_core::calculations::{HoldingInput, calculate_holding};
//!
//! let input = HoldingInput {
//!     dividend: dec!(200000),
//!     corporate_tax_rate: dec!(0.15),
//!     surcharge_rate: dec!(0.055),
//!     trade_tax_exempt: true,
//!     trade_tax_rate: dec!(0.14),
//! };
//!
//! let result = calculate_holding(&input);
//!
//! assert_eq!(result.total_tax, dec!(1582.5));
//! assert_eq!(result.net_to_holding, dec!(198417.5));
//! ```

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::HoldingDefaults;
use crate::calculations::common::ratio_or_zero;
use crate::format::{format_currency, format_percent};

/// Share of an intercompany dividend that remains taxable (5%).
pub const TAXABLE_SHARE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Inputs of the holding calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingInput {
    pub dividend: Decimal,
    pub corporate_tax_rate: Decimal,
    pub surcharge_rate: Decimal,
    pub trade_tax_exempt: bool,
    pub trade_tax_rate: Decimal,
}

impl From<&HoldingDefaults> for HoldingInput {
    fn from(defaults: &HoldingDefaults) -> Self {
        Self {
            dividend: defaults.dividend,
            corporate_tax_rate: defaults.corporate_tax_rate,
            surcharge_rate: defaults.surcharge_rate,
            trade_tax_exempt: defaults.trade_tax_exempt,
            trade_tax_rate: defaults.trade_tax_rate,
        }
    }
}

/// Derived values of the holding calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingResult {
    /// The 5% of the dividend that is taxed.
    pub taxable_portion: Decimal,

    /// Corporate tax on the taxable portion.
    pub corporate_tax: Decimal,

    /// Solidarity surcharge on the corporate tax.
    pub surcharge: Decimal,

    /// Trade tax on the taxable portion; zero when exempt.
    pub trade_tax: Decimal,

    /// Sum of corporate tax, surcharge and trade tax.
    pub total_tax: Decimal,

    /// Dividend less total tax.
    pub net_to_holding: Decimal,

    /// Total tax as a fraction of the dividend.
    pub effective_rate: Decimal,
}

impl HoldingResult {
    /// Corporate tax plus surcharge, shown as one figure.
    pub fn corporate_tax_with_surcharge(&self) -> Decimal {
        self.corporate_tax.saturating_add(self.surcharge)
    }
}

impl fmt::Display for HoldingResult {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Taxable portion: {}", format_currency(self.taxable_portion))?;
        writeln!(f, "Corporate tax:   {}", format_currency(self.corporate_tax))?;
        writeln!(f, "Surcharge:       {}", format_currency(self.surcharge))?;
        writeln!(f, "Trade tax:       {}", format_currency(self.trade_tax))?;
        writeln!(f, "Total tax:       {}", format_currency(self.total_tax))?;
        writeln!(f, "Net to holding:  {}", format_currency(self.net_to_holding))?;
        write!(f, "Effective rate:  {}", format_percent(self.effective_rate))
    }
}

/// Runs the full holding calculation chain.
pub fn calculate_holding(input: &HoldingInput) -> HoldingResult {
    if input.dividend < Decimal::ZERO {
        warn!(
            dividend = %input.dividend,
            "Dividend is negative; taxes and net amount will be negative too"
        );
    }

    let taxable_portion = taxable_portion(input.dividend);
    let corporate_tax = corporate_tax(taxable_portion, input.corporate_tax_rate);
    let surcharge = surcharge(corporate_tax, input.surcharge_rate);
    let trade_tax = trade_tax(taxable_portion, input.trade_tax_exempt, input.trade_tax_rate);
    let total_tax = corporate_tax.saturating_add(surcharge).saturating_add(trade_tax);

    HoldingResult {
        taxable_portion,
        corporate_tax,
        surcharge,
        trade_tax,
        total_tax,
        net_to_holding: input.dividend.saturating_sub(total_tax),
        effective_rate: ratio_or_zero(total_tax, input.dividend),
    }
}

fn taxable_portion(dividend: Decimal) -> Decimal {
    dividend.saturating_mul(TAXABLE_SHARE)
}

fn corporate_tax(
    taxable_portion: Decimal,
    rate: Decimal,
) -> Decimal {
    taxable_portion.saturating_mul(rate)
}

fn surcharge(
    corporate_tax: Decimal,
    rate: Decimal,
) -> Decimal {
    corporate_tax.saturating_mul(rate)
}

fn trade_tax(
    taxable_portion: Decimal,
    exempt: bool,
    rate: Decimal,
) -> Decimal {
    if exempt {
        return Decimal::ZERO;
    }
    taxable_portion.saturating_mul(rate)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn default_input() -> HoldingInput {
        HoldingInput::from(&HoldingDefaults::default())
    }

    // =========================================================================
    // step tests
    // =========================================================================

    #[test]
    fn taxable_portion_is_five_percent() {
        assert_eq!(taxable_portion(dec!(200000)), dec!(10000));
    }

    #[test]
    fn corporate_tax_applies_rate_to_taxable_portion() {
        assert_eq!(corporate_tax(dec!(10000), dec!(0.15)), dec!(1500));
    }

    #[test]
    fn surcharge_applies_rate_to_corporate_tax() {
        assert_eq!(surcharge(dec!(1500), dec!(0.055)), dec!(82.5));
    }

    #[test]
    fn trade_tax_is_zero_when_exempt() {
        assert_eq!(trade_tax(dec!(10000), true, dec!(0.14)), Decimal::ZERO);
    }

    #[test]
    fn trade_tax_applies_rate_when_not_exempt() {
        assert_eq!(trade_tax(dec!(10000), false, dec!(0.14)), dec!(1400));
    }

    // =========================================================================
    // calculate_holding tests
    // =========================================================================

    #[test]
    fn calculate_matches_reference_example() {
        let result = calculate_holding(&default_input());

        assert_eq!(result.taxable_portion, dec!(10000));
        assert_eq!(result.corporate_tax, dec!(1500));
        assert_eq!(result.surcharge, dec!(82.5));
        assert_eq!(result.trade_tax, Decimal::ZERO);
        assert_eq!(result.total_tax, dec!(1582.5));
        assert_eq!(result.net_to_holding, dec!(198417.5));
        assert_eq!(result.effective_rate, dec!(0.0079125));
        assert_eq!(format_percent(result.effective_rate), "0.79 %");
    }

    #[test]
    fn calculate_includes_trade_tax_without_exemption() {
        let input = HoldingInput {
            trade_tax_exempt: false,
            ..default_input()
        };

        let result = calculate_holding(&input);

        assert_eq!(result.trade_tax, dec!(1400));
        assert_eq!(result.total_tax, dec!(2982.5));
        assert_eq!(result.net_to_holding, dec!(197017.5));
    }

    #[test]
    fn calculate_effective_rate_is_zero_for_zero_dividend() {
        let input = HoldingInput {
            dividend: Decimal::ZERO,
            trade_tax_exempt: false,
            corporate_tax_rate: dec!(0.3),
            ..default_input()
        };

        let result = calculate_holding(&input);

        assert_eq!(result.effective_rate, Decimal::ZERO);
        assert_eq!(result.total_tax, Decimal::ZERO);
        assert_eq!(result.net_to_holding, Decimal::ZERO);
    }

    #[test]
    fn calculate_totals_are_exact_sums() {
        let dividends = [dec!(0), dec!(1), dec!(12345.67), dec!(999999), dec!(5000000)];
        let rates = [dec!(0), dec!(0.055), dec!(0.15), dec!(0.333), dec!(1)];

        for dividend in dividends {
            for rate in rates {
                for exempt in [true, false] {
                    let input = HoldingInput {
                        dividend,
                        corporate_tax_rate: rate,
                        surcharge_rate: rate,
                        trade_tax_exempt: exempt,
                        trade_tax_rate: rate,
                    };

                    let result = calculate_holding(&input);

                    assert_eq!(
                        result.total_tax,
                        result.corporate_tax + result.surcharge + result.trade_tax
                    );
                    assert_eq!(result.net_to_holding, dividend - result.total_tax);
                }
            }
        }
    }

    #[test]
    fn corporate_tax_with_surcharge_adds_both_components() {
        let result = calculate_holding(&default_input());

        assert_eq!(result.corporate_tax_with_surcharge(), dec!(1582.5));
    }

    #[test]
    fn calculate_saturates_at_decimal_bounds() {
        let input = HoldingInput {
            dividend: Decimal::MAX,
            corporate_tax_rate: dec!(1000),
            ..default_input()
        };

        let result = calculate_holding(&input);

        assert_eq!(result.corporate_tax, Decimal::MAX);
        assert_eq!(result.total_tax, Decimal::MAX);
        assert_eq!(result.net_to_holding, Decimal::ZERO);
        assert_eq!(result.effective_rate, Decimal::ONE);
        assert_eq!(result.corporate_tax_with_surcharge(), Decimal::MAX);
        assert!(result.to_string().ends_with("Effective rate:  100.00 %"));
    }

    #[test]
    fn display_lists_formatted_amounts() {
        let rendered = calculate_holding(&default_input()).to_string();

        assert!(rendered.contains("Net to holding:  198.418\u{a0}€"));
        assert!(rendered.ends_with("Effective rate:  0.79 %"));
    }
}
