use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported when a default value set is outside its valid range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DefaultsError {
    /// An amount was negative.
    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    /// A rate was outside [0, 1].
    #[error("{field} must be a fraction between 0 and 1, got {value}")]
    RateOutOfRange { field: &'static str, value: Decimal },
}

fn check_amount(
    field: &'static str,
    value: Decimal,
) -> Result<(), DefaultsError> {
    if value < Decimal::ZERO {
        return Err(DefaultsError::NegativeAmount { field, value });
    }
    Ok(())
}

fn check_rate(
    field: &'static str,
    value: Decimal,
) -> Result<(), DefaultsError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(DefaultsError::RateOutOfRange { field, value });
    }
    Ok(())
}

/// Representative average values for the holding calculator.
///
/// These are pinned into the form whenever defaults mode is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoldingDefaults {
    /// Annual dividend paid to the holding, in whole euros.
    pub dividend: Decimal,

    /// Corporate tax rate (KSt), typically 15%.
    pub corporate_tax_rate: Decimal,

    /// Solidarity surcharge applied to the corporate tax, typically 5.5%.
    pub surcharge_rate: Decimal,

    /// Whether the holding owns at least 15% and is exempt from trade tax.
    pub trade_tax_exempt: bool,

    /// Trade tax rate (GewSt) used when not exempt, typically 14%.
    pub trade_tax_rate: Decimal,
}

impl Default for HoldingDefaults {
    fn default() -> Self {
        Self {
            dividend: Decimal::new(200_000, 0),
            corporate_tax_rate: Decimal::new(15, 2),
            surcharge_rate: Decimal::new(55, 3),
            trade_tax_exempt: true,
            trade_tax_rate: Decimal::new(14, 2),
        }
    }
}

impl HoldingDefaults {
    /// Validates the value set.
    ///
    /// # Errors
    ///
    /// Returns [`DefaultsError`] if the dividend is negative or any rate is
    /// outside [0, 1].
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use steuer_core::{DefaultsError, HoldingDefaults};
    ///
    /// let defaults = HoldingDefaults {
    ///     corporate_tax_rate: dec!(15),
    ///     ..HoldingDefaults::default()
    /// };
    ///
    /// assert_eq!(
    ///     defaults.validate(),
    ///     Err(DefaultsError::RateOutOfRange {
    ///         field: "corporate_tax_rate",
    ///         value: dec!(15),
    ///     })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), DefaultsError> {
        check_amount("dividend", self.dividend)?;
        check_rate("corporate_tax_rate", self.corporate_tax_rate)?;
        check_rate("surcharge_rate", self.surcharge_rate)?;
        check_rate("trade_tax_rate", self.trade_tax_rate)?;
        Ok(())
    }
}

/// Representative average values for the managing-director comparison.
///
/// The solidarity surcharge is not part of this set; it is a fixed
/// statutory rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagingDirectorDefaults {
    /// Annual gross salary, in whole euros.
    pub gross_salary: Decimal,

    /// Annual dividend distributed to the managing director, in whole euros.
    pub dividend: Decimal,

    /// Personal marginal income tax rate.
    pub personal_tax_rate: Decimal,

    /// Church tax rate applied to the income tax or withholding.
    pub church_tax_rate: Decimal,

    /// Employee share of social contributions on the salary.
    pub employee_contribution_rate: Decimal,

    /// Whether dividends are taxed with the 25% flat tax instead of the
    /// partial-income method.
    pub flat_tax_election: bool,
}

impl Default for ManagingDirectorDefaults {
    fn default() -> Self {
        Self {
            gross_salary: Decimal::new(180_000, 0),
            dividend: Decimal::new(150_000, 0),
            personal_tax_rate: Decimal::new(35, 2),
            church_tax_rate: Decimal::new(85, 3),
            employee_contribution_rate: Decimal::new(20, 2),
            flat_tax_election: false,
        }
    }
}

impl ManagingDirectorDefaults {
    /// Validates the value set.
    ///
    /// # Errors
    ///
    /// Returns [`DefaultsError`] if an amount is negative or any rate is
    /// outside [0, 1].
    pub fn validate(&self) -> Result<(), DefaultsError> {
        check_amount("gross_salary", self.gross_salary)?;
        check_amount("dividend", self.dividend)?;
        check_rate("personal_tax_rate", self.personal_tax_rate)?;
        check_rate("church_tax_rate", self.church_tax_rate)?;
        check_rate("employee_contribution_rate", self.employee_contribution_rate)?;
        Ok(())
    }
}
