//! Salary versus distribution comparison for a managing director.
//!
//! A shareholder-managing director can draw money from the company either as
//! salary or as a dividend. This module computes the net amount of both
//! routes side by side:
//!
//! - **Salary**: employee social contributions are deducted first; the rest
//!   is taxed at the personal rate, plus solidarity surcharge and church tax
//!   on that income tax.
//! - **Distribution, flat tax** (Abgeltungsteuer): 25% withholding on the
//!   whole dividend, plus surcharge and church tax on the withholding.
//! - **Distribution, partial income** (Teileinkünfteverfahren): 60% of the
//!   dividend is taxed at the personal rate, plus surcharge and church tax on
//!   that income tax.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use steuer_core::calculations::{Advantage, ManagingDirectorInput, compare};
//! use steuer_core::ManagingDirectorDefaults;
//!
//! let input = ManagingDirectorInput::from(&ManagingDirectorDefaults::default());
//! let result = compare(&input);
//!
//! assert_eq!(result.salary.net, dec!(86544));
//! assert_eq!(result.distribution.net, dec!(114090));
//! assert_eq!(result.comparison.advantage, Advantage::Distribution);
//! ```

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ManagingDirectorDefaults;
use crate::calculations::common::max;
use crate::format::format_currency;

/// Solidarity surcharge rate; fixed and never user editable.
pub const SOLIDARITY_SURCHARGE_RATE: Decimal = Decimal::from_parts(55, 0, 0, false, 3);

/// Flat withholding rate on capital income (25%).
pub const FLAT_TAX_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Taxable share of a dividend under the partial-income method (60%).
pub const PARTIAL_INCOME_SHARE: Decimal = Decimal::from_parts(6, 0, 0, false, 1);

/// Inputs of the managing-director comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagingDirectorInput {
    pub gross_salary: Decimal,
    pub dividend: Decimal,
    pub personal_tax_rate: Decimal,
    pub church_tax_rate: Decimal,
    pub employee_contribution_rate: Decimal,
    pub flat_tax_election: bool,
    pub surcharge_rate: Decimal,
}

impl From<&ManagingDirectorDefaults> for ManagingDirectorInput {
    fn from(defaults: &ManagingDirectorDefaults) -> Self {
        Self {
            gross_salary: defaults.gross_salary,
            dividend: defaults.dividend,
            personal_tax_rate: defaults.personal_tax_rate,
            church_tax_rate: defaults.church_tax_rate,
            employee_contribution_rate: defaults.employee_contribution_rate,
            flat_tax_election: defaults.flat_tax_election,
            surcharge_rate: SOLIDARITY_SURCHARGE_RATE,
        }
    }
}

/// Net amount when the money is paid as salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryResult {
    pub social_contribution: Decimal,
    pub taxable_income: Decimal,
    pub income_tax: Decimal,
    pub surcharge: Decimal,
    pub church_tax: Decimal,
    pub net: Decimal,
}

/// Taxation regime applied to the distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistributionMode {
    FlatTax,
    PartialIncome,
}

impl DistributionMode {
    /// Selects the mode from the flat-tax election flag.
    pub fn from_election(flat_tax_election: bool) -> Self {
        if flat_tax_election {
            Self::FlatTax
        } else {
            Self::PartialIncome
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FlatTax => "Abgeltungsteuer 25%",
            Self::PartialIncome => "Teileinkünfteverfahren (60%)",
        }
    }
}

/// Base tax of the distribution, depending on the regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistributionTax {
    /// 25% withholding on the full dividend.
    FlatTax { withholding: Decimal },

    /// Personal income tax on 60% of the dividend.
    PartialIncome {
        taxable_base: Decimal,
        income_tax: Decimal,
    },
}

impl DistributionTax {
    pub fn mode(&self) -> DistributionMode {
        match self {
            Self::FlatTax { .. } => DistributionMode::FlatTax,
            Self::PartialIncome { .. } => DistributionMode::PartialIncome,
        }
    }

    /// The tax that surcharge and church tax are levied on.
    pub fn assessed(&self) -> Decimal {
        match self {
            Self::FlatTax { withholding } => *withholding,
            Self::PartialIncome { income_tax, .. } => *income_tax,
        }
    }
}

/// Net amount when the money is paid as a dividend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionResult {
    pub tax: DistributionTax,
    pub surcharge: Decimal,
    pub church_tax: Decimal,
    pub net: Decimal,
}

impl DistributionResult {
    pub fn mode(&self) -> DistributionMode {
        self.tax.mode()
    }
}

/// Which payout route leaves more net money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advantage {
    Distribution,
    Salary,
}

/// Outcome of comparing both net amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub advantage: Advantage,

    /// Absolute difference between both net amounts.
    pub difference: Decimal,
}

impl Comparison {
    /// Compares both routes. Equal amounts favor the salary.
    pub fn between(
        salary_net: Decimal,
        distribution_net: Decimal,
    ) -> Self {
        if distribution_net > salary_net {
            Self {
                advantage: Advantage::Distribution,
                difference: distribution_net.saturating_sub(salary_net),
            }
        } else {
            Self {
                advantage: Advantage::Salary,
                difference: salary_net.saturating_sub(distribution_net),
            }
        }
    }

    pub fn message(&self) -> String {
        let route = match self.advantage {
            Advantage::Distribution => "Ausschüttung",
            Advantage::Salary => "Gehalt",
        };
        format!(
            "{route} bringt aktuell {} mehr Netto",
            format_currency(self.difference)
        )
    }
}

/// Both routes plus their comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagingDirectorResult {
    pub salary: SalaryResult,
    pub distribution: DistributionResult,
    pub comparison: Comparison,
}

impl fmt::Display for ManagingDirectorResult {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Salary net:       {}", format_currency(self.salary.net))?;
        writeln!(
            f,
            "Distribution net: {} ({})",
            format_currency(self.distribution.net),
            self.distribution.mode().label()
        )?;
        write!(f, "Comparison:       {}", self.comparison.message())
    }
}

/// Computes the net salary.
pub fn salary_net(input: &ManagingDirectorInput) -> SalaryResult {
    let social_contribution = input.gross_salary.saturating_mul(input.employee_contribution_rate);
    let taxable_income = max(Decimal::ZERO, input.gross_salary.saturating_sub(social_contribution));
    if taxable_income.is_zero() && input.gross_salary > Decimal::ZERO {
        warn!(
            gross_salary = %input.gross_salary,
            employee_contribution_rate = %input.employee_contribution_rate,
            "Social contributions consume the whole salary; no income tax applies"
        );
    }

    let income_tax = taxable_income.saturating_mul(input.personal_tax_rate);
    let surcharge = income_tax.saturating_mul(input.surcharge_rate);
    let church_tax = income_tax.saturating_mul(input.church_tax_rate);

    SalaryResult {
        social_contribution,
        taxable_income,
        income_tax,
        surcharge,
        church_tax,
        net: input
            .gross_salary
            .saturating_sub(social_contribution)
            .saturating_sub(income_tax)
            .saturating_sub(surcharge)
            .saturating_sub(church_tax),
    }
}

/// Computes the net distribution under the elected regime.
pub fn distribution_net(input: &ManagingDirectorInput) -> DistributionResult {
    let tax = match DistributionMode::from_election(input.flat_tax_election) {
        DistributionMode::FlatTax => DistributionTax::FlatTax {
            withholding: input.dividend.saturating_mul(FLAT_TAX_RATE),
        },
        DistributionMode::PartialIncome => {
            let taxable_base = input.dividend.saturating_mul(PARTIAL_INCOME_SHARE);
            DistributionTax::PartialIncome {
                taxable_base,
                income_tax: taxable_base.saturating_mul(input.personal_tax_rate),
            }
        }
    };

    let assessed = tax.assessed();
    let surcharge = assessed.saturating_mul(input.surcharge_rate);
    let church_tax = assessed.saturating_mul(input.church_tax_rate);

    DistributionResult {
        net: input
            .dividend
            .saturating_sub(assessed)
            .saturating_sub(surcharge)
            .saturating_sub(church_tax),
        tax,
        surcharge,
        church_tax,
    }
}

/// Computes both routes and compares them.
pub fn compare(input: &ManagingDirectorInput) -> ManagingDirectorResult {
    let salary = salary_net(input);
    let distribution = distribution_net(input);
    let comparison = Comparison::between(salary.net, distribution.net);

    ManagingDirectorResult {
        salary,
        distribution,
        comparison,
    }
}
