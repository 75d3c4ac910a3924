use rust_decimal::Decimal;
use tracing::debug;

use super::StateError;
use crate::ManagingDirectorDefaults;
use crate::calculations::{ManagingDirectorInput, ManagingDirectorResult, compare};

/// Numeric inputs of the managing-director comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManagingDirectorField {
    GrossSalary,
    Dividend,
    PersonalTaxRate,
    ChurchTaxRate,
    EmployeeContributionRate,
}

impl ManagingDirectorField {
    pub const ALL: [ManagingDirectorField; 5] = [
        ManagingDirectorField::GrossSalary,
        ManagingDirectorField::Dividend,
        ManagingDirectorField::PersonalTaxRate,
        ManagingDirectorField::ChurchTaxRate,
        ManagingDirectorField::EmployeeContributionRate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::GrossSalary => "gross_salary",
            Self::Dividend => "dividend",
            Self::PersonalTaxRate => "personal_tax_rate",
            Self::ChurchTaxRate => "church_tax_rate",
            Self::EmployeeContributionRate => "employee_contribution_rate",
        }
    }
}

/// Editable state of the managing-director comparison.
///
/// The surcharge rate is part of the input but has no setter.
#[derive(Debug, Clone)]
pub struct ManagingDirectorState {
    defaults: ManagingDirectorDefaults,
    use_defaults: bool,
    input: ManagingDirectorInput,
    result: ManagingDirectorResult,
}

impl ManagingDirectorState {
    /// Creates the state in defaults mode with every field set from `defaults`.
    pub fn new(defaults: ManagingDirectorDefaults) -> Self {
        let input = ManagingDirectorInput::from(&defaults);
        let result = compare(&input);
        Self {
            defaults,
            use_defaults: true,
            input,
            result,
        }
    }

    pub fn use_defaults(&self) -> bool {
        self.use_defaults
    }

    pub fn input(&self) -> &ManagingDirectorInput {
        &self.input
    }

    /// The result of the last recomputation.
    pub fn result(&self) -> &ManagingDirectorResult {
        &self.result
    }

    pub fn value(
        &self,
        field: ManagingDirectorField,
    ) -> Decimal {
        match field {
            ManagingDirectorField::GrossSalary => self.input.gross_salary,
            ManagingDirectorField::Dividend => self.input.dividend,
            ManagingDirectorField::PersonalTaxRate => self.input.personal_tax_rate,
            ManagingDirectorField::ChurchTaxRate => self.input.church_tax_rate,
            ManagingDirectorField::EmployeeContributionRate => {
                self.input.employee_contribution_rate
            }
        }
    }

    pub fn flat_tax_election(&self) -> bool {
        self.input.flat_tax_election
    }

    /// Switches between defaults mode and custom mode.
    ///
    /// Enabling defaults resets the six dependent fields; the surcharge rate
    /// is untouched because it never changes.
    pub fn set_use_defaults(
        &mut self,
        enabled: bool,
    ) {
        self.use_defaults = enabled;
        if enabled {
            debug!("managing-director comparison reset to average values");
            let surcharge_rate = self.input.surcharge_rate;
            self.input = ManagingDirectorInput {
                surcharge_rate,
                ..ManagingDirectorInput::from(&self.defaults)
            };
            self.recompute();
        }
    }

    /// Stores a numeric field.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::FieldLocked`] while defaults mode is active.
    pub fn set_value(
        &mut self,
        field: ManagingDirectorField,
        value: Decimal,
    ) -> Result<(), StateError> {
        self.ensure_unlocked(field.name())?;
        match field {
            ManagingDirectorField::GrossSalary => self.input.gross_salary = value,
            ManagingDirectorField::Dividend => self.input.dividend = value,
            ManagingDirectorField::PersonalTaxRate => self.input.personal_tax_rate = value,
            ManagingDirectorField::ChurchTaxRate => self.input.church_tax_rate = value,
            ManagingDirectorField::EmployeeContributionRate => {
                self.input.employee_contribution_rate = value
            }
        }
        self.recompute();
        Ok(())
    }

    /// Stores the flat-tax election.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::FieldLocked`] while defaults mode is active.
    pub fn set_flat_tax_election(
        &mut self,
        elected: bool,
    ) -> Result<(), StateError> {
        self.ensure_unlocked("flat_tax_election")?;
        self.input.flat_tax_election = elected;
        self.recompute();
        Ok(())
    }

    fn ensure_unlocked(
        &self,
        field: &'static str,
    ) -> Result<(), StateError> {
        if self.use_defaults {
            return Err(StateError::FieldLocked(field));
        }
        Ok(())
    }

    fn recompute(&mut self) {
        self.result = compare(&self.input);
    }
}

impl Default for ManagingDirectorState {
    fn default() -> Self {
        Self::new(ManagingDirectorDefaults::default())
    }
}
