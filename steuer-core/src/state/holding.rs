use rust_decimal::Decimal;
use tracing::debug;

use super::StateError;
use crate::HoldingDefaults;
use crate::calculations::{HoldingInput, HoldingResult, calculate_holding};

/// Numeric inputs of the holding calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoldingField {
    Dividend,
    CorporateTaxRate,
    SurchargeRate,
    TradeTaxRate,
}

impl HoldingField {
    pub const ALL: [HoldingField; 4] = [
        HoldingField::Dividend,
        HoldingField::CorporateTaxRate,
        HoldingField::SurchargeRate,
        HoldingField::TradeTaxRate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Dividend => "dividend",
            Self::CorporateTaxRate => "corporate_tax_rate",
            Self::SurchargeRate => "surcharge_rate",
            Self::TradeTaxRate => "trade_tax_rate",
        }
    }
}

/// Editable state of the holding calculator.
#[derive(Debug, Clone)]
pub struct HoldingState {
    defaults: HoldingDefaults,
    use_defaults: bool,
    input: HoldingInput,
    result: HoldingResult,
}

impl HoldingState {
    /// Creates the state in defaults mode with every field set from `defaults`.
    pub fn new(defaults: HoldingDefaults) -> Self {
        let input = HoldingInput::from(&defaults);
        let result = calculate_holding(&input);
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

    pub fn input(&self) -> &HoldingInput {
        &self.input
    }

    /// The result of the last recomputation.
    pub fn result(&self) -> &HoldingResult {
        &self.result
    }

    pub fn value(
        &self,
        field: HoldingField,
    ) -> Decimal {
        match field {
            HoldingField::Dividend => self.input.dividend,
            HoldingField::CorporateTaxRate => self.input.corporate_tax_rate,
            HoldingField::SurchargeRate => self.input.surcharge_rate,
            HoldingField::TradeTaxRate => self.input.trade_tax_rate,
        }
    }

    pub fn trade_tax_exempt(&self) -> bool {
        self.input.trade_tax_exempt
    }

    /// Switches between defaults mode and custom mode.
    ///
    /// Enabling defaults resets every dependent field; disabling only
    /// unlocks the fields.
    pub fn set_use_defaults(
        &mut self,
        enabled: bool,
    ) {
        self.use_defaults = enabled;
        if enabled {
            debug!("holding calculator reset to average values");
            self.input = HoldingInput::from(&self.defaults);
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
        field: HoldingField,
        value: Decimal,
    ) -> Result<(), StateError> {
        self.ensure_unlocked(field.name())?;
        match field {
            HoldingField::Dividend => self.input.dividend = value,
            HoldingField::CorporateTaxRate => self.input.corporate_tax_rate = value,
            HoldingField::SurchargeRate => self.input.surcharge_rate = value,
            HoldingField::TradeTaxRate => self.input.trade_tax_rate = value,
        }
        self.recompute();
        Ok(())
    }

    /// Stores the trade tax exemption flag.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::FieldLocked`] while defaults mode is active.
    pub fn set_trade_tax_exempt(
        &mut self,
        exempt: bool,
    ) -> Result<(), StateError> {
        self.ensure_unlocked("trade_tax_exempt")?;
        self.input.trade_tax_exempt = exempt;
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
        self.result = calculate_holding(&self.input);
    }
}

impl Default for HoldingState {
    fn default() -> Self {
        Self::new(HoldingDefaults::default())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn custom_state() -> HoldingState {
        let mut state = HoldingState::default();
        state.set_use_defaults(false);
        state
    }

    // =========================================================================
    // construction tests
    // =========================================================================

    #[test]
    fn new_starts_in_defaults_mode_with_default_values() {
        let state = HoldingState::default();

        assert!(state.use_defaults());
        assert_eq!(state.input(), &HoldingInput::from(&HoldingDefaults::default()));
        assert_eq!(state.result().net_to_holding, dec!(198417.5));
    }

    #[test]
    fn new_uses_supplied_defaults() {
        let defaults = HoldingDefaults {
            dividend: dec!(50000),
            trade_tax_exempt: false,
            ..HoldingDefaults::default()
        };

        let state = HoldingState::new(defaults);

        assert_eq!(state.value(HoldingField::Dividend), dec!(50000));
        assert!(!state.trade_tax_exempt());
        assert_eq!(state.result().taxable_portion, dec!(2500));
    }

    // =========================================================================
    // defaults mode tests
    // =========================================================================

    #[test]
    fn edits_are_rejected_in_defaults_mode() {
        let mut state = HoldingState::default();

        let result = state.set_value(HoldingField::Dividend, dec!(1));

        assert_eq!(result, Err(StateError::FieldLocked("dividend")));
        assert_eq!(state.value(HoldingField::Dividend), dec!(200000));
    }

    #[test]
    fn trade_tax_exemption_is_locked_in_defaults_mode() {
        let mut state = HoldingState::default();

        let result = state.set_trade_tax_exempt(false);

        assert_eq!(result, Err(StateError::FieldLocked("trade_tax_exempt")));
        assert!(state.trade_tax_exempt());
    }

    #[test]
    fn leaving_defaults_mode_keeps_values() {
        let state = custom_state();

        assert!(!state.use_defaults());
        assert_eq!(state.input(), &HoldingInput::from(&HoldingDefaults::default()));
    }

    #[test]
    fn entering_defaults_mode_resets_all_fields() {
        let mut state = custom_state();
        for field in HoldingField::ALL {
            state.set_value(field, dec!(0.5)).unwrap();
        }
        state.set_trade_tax_exempt(false).unwrap();

        state.set_use_defaults(true);

        assert_eq!(state.value(HoldingField::Dividend), dec!(200000));
        assert_eq!(state.value(HoldingField::CorporateTaxRate), dec!(0.15));
        assert_eq!(state.value(HoldingField::SurchargeRate), dec!(0.055));
        assert!(state.trade_tax_exempt());
        assert_eq!(state.value(HoldingField::TradeTaxRate), dec!(0.14));
        assert_eq!(state.result().total_tax, dec!(1582.5));
    }

    // =========================================================================
    // recomputation tests
    // =========================================================================

    #[test]
    fn set_value_recomputes_result() {
        let mut state = custom_state();

        state.set_value(HoldingField::Dividend, dec!(100000)).unwrap();

        assert_eq!(state.result().taxable_portion, dec!(5000));
        assert_eq!(state.result().total_tax, dec!(791.25));
    }

    #[test]
    fn set_trade_tax_exempt_recomputes_result() {
        let mut state = custom_state();

        state.set_trade_tax_exempt(false).unwrap();

        assert_eq!(state.result().trade_tax, dec!(1400));
    }

    #[test]
    fn huge_dividend_and_rate_do_not_overflow() {
        let mut state = custom_state();

        state.set_value(HoldingField::Dividend, Decimal::MAX).unwrap();
        state
            .set_value(HoldingField::CorporateTaxRate, dec!(1000))
            .unwrap();

        assert_eq!(state.result().total_tax, Decimal::MAX);
        assert_eq!(state.result().net_to_holding, Decimal::ZERO);
    }

    #[test]
    fn zero_dividend_yields_zero_effective_rate() {
        let mut state = custom_state();

        state.set_value(HoldingField::Dividend, Decimal::ZERO).unwrap();

        assert_eq!(state.result().effective_rate, Decimal::ZERO);
    }
}
