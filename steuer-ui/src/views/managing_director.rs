use gpui::{
    Context, Div, Entity, IntoElement, ParentElement, Render, Styled, Subscription, Window, px,
};
use gpui_component::{
    h_flex,
    input::{InputEvent, InputState},
    v_flex,
};
use rust_decimal::Decimal;
use steuer_core::{
    ManagingDirectorDefaults, ManagingDirectorField, ManagingDirectorState,
    format::format_currency,
};
use tracing::{debug, info, warn};

use super::set_input_text;
use crate::components::{
    NumberField, number_field::make_number_input, section, stat_tile, toggle,
};

const TITLE: &str = "Geschäftsführer-Optimierungs-Check";
const SUBTITLE: &str = "Vergleich Netto aus Gehalt vs. Ausschüttung – Durchschnittswerte.";

fn field_control(field: ManagingDirectorField) -> NumberField {
    let id = format!("managing-director-{}", field.name());
    let rate_step = Decimal::new(1, 2);
    match field {
        ManagingDirectorField::GrossSalary => NumberField::new(id, "Bruttogehalt p.a.")
            .step(Decimal::ONE_THOUSAND)
            .suffix("€"),
        ManagingDirectorField::Dividend => NumberField::new(id, "Dividende p.a.")
            .step(Decimal::ONE_THOUSAND)
            .suffix("€"),
        ManagingDirectorField::PersonalTaxRate => {
            NumberField::new(id, "Grenzsteuersatz (persönlich)")
                .step(rate_step)
                .suffix("Quote")
        }
        ManagingDirectorField::ChurchTaxRate => NumberField::new(id, "Kirchensteuer")
            .step(rate_step)
            .suffix("Quote"),
        ManagingDirectorField::EmployeeContributionRate => {
            NumberField::new(id, "AN-Sozialabgaben")
                .step(rate_step)
                .suffix("Quote")
        }
    }
}

fn mask_fraction(field: ManagingDirectorField) -> usize {
    match field {
        ManagingDirectorField::GrossSalary | ManagingDirectorField::Dividend => 2,
        _ => 4,
    }
}

/// Salary versus distribution comparison panel.
pub struct ManagingDirectorView {
    state: ManagingDirectorState,
    inputs: Vec<(ManagingDirectorField, Entity<InputState>)>,
    _subscriptions: Vec<Subscription>,
}

impl ManagingDirectorView {
    pub fn new(
        defaults: ManagingDirectorDefaults,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let state = ManagingDirectorState::new(defaults);
        let mut inputs = Vec::with_capacity(ManagingDirectorField::ALL.len());
        let mut subscriptions = Vec::with_capacity(ManagingDirectorField::ALL.len());

        for field in ManagingDirectorField::ALL {
            let input = make_number_input("0", mask_fraction(field), window, cx);
            set_input_text(&input, state.value(field), window, cx);

            subscriptions.push(cx.subscribe_in(
                &input,
                window,
                move |this: &mut Self,
                      input: &Entity<InputState>,
                      event: &InputEvent,
                      window: &mut Window,
                      cx: &mut Context<Self>| {
                    if matches!(event, InputEvent::Change { .. }) {
                        let raw = input.read(cx).value().to_string();
                        this.on_text_changed(field, &raw, window, cx);
                    }
                },
            ));
            inputs.push((field, input));
        }

        debug!(result = %state.result(), "managing director comparison ready");
        Self {
            state,
            inputs,
            _subscriptions: subscriptions,
        }
    }

    fn input(
        &self,
        field: ManagingDirectorField,
    ) -> Option<&Entity<InputState>> {
        self.inputs
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, input)| input)
    }

    /// Rewrites every input from the state.
    fn sync_inputs(
        &self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        for (field, input) in &self.inputs {
            set_input_text(input, self.state.value(*field), window, cx);
        }
    }

    fn on_use_defaults(
        &mut self,
        enabled: bool,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        info!(enabled, "managing director average values toggled");
        self.state.set_use_defaults(enabled);
        if enabled {
            self.sync_inputs(window, cx);
        }
        debug!(result = %self.state.result(), "managing director result updated");
        cx.notify();
    }

    fn on_text_changed(
        &mut self,
        field: ManagingDirectorField,
        raw: &str,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let value = field_control(field).parse(raw);
        if value == self.state.value(field) {
            return;
        }
        self.apply_value(field, value, window, cx);
    }

    fn on_step(
        &mut self,
        field: ManagingDirectorField,
        value: Decimal,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if !self.apply_value(field, value, window, cx) {
            return;
        }
        if let Some(input) = self.input(field) {
            set_input_text(input, value, window, cx);
        }
    }

    fn apply_value(
        &mut self,
        field: ManagingDirectorField,
        value: Decimal,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> bool {
        match self.state.set_value(field, value) {
            Ok(()) => {
                debug!(field = field.name(), %value, result = %self.state.result(), "managing director result updated");
                cx.notify();
                true
            }
            Err(e) => {
                warn!(%e, field = field.name(), "managing director edit rejected");
                self.sync_inputs(window, cx);
                false
            }
        }
    }

    fn on_flat_tax_election(
        &mut self,
        elected: bool,
        cx: &mut Context<Self>,
    ) {
        match self.state.set_flat_tax_election(elected) {
            Ok(()) => {
                debug!(elected, result = %self.state.result(), "managing director result updated");
                cx.notify();
            }
            Err(e) => warn!(%e, "managing director edit rejected"),
        }
    }

    fn render_inputs(
        &self,
        cx: &mut Context<Self>,
    ) -> Div {
        let locked = self.state.use_defaults();
        let mut column = v_flex().w(px(320.)).gap_4();

        for (field, input) in &self.inputs {
            let field = *field;
            column = column.child(field_control(field).disabled(locked).render(
                input,
                self.state.value(field),
                cx.listener(move |this, value: &Decimal, window, cx| {
                    this.on_step(field, *value, window, cx)
                }),
            ));
        }

        column.child(toggle(
            "managing-director-flat-tax",
            "Abgeltungsteuer (statt Teileinkünfte)",
            self.state.flat_tax_election(),
            locked,
            cx.listener(|this, elected: &bool, _, cx| this.on_flat_tax_election(*elected, cx)),
        ))
    }

    fn render_results(&self) -> Div {
        let result = self.state.result();

        v_flex()
            .flex_1()
            .gap_4()
            .child(
                h_flex()
                    .gap_4()
                    .child(stat_tile(
                        "Netto aus Gehalt",
                        None,
                        format_currency(result.salary.net),
                        true,
                    ))
                    .child(stat_tile(
                        "Netto aus Ausschüttung",
                        Some(result.distribution.mode().label().into()),
                        format_currency(result.distribution.net),
                        true,
                    )),
            )
            .child(stat_tile(
                "Vergleich",
                None,
                format!("🔹 {}", result.comparison.message()),
                false,
            ))
    }
}

impl Render for ManagingDirectorView {
    fn render(
        &mut self,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let defaults_toggle = toggle(
            "managing-director-use-defaults",
            "Durchschnittswerte verwenden",
            self.state.use_defaults(),
            false,
            cx.listener(|this, enabled: &bool, window, cx| {
                this.on_use_defaults(*enabled, window, cx)
            }),
        );

        section(
            TITLE,
            Some(SUBTITLE.into()),
            Some(defaults_toggle.into_any_element()),
            h_flex()
                .items_start()
                .gap_6()
                .child(self.render_inputs(cx))
                .child(self.render_results()),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn amount_fields_step_by_thousand() {
        for field in [
            ManagingDirectorField::GrossSalary,
            ManagingDirectorField::Dividend,
        ] {
            assert_eq!(field_control(field).stepped_up(dec!(180000)), dec!(181000));
            assert_eq!(mask_fraction(field), 2);
        }
    }

    #[test]
    fn rate_fields_step_by_one_percent() {
        for field in [
            ManagingDirectorField::PersonalTaxRate,
            ManagingDirectorField::ChurchTaxRate,
            ManagingDirectorField::EmployeeContributionRate,
        ] {
            assert_eq!(field_control(field).stepped_down(dec!(0.085)), dec!(0.075));
            assert_eq!(mask_fraction(field), 4);
        }
    }

    #[test]
    fn rate_cannot_step_below_zero() {
        let control = field_control(ManagingDirectorField::ChurchTaxRate);

        assert_eq!(control.stepped_down(dec!(0.005)), dec!(0));
    }
}
