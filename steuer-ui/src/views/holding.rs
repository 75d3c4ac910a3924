use gpui::{
    Context, Div, Entity, IntoElement, ParentElement, Render, Styled, Subscription, Window, div, px,
};
use gpui_component::{
    h_flex,
    input::{InputEvent, InputState},
    v_flex,
};
use rust_decimal::Decimal;
use steuer_core::{
    HoldingDefaults, HoldingField, HoldingState,
    format::{format_currency, format_percent},
};
use tracing::{debug, info, warn};

use super::set_input_text;
use crate::components::{
    NumberField, number_field::make_number_input, palette, section, stat_tile, toggle,
};

const TITLE: &str = "Holding-Struktur-Rechner";
const SUBTITLE: &str =
    "Effektive Steuerbelastung gem. § 8b KStG (95 % steuerfrei). Durchschnittswerte/Näherungen.";

fn field_control(field: HoldingField) -> NumberField {
    let id = format!("holding-{}", field.name());
    match field {
        HoldingField::Dividend => NumberField::new(id, "Dividende an die Holding")
            .step(Decimal::ONE_THOUSAND)
            .suffix("€")
            .hint("Durchschnitt"),
        HoldingField::CorporateTaxRate => NumberField::new(id, "Körperschaftsteuer (KSt)")
            .step(Decimal::new(5, 3))
            .suffix("Quote")
            .hint("Ø 15%"),
        HoldingField::SurchargeRate => NumberField::new(id, "Soli auf KSt")
            .step(Decimal::new(1, 3))
            .suffix("Quote")
            .hint("Ø 5,5%"),
        HoldingField::TradeTaxRate => NumberField::new(id, "Gewerbesteuer (falls nicht befreit)")
            .step(Decimal::new(5, 3))
            .suffix("Quote")
            .hint("Ø 14%"),
    }
}

fn mask_fraction(field: HoldingField) -> usize {
    match field {
        HoldingField::Dividend => 2,
        _ => 4,
    }
}

/// Holding calculator panel.
pub struct HoldingCalculatorView {
    state: HoldingState,
    inputs: Vec<(HoldingField, Entity<InputState>)>,
    _subscriptions: Vec<Subscription>,
}

impl HoldingCalculatorView {
    pub fn new(
        defaults: HoldingDefaults,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let state = HoldingState::new(defaults);
        let mut inputs = Vec::with_capacity(HoldingField::ALL.len());
        let mut subscriptions = Vec::with_capacity(HoldingField::ALL.len());

        for field in HoldingField::ALL {
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

        debug!(result = %state.result(), "holding calculator ready");
        Self {
            state,
            inputs,
            _subscriptions: subscriptions,
        }
    }

    fn input(
        &self,
        field: HoldingField,
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
        info!(enabled, "holding calculator average values toggled");
        self.state.set_use_defaults(enabled);
        if enabled {
            self.sync_inputs(window, cx);
        }
        debug!(result = %self.state.result(), "holding result updated");
        cx.notify();
    }

    fn on_text_changed(
        &mut self,
        field: HoldingField,
        raw: &str,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let value = field_control(field).parse(raw);
        // Echo of our own sync.
        if value == self.state.value(field) {
            return;
        }
        self.apply_value(field, value, window, cx);
    }

    fn on_step(
        &mut self,
        field: HoldingField,
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
        field: HoldingField,
        value: Decimal,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> bool {
        match self.state.set_value(field, value) {
            Ok(()) => {
                debug!(field = field.name(), %value, result = %self.state.result(), "holding result updated");
                cx.notify();
                true
            }
            Err(e) => {
                warn!(%e, field = field.name(), "holding edit rejected");
                self.sync_inputs(window, cx);
                false
            }
        }
    }

    fn on_trade_tax_exempt(
        &mut self,
        exempt: bool,
        cx: &mut Context<Self>,
    ) {
        match self.state.set_trade_tax_exempt(exempt) {
            Ok(()) => {
                debug!(exempt, result = %self.state.result(), "holding result updated");
                cx.notify();
            }
            Err(e) => warn!(%e, "holding edit rejected"),
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
            let control = field_control(field).disabled(locked);
            column = column.child(control.render(
                input,
                self.state.value(field),
                cx.listener(move |this, value: &Decimal, window, cx| {
                    this.on_step(field, *value, window, cx)
                }),
            ));
        }

        column.child(toggle(
            "holding-trade-tax-exempt",
            "≥ 15% Beteiligung (GewSt-Befreiung)",
            self.state.trade_tax_exempt(),
            locked,
            cx.listener(|this, exempt: &bool, _, cx| this.on_trade_tax_exempt(*exempt, cx)),
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
                        "Steuerpflichtiger Anteil (5%)",
                        None,
                        format_currency(result.taxable_portion),
                        false,
                    ))
                    .child(stat_tile(
                        "KSt + Soli (auf 5%)",
                        None,
                        format_currency(result.corporate_tax_with_surcharge()),
                        false,
                    )),
            )
            .child(
                h_flex()
                    .gap_4()
                    .child(stat_tile(
                        "Gewerbesteuer (falls fällig)",
                        None,
                        format_currency(result.trade_tax),
                        false,
                    ))
                    .child(stat_tile(
                        "Effektive Steuerquote",
                        None,
                        format_percent(result.effective_rate),
                        false,
                    )),
            )
            .child(stat_tile(
                "Nettozufluss zur Holding",
                None,
                format_currency(result.net_to_holding),
                true,
            ))
            .child(
                div()
                    .text_xs()
                    .text_color(palette::muted())
                    .child("Hinweis: Vereinfachtes Modell. Keine Steuerberatung."),
            )
    }
}

impl Render for HoldingCalculatorView {
    fn render(
        &mut self,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let defaults_toggle = toggle(
            "holding-use-defaults",
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
    fn dividend_steps_by_thousand() {
        let control = field_control(HoldingField::Dividend);

        assert_eq!(control.stepped_up(dec!(200000)), dec!(201000));
        assert_eq!(control.stepped_down(dec!(500)), dec!(0));
    }

    #[test]
    fn rate_steps_match_field() {
        assert_eq!(
            field_control(HoldingField::CorporateTaxRate).stepped_up(dec!(0.15)),
            dec!(0.155)
        );
        assert_eq!(
            field_control(HoldingField::SurchargeRate).stepped_down(dec!(0.055)),
            dec!(0.054)
        );
        assert_eq!(
            field_control(HoldingField::TradeTaxRate).stepped_up(dec!(0.14)),
            dec!(0.145)
        );
    }

    #[test]
    fn only_the_amount_field_uses_two_decimals() {
        assert_eq!(mask_fraction(HoldingField::Dividend), 2);
        assert_eq!(mask_fraction(HoldingField::TradeTaxRate), 4);
    }
}
