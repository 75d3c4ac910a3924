use std::rc::Rc;

use gpui::{
    App, AppContext, ClickEvent, Context, Div, Entity, ParentElement, SharedString, Styled, Window,
    div, prelude::FluentBuilder as _,
};
use gpui_component::{
    Disableable, h_flex,
    input::{Input, InputState, MaskPattern},
    v_flex,
};
use rust_decimal::Decimal;

use crate::{
    components::{make_step_button, palette},
    utils::parse_amount,
};

/// A labeled numeric control bound to a caller-owned value.
///
/// The field never stores the number itself: the caller owns the value,
/// passes it in on every render, and receives changes through the callback.
#[derive(Debug, Clone)]
pub struct NumberField {
    id: SharedString,
    label: SharedString,
    step: Decimal,
    min: Decimal,
    suffix: Option<SharedString>,
    hint: Option<SharedString>,
    disabled: bool,
}

impl NumberField {
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            step: Decimal::ONE,
            min: Decimal::ZERO,
            suffix: None,
            hint: None,
            disabled: false,
        }
    }

    pub fn step(
        mut self,
        step: Decimal,
    ) -> Self {
        self.step = step;
        self
    }

    /// Lower bound applied when stepping down. Typed values are not clamped.
    pub fn min(
        mut self,
        min: Decimal,
    ) -> Self {
        self.min = min;
        self
    }

    pub fn suffix(
        mut self,
        suffix: impl Into<SharedString>,
    ) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn hint(
        mut self,
        hint: impl Into<SharedString>,
    ) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn disabled(
        mut self,
        disabled: bool,
    ) -> Self {
        self.disabled = disabled;
        self
    }

    /// Parses raw field text; malformed or empty text becomes 0.
    pub fn parse(
        &self,
        raw: &str,
    ) -> Decimal {
        parse_amount(raw)
    }

    pub fn stepped_up(
        &self,
        current: Decimal,
    ) -> Decimal {
        current.saturating_add(self.step)
    }

    pub fn stepped_down(
        &self,
        current: Decimal,
    ) -> Decimal {
        let next = current.saturating_sub(self.step);
        if next < self.min { self.min } else { next }
    }

    /// Renders the label row and the control row.
    ///
    /// `on_change` receives the new value when a step button is pressed;
    /// typed edits arrive through the input's change events instead.
    pub fn render(
        self,
        input: &Entity<InputState>,
        current: Decimal,
        on_change: impl Fn(&Decimal, &mut Window, &mut App) + 'static,
    ) -> Div {
        let on_change = Rc::new(on_change);
        let down_value = self.stepped_down(current);
        let up_value = self.stepped_up(current);
        let on_down = on_change.clone();
        let on_up = on_change;

        v_flex()
            .gap_1()
            .child(
                h_flex()
                    .gap_2()
                    .items_center()
                    .child(
                        div()
                            .text_sm()
                            .text_color(palette::label())
                            .child(self.label.clone()),
                    )
                    .when_some(self.hint.clone(), |row, hint| {
                        row.child(div().text_xs().text_color(palette::faint()).child(hint))
                    }),
            )
            .child(
                h_flex()
                    .items_center()
                    .rounded_lg()
                    .border_1()
                    .border_color(palette::input_border())
                    .bg(palette::panel_bg())
                    .overflow_hidden()
                    .when(self.disabled, |row| row.opacity(0.6))
                    .child(Input::new(input).flex_grow().disabled(self.disabled))
                    .child(make_step_button(
                        SharedString::from(format!("{}-down", self.id)),
                        "−",
                        self.disabled,
                        move |_: &ClickEvent, window: &mut Window, cx: &mut App| {
                            on_down(&down_value, window, cx)
                        },
                    ))
                    .child(make_step_button(
                        SharedString::from(format!("{}-up", self.id)),
                        "+",
                        self.disabled,
                        move |_: &ClickEvent, window: &mut Window, cx: &mut App| {
                            on_up(&up_value, window, cx)
                        },
                    ))
                    .when_some(self.suffix, |row, suffix| {
                        row.child(
                            div()
                                .px_3()
                                .py_2()
                                .text_color(palette::muted())
                                .bg(palette::tile_bg())
                                .border_l_1()
                                .border_color(palette::border())
                                .child(suffix),
                        )
                    }),
            )
    }
}

/// Creates the text state behind a [`NumberField`].
///
/// `fraction` limits the number of decimals the mask accepts.
pub fn make_number_input<V: 'static>(
    placeholder: impl Into<SharedString>,
    fraction: usize,
    window: &mut Window,
    cx: &mut Context<V>,
) -> Entity<InputState> {
    let pattern = MaskPattern::Number {
        separator: Some(','),
        fraction: Some(fraction),
    };

    cx.new(|closure_cx| {
        InputState::new(window, closure_cx)
            .mask_pattern(pattern)
            .placeholder(placeholder.into())
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn rate_field() -> NumberField {
        NumberField::new("kst", "Körperschaftsteuer (KSt)")
            .step(dec!(0.005))
            .suffix("Quote")
            .hint("Ø 15%")
    }

    #[test]
    fn new_uses_unit_step_and_zero_minimum() {
        let field = NumberField::new("dividend", "Dividende");

        assert_eq!(field.stepped_up(dec!(10)), dec!(11));
        assert_eq!(field.stepped_down(dec!(0.5)), Decimal::ZERO);
    }

    #[test]
    fn stepping_uses_configured_increment() {
        let field = rate_field();

        assert_eq!(field.stepped_up(dec!(0.15)), dec!(0.155));
        assert_eq!(field.stepped_down(dec!(0.15)), dec!(0.145));
    }

    #[test]
    fn stepping_down_stops_at_minimum() {
        let field = rate_field();

        assert_eq!(field.stepped_down(dec!(0.002)), Decimal::ZERO);
    }

    #[test]
    fn stepping_down_lifts_values_below_minimum() {
        let field = NumberField::new("salary", "Bruttogehalt").min(dec!(1000));

        assert_eq!(field.stepped_down(dec!(-50)), dec!(1000));
    }

    #[test]
    fn parse_substitutes_zero_for_malformed_text() {
        let field = rate_field();

        assert_eq!(field.parse(""), Decimal::ZERO);
        assert_eq!(field.parse("x1"), Decimal::ZERO);
        assert_eq!(field.parse("0.055"), dec!(0.055));
    }

    #[test]
    fn stepping_saturates_at_decimal_bounds() {
        let field = NumberField::new("dividend", "Dividende")
            .step(Decimal::ONE_THOUSAND)
            .min(Decimal::MIN);

        assert_eq!(field.stepped_up(Decimal::MAX), Decimal::MAX);
        assert_eq!(field.stepped_down(Decimal::MIN), Decimal::MIN);
    }

    #[test]
    fn parse_keeps_huge_values_for_saturating_steps() {
        let field = NumberField::new("dividend", "Dividende").step(Decimal::ONE_THOUSAND);
        let huge = field.parse("79,228,162,514,264,337,593,543,950,335");

        assert_eq!(huge, Decimal::MAX);
        assert_eq!(field.stepped_up(huge), Decimal::MAX);
    }
}
