use gpui::{
    App, ClickEvent, Div, ElementId, InteractiveElement, ParentElement, SharedString, Stateful,
    StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder as _, px,
};
use gpui_component::h_flex;

use crate::components::palette;

/// Renders a labeled switch for a caller-owned boolean.
///
/// Clicking calls `on_change` with the negated value; the switch never
/// flips itself. A disabled switch is dimmed and ignores clicks.
pub fn toggle(
    id: impl Into<ElementId>,
    label: impl Into<SharedString>,
    checked: bool,
    disabled: bool,
    on_change: impl Fn(&bool, &mut Window, &mut App) + 'static,
) -> Stateful<Div> {
    let track = h_flex()
        .w(px(44.))
        .h(px(24.))
        .p(px(2.))
        .rounded_full()
        .bg(if checked {
            palette::accent()
        } else {
            palette::input_border()
        })
        .when(checked, |track| track.justify_end())
        .child(div().size(px(20.)).rounded_full().bg(palette::panel_bg()));

    h_flex()
        .id(id)
        .gap_3()
        .items_center()
        .child(
            div()
                .text_sm()
                .text_color(palette::label())
                .child(label.into()),
        )
        .child(track)
        .when(disabled, |row| row.opacity(0.6))
        .when(!disabled, |row| {
            row.cursor_pointer()
                .on_click(move |_: &ClickEvent, window: &mut Window, cx: &mut App| {
                    on_change(&!checked, window, cx)
                })
        })
}
