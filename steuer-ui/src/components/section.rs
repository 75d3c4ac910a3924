use gpui::{
    AnyElement, Div, FontWeight, IntoElement, ParentElement, SharedString, Styled, div,
    prelude::FluentBuilder as _,
};
use gpui_component::{h_flex, v_flex};

use crate::components::palette;

/// A titled panel. `actions` is placed at the right end of the title row.
pub fn section(
    title: impl Into<SharedString>,
    subtitle: Option<SharedString>,
    actions: Option<AnyElement>,
    body: impl IntoElement,
) -> Div {
    let heading = v_flex()
        .gap_1()
        .child(
            div()
                .text_xl()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(palette::text())
                .child(title.into()),
        )
        .when_some(subtitle, |heading, subtitle| {
            heading.child(div().text_sm().text_color(palette::muted()).child(subtitle))
        });

    v_flex()
        .w_full()
        .gap_4()
        .p_6()
        .rounded_xl()
        .border_1()
        .border_color(palette::border())
        .bg(palette::panel_bg())
        .shadow_sm()
        .child(
            h_flex()
                .w_full()
                .justify_between()
                .items_start()
                .gap_4()
                .child(heading)
                .children(actions),
        )
        .child(body)
}

/// A single result figure with its label and an optional caption.
pub fn stat_tile(
    label: impl Into<SharedString>,
    caption: Option<SharedString>,
    value: impl Into<SharedString>,
    large: bool,
) -> Div {
    let value = div().text_color(palette::text()).child(value.into());
    let value = if large {
        value.text_3xl().font_weight(FontWeight::BOLD)
    } else {
        value.text_2xl().font_weight(FontWeight::SEMIBOLD)
    };

    v_flex()
        .flex_1()
        .gap_1()
        .p_4()
        .rounded_xl()
        .border_1()
        .border_color(palette::border())
        .bg(palette::tile_bg())
        .child(
            div()
                .text_sm()
                .text_color(palette::muted())
                .child(label.into()),
        )
        .when_some(caption, |tile, caption| {
            tile.child(div().text_xs().text_color(palette::muted()).child(caption))
        })
        .child(value)
}
