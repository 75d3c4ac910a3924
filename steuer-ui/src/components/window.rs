use gpui::{
    AnyElement, App, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Subscription, Window, div, px,
};
use gpui_component::v_flex;
use tracing::info;

#[cfg(not(target_os = "linux"))]
use crate::Quit;
use crate::components::palette;
#[cfg(not(target_os = "linux"))]
use crate::quit;

/// Top-level view: a vertically scrolling page around the content factory.
pub struct AppWindow {
    _window_close_subscription: Subscription,
    content: Option<Box<dyn Fn() -> AnyElement>>,
}

impl AppWindow {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let subscription = cx.on_window_closed(|_cx: &mut App| {
            info!("main window closed");
            #[cfg(not(target_os = "linux"))]
            quit(&Quit, _cx);
        });

        Self {
            _window_close_subscription: subscription,
            content: None,
        }
    }

    /// Sets the factory called on every render to build the page body.
    pub fn set_content(
        &mut self,
        content: impl Fn() -> AnyElement + 'static,
    ) {
        self.content = Some(Box::new(content));
    }
}

impl Render for AppWindow {
    fn render(
        &mut self,
        _: &mut Window,
        _cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let content = self.content.as_ref().map(|f| f());

        div()
            .id("page")
            .size_full()
            .overflow_y_scroll()
            .bg(palette::page_bg())
            .text_color(palette::text())
            .child(
                v_flex()
                    .w_full()
                    .max_w(px(1024.))
                    .mx_auto()
                    .p_6()
                    .gap_6()
                    .children(content),
            )
    }
}
