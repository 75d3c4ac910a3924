use anyhow::Result;
use chrono::{Datelike, Local};
use gpui::{
    AnyElement, AnyView, App, AppContext, Bounds, Context, FontWeight, IntoElement, KeyBinding, Menu,
    MenuItem, ParentElement, Styled, TitlebarOptions, Window, WindowBounds, WindowOptions, div,
    px,
};
use gpui_component::{Root, v_flex};
use tracing::info;

use crate::{
    Quit,
    components::{AppWindow, WindowPreferences, palette, section},
    config::AppConfig,
    quit,
    views::{HoldingCalculatorView, ManagingDirectorView},
};

pub const APP_TITLE: &str = "Digitale Steuer-Tools";
const APP_SUBTITLE: &str = "Holding-Rechner & Geschäftsführer-Optimierung";
const DISCLAIMER: &str = "Dieses Tool ersetzt keine individuelle Steuerberatung. \
    Ergebnisse sind Näherungen auf Basis typischer Durchschnittswerte.";

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: APP_TITLE.into(),
        items: vec![MenuItem::action("Beenden", Quit)],
    }]);
}

/// Opens the main window sized from the `[window]` config section.
pub fn open_main_window(
    app_cx: &mut App,
    config: &AppConfig,
) -> Result<()> {
    let preferences = WindowPreferences::new(px(config.window.width), px(config.window.height));
    let bounds = Bounds::centered(None, preferences.size, app_cx);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some(APP_TITLE.into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    let config_for_window = config.clone();
    app_cx.open_window(options, move |window, cx| {
        let content = build_main_content(window, cx, &config_for_window);
        let view = cx.new(|view_cx: &mut Context<AppWindow>| {
            let mut app_window = AppWindow::new(view_cx);
            app_window.set_content(content);
            app_window
        });
        let view: AnyView = view.into();
        cx.new(|root_cx| Root::new(view, window, root_cx))
    })?;

    info!(
        width = config.window.width,
        height = config.window.height,
        "main window opened"
    );
    Ok(())
}

/// Builds the page: header, both calculators, disclaimer and footer.
pub fn build_main_content(
    window: &mut Window,
    app_cx: &mut App,
    config: &AppConfig,
) -> impl Fn() -> AnyElement + 'static {
    let holding_defaults = config.holding.clone();
    let holding = app_cx.new(|view_cx: &mut Context<HoldingCalculatorView>| {
        HoldingCalculatorView::new(holding_defaults, window, view_cx)
    });
    let managing_director_defaults = config.managing_director.clone();
    let managing_director = app_cx.new(|view_cx: &mut Context<ManagingDirectorView>| {
        ManagingDirectorView::new(managing_director_defaults, window, view_cx)
    });
    let footer = footer_text(Local::now().year());

    move || {
        v_flex()
            .w_full()
            .gap_6()
            .child(
                v_flex()
                    .child(
                        div()
                            .text_2xl()
                            .font_weight(FontWeight::BOLD)
                            .child(APP_TITLE),
                    )
                    .child(div().text_color(palette::label()).child(APP_SUBTITLE)),
            )
            .child(holding.clone())
            .child(managing_director.clone())
            .child(section(
                "Disclaimer",
                Some("Bitte sichtbar auf der Seite lassen".into()),
                None,
                div()
                    .text_sm()
                    .text_color(palette::label())
                    .child(DISCLAIMER),
            ))
            .child(
                div()
                    .text_xs()
                    .text_color(palette::muted())
                    .child(footer.clone()),
            )
            .into_any_element()
    }
}

fn footer_text(year: i32) -> String {
    format!("© {year} – David Wenzel Steuerkanzlei")
}
