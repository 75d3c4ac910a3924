pub mod number_field;
pub mod section;
pub mod toggle;
pub mod window;

use gpui::{App, ClickEvent, ElementId, Pixels, SharedString, Size, Styled, Window, px};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{Disableable, Sizable};

pub use number_field::NumberField;
pub use section::{section, stat_tile};
pub use toggle::toggle;
pub use window::AppWindow;

/// Slate palette shared by all widgets.
pub mod palette {
    use gpui::{Rgba, rgb};

    pub fn page_bg() -> Rgba {
        rgb(0xf1f5f9)
    }

    pub fn panel_bg() -> Rgba {
        rgb(0xffffff)
    }

    pub fn tile_bg() -> Rgba {
        rgb(0xf8fafc)
    }

    pub fn border() -> Rgba {
        rgb(0xe2e8f0)
    }

    pub fn input_border() -> Rgba {
        rgb(0xcbd5e1)
    }

    pub fn text() -> Rgba {
        rgb(0x0f172a)
    }

    pub fn label() -> Rgba {
        rgb(0x475569)
    }

    pub fn muted() -> Rgba {
        rgb(0x64748b)
    }

    pub fn faint() -> Rgba {
        rgb(0x94a3b8)
    }

    /// Track colour of an active toggle.
    pub fn accent() -> Rgba {
        rgb(0x0f172a)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        Self::new(px(1100.0), px(900.0))
    }
}

impl WindowPreferences {
    pub fn new(
        width: impl Into<Pixels>,
        height: impl Into<Pixels>,
    ) -> Self {
        Self {
            size: Size {
                width: width.into(),
                height: height.into(),
            },
        }
    }
}

/// Creates a small ghost button used for the ± step controls.
pub fn make_step_button(
    id: impl Into<ElementId>,
    label: impl Into<SharedString>,
    disabled: bool,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id)
        .ghost()
        .small()
        .w(px(28.))
        .label(label.into())
        .disabled(disabled)
        .on_click(on_click)
}
