//! The two calculators rendered on the main page.
//!
//! - `holding` - dividend taxation inside a holding structure
//! - `managing_director` - salary versus distribution for a managing director
//!
//! Each view owns its calculator state and one text input per numeric field.

mod holding;
mod managing_director;

pub use holding::HoldingCalculatorView;
pub use managing_director::ManagingDirectorView;

use gpui::{App, AppContext, Entity, Window};
use gpui_component::input::InputState;
use rust_decimal::Decimal;

use crate::utils::amount_text;

/// Overwrites the text of `input` with `value`.
fn set_input_text(
    input: &Entity<InputState>,
    value: Decimal,
    window: &mut Window,
    cx: &mut App,
) {
    let text = amount_text(value);
    input.update(cx, |state, state_cx| state.set_value(text, window, state_cx));
}
