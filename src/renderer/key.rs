// SPDX-License-Identifier: GPL-3.0-only

//! Key rendering for the keyboard widget.
//!
//! Keys are rendered as buttons with a centered text label. Toggle controls
//! (Shift, Caps-Lock) use the accent style while engaged.

use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, button, container};
use cosmic::Element;

use crate::renderer::message::KeyboardMessage;
use crate::renderer::state::KeyControl;

/// Height of a key row in pixels.
pub const KEY_HEIGHT: f32 = 36.0;

/// Renders a single key control.
///
/// # Arguments
///
/// * `control` - The control to render
/// * `width` - Width of the key inside its row
///
/// # Returns
///
/// An Element containing the key button.
pub fn render_key<'a>(control: &KeyControl, width: Length) -> Element<'a, KeyboardMessage> {
    let label = container(widget::text::body(control.label.clone()))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center);

    button::custom(label)
        .on_press(KeyboardMessage::KeyPressed(control.key.code.clone()))
        .class(button_class(control))
        .width(width)
        .height(Length::Fixed(KEY_HEIGHT))
        .into()
}

/// Button style for a control.
///
/// Engaged toggles use the accent color, everything else the standard look.
#[must_use]
pub fn button_class(control: &KeyControl) -> cosmic::style::Button {
    if is_highlighted(control) {
        cosmic::style::Button::Suggested
    } else {
        cosmic::style::Button::Standard
    }
}

/// Returns `true` if the control renders with the selected look.
#[must_use]
pub fn is_highlighted(control: &KeyControl) -> bool {
    control.toggle && control.selected
}
