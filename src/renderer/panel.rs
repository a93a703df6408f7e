// SPDX-License-Identifier: GPL-3.0-only

//! Full keyboard rendering: the layout's rows stacked top to bottom.

use cosmic::iced::{Length, Padding};
use cosmic::widget::{self, container};
use cosmic::Element;

use crate::renderer::message::KeyboardMessage;
use crate::renderer::row::render_row;
use crate::renderer::state::KeyboardWidget;

/// Renders the keyboard as a column of rows.
///
/// # Arguments
///
/// * `keyboard` - The widget to render
/// * `spacing` - Spacing between keys and between rows in pixels
/// * `padding` - Padding around the keyboard in pixels
///
/// # Returns
///
/// An Element containing the rendered keyboard.
pub fn render_keyboard<'a>(
    keyboard: &KeyboardWidget,
    spacing: f32,
    padding: f32,
) -> Element<'a, KeyboardMessage> {
    let mut column = widget::column::column().spacing(spacing);

    for row in &keyboard.layout().rows {
        column = column.push(render_row(row, keyboard, spacing));
    }

    container(column)
        .width(Length::Fill)
        .padding(Padding::from(padding))
        .class(cosmic::style::Container::Background)
        .into()
}
