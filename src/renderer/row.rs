// SPDX-License-Identifier: GPL-3.0-only

//! Row rendering for the keyboard widget.
//!
//! A row whose keys all have width 1 is split into equal columns. Any other
//! row is split in proportion to the key widths, and width-0 keys shrink to
//! their content.

use cosmic::iced::Length;
use cosmic::widget;
use cosmic::Element;

use crate::layout::Row;
use crate::renderer::key::render_key;
use crate::renderer::message::KeyboardMessage;
use crate::renderer::state::KeyboardWidget;

/// How a key shares its row's width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// One equal column
    Equal,
    /// A share of `width / sum(widths)`
    Weighted(u16),
    /// As narrow as the content allows
    Compact,
}

impl ColumnWidth {
    /// Converts to an iced length.
    pub fn to_length(self) -> Length {
        match self {
            ColumnWidth::Equal => Length::FillPortion(1),
            ColumnWidth::Weighted(width) => Length::FillPortion(width),
            ColumnWidth::Compact => Length::Shrink,
        }
    }
}

/// Column distribution of a row, one entry per key.
pub fn column_widths(row: &Row) -> Vec<ColumnWidth> {
    if row.is_uniform() {
        return vec![ColumnWidth::Equal; row.keys.len()];
    }
    row.keys
        .iter()
        .map(|key| match key.width {
            0 => ColumnWidth::Compact,
            width => ColumnWidth::Weighted(width),
        })
        .collect()
}

/// Renders a row of keys.
///
/// # Arguments
///
/// * `row` - The row definition from the layout
/// * `keyboard` - The widget owning the controls
/// * `spacing` - Spacing between keys in pixels
///
/// # Returns
///
/// An Element containing the rendered row.
pub fn render_row<'a>(
    row: &Row,
    keyboard: &KeyboardWidget,
    spacing: f32,
) -> Element<'a, KeyboardMessage> {
    let mut row_widget = widget::row::row().spacing(spacing).width(Length::Fill);

    for (key, column) in row.keys.iter().zip(column_widths(row)) {
        if let Some(control) = keyboard.control(&key.code) {
            row_widget = row_widget.push(render_key(control, column.to_length()));
        }
    }

    row_widget.into()
}
