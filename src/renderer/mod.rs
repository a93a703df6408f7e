// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard widget for Virtboard.
//!
//! This module holds the on-screen keyboard state and renders it with
//! libcosmic/Iced widgets.
//!
//! # Architecture
//!
//! - **state**: `KeyboardWidget` and its per-code `KeyControl`s.
//! - **key**: Individual key rendering.
//! - **row**: Equal or weighted column distribution of a row.
//! - **panel**: The whole keyboard as a column of rows.
//! - **message**: Messages emitted by the rendered keyboard.
//!
//! # Usage
//!
//! ```rust,ignore
//! use virtboard::renderer::{render_keyboard, KeyboardMessage, KeyboardWidget};
//!
//! let mut keyboard = KeyboardWidget::new();
//! let notifier = keyboard.focus_notifier();
//!
//! // In the host, whenever focus moves:
//! notifier.focus_changed(Some(field_id));
//!
//! // In view():
//! let element = render_keyboard(&keyboard, 4.0, 8.0).map(Message::Keyboard);
//!
//! // In update():
//! keyboard.update(message, &mut host);
//! ```
//!
//! Key controls are plain buttons and never take keyboard focus, so the
//! host's text control keeps its caret while the keyboard is clicked.

pub mod key;
pub mod message;
pub mod panel;
pub mod row;
pub mod state;

pub use key::render_key;
pub use message::KeyboardMessage;
pub use panel::render_keyboard;
pub use row::{column_widths, render_row, ColumnWidth};
pub use state::{KeyControl, KeyboardWidget};
