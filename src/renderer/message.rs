// SPDX-License-Identifier: GPL-3.0-only

//! Messages emitted by the rendered keyboard.

use crate::focus::TargetId;
use crate::layout::KeyCode;

/// Messages handled by [`KeyboardWidget::update`](crate::renderer::KeyboardWidget::update).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyboardMessage {
    /// A key control was clicked. Contains the key code.
    KeyPressed(KeyCode),

    /// The host's focused control changed.
    FocusChanged(Option<TargetId>),
}
