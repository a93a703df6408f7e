// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard widget state.
//!
//! [`KeyboardWidget`] owns the layout, one [`KeyControl`] per distinct key
//! code, the modifier and accent state, and the focus tracker. It applies
//! key activations to whichever text control the host reports as focused.

use std::collections::HashMap;

use crate::focus::{FocusHost, FocusNotifier, FocusTracker, TargetId};
use crate::input::{Edit, KeyboardState};
use crate::layout::{Accent, Key, KeyCode, KeyKind, Layout, Modifier};
use crate::renderer::message::KeyboardMessage;

/// Visual state of one key control.
///
/// Every layout slot sharing the key's code renders from the same control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyControl {
    /// The key bound to this control
    pub key: Key,

    /// Glyph currently shown
    pub label: String,

    /// `true` for Shift and Caps-Lock, which render as toggles
    pub toggle: bool,

    /// Pressed look of a toggle control; always `false` for push controls
    pub selected: bool,
}

impl KeyControl {
    fn new(key: &Key) -> Self {
        Self {
            key: key.clone(),
            label: key.label.clone(),
            toggle: key.is_modifier(),
            selected: false,
        }
    }
}

/// An on-screen keyboard bound to a host's focused text control.
#[derive(Debug)]
pub struct KeyboardWidget {
    /// The loaded keyboard layout
    layout: Layout,

    /// One control per distinct key code
    controls: HashMap<KeyCode, KeyControl>,

    /// Modifier and pending accent state
    state: KeyboardState,

    /// Host focus observation
    focus: FocusTracker,
}

impl Default for KeyboardWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardWidget {
    /// Creates a widget with the built-in layout.
    pub fn new() -> Self {
        Self::build(Layout::default())
    }

    /// Creates a widget for `layout`.
    ///
    /// Slots with the same code bind to the first key seen with that code.
    pub fn build(layout: Layout) -> Self {
        let mut controls = HashMap::new();
        for key in layout.keys() {
            controls
                .entry(key.code.clone())
                .or_insert_with(|| KeyControl::new(key));
        }
        tracing::debug!(
            "Built keyboard '{}' with {} controls",
            layout.name,
            controls.len()
        );

        let mut widget = Self {
            layout,
            controls,
            state: KeyboardState::new(),
            focus: FocusTracker::new(),
        };
        widget.redraw();
        widget
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the control bound to `code`.
    pub fn control(&self, code: &KeyCode) -> Option<&KeyControl> {
        self.controls.get(code)
    }

    /// Number of distinct controls.
    pub fn control_count(&self) -> usize {
        self.controls.len()
    }

    pub fn state(&self) -> &KeyboardState {
        &self.state
    }

    pub fn shift(&self) -> bool {
        self.state.shift()
    }

    pub fn caps_lock(&self) -> bool {
        self.state.caps_lock()
    }

    pub fn pending_accent(&self) -> Option<Accent> {
        self.state.pending_accent
    }

    /// The focused text control, including reports not yet acted on.
    pub fn active_target(&mut self) -> Option<TargetId> {
        self.focus.active()
    }

    /// Sets the active target directly.
    pub fn set_active_target(&mut self, target: Option<TargetId>) {
        self.focus.set_active(target);
    }

    /// Returns a notifier the host uses to report focus changes.
    pub fn focus_notifier(&self) -> FocusNotifier {
        self.focus.notifier()
    }

    /// Handles a message from the rendered keyboard.
    pub fn update(&mut self, message: KeyboardMessage, host: &mut dyn FocusHost) {
        match message {
            KeyboardMessage::KeyPressed(code) => self.press(&code, host),
            KeyboardMessage::FocusChanged(target) => self.set_active_target(target),
        }
    }

    /// Activates the key bound to `code`. Unknown codes are ignored.
    pub fn press(&mut self, code: &KeyCode, host: &mut dyn FocusHost) {
        let Some(key) = self.controls.get(code).map(|control| control.key.clone()) else {
            tracing::debug!("Ignoring unknown key code '{}'", code);
            return;
        };
        self.activate(&key, host);
    }

    /// Activates `key` against the host's focused text control.
    ///
    /// Keys that produce text or delete do nothing when no editable target
    /// is focused. An edit the target rejects is logged and leaves both the
    /// target and the keyboard state unchanged.
    pub fn activate(&mut self, key: &Key, host: &mut dyn FocusHost) {
        let target = self.focus.active();
        tracing::debug!("Activate '{}' ({:?}) target={:?}", key.code, key.kind, target);

        if let Some(id) = target {
            host.request_focus(id);
        }

        if key.needs_text_target() {
            let editable = target.is_some_and(|id| host.text_target(id).is_some());
            if !editable {
                tracing::debug!("No editable target for '{}'", key.code);
                return;
            }
        }

        let transition = self.state.resolve(key);
        match &transition.edit {
            Edit::FocusNext => self.focus_next(target, host),
            edit if edit.changes_text() => {
                let Some(text) = target.and_then(|id| host.text_target(id)) else {
                    return;
                };
                if let Err(err) = edit.apply(text) {
                    tracing::debug!("Edit on {:?} rejected: {}", target, err);
                    return;
                }
            }
            _ => {}
        }

        let modifiers_changed = transition.next.modifiers != self.state.modifiers;
        self.state = transition.next;
        if modifiers_changed {
            self.redraw();
        }
    }

    fn focus_next(&mut self, current: Option<TargetId>, host: &mut dyn FocusHost) {
        let Some(next) = current.and_then(|id| host.next_focusable(id)) else {
            tracing::debug!("No focusable control after {:?}", current);
            return;
        };
        host.request_focus(next);
        self.focus.set_active(Some(next));
    }

    /// Recomputes every control's label and toggle selection from state.
    pub fn redraw(&mut self) {
        let state = &self.state;
        for control in self.controls.values_mut() {
            control.label = state.display_label(&control.key).to_string();
            control.selected = match control.key.kind {
                KeyKind::Modifier(modifier) => state.is_engaged(modifier),
                _ => false,
            };
        }
        tracing::trace!(
            "Redraw: shift={} caps_lock={}",
            state.is_engaged(Modifier::Shift),
            state.is_engaged(Modifier::CapsLock)
        );
    }
}

// ============================================================================
// Tests
// ============================================================================
