// SPDX-License-Identifier: GPL-3.0-only

//! Key activation rules.
//!
//! [`KeyboardState::resolve`] turns one key activation into an [`Edit`] and
//! the state that follows it. Nothing is committed here: the widget applies
//! the edit to its text target and only then adopts the next state, so a
//! failed edit leaves both target and keyboard untouched.

use crate::input::accent::compose;
use crate::input::modifier::ModifierState;
use crate::input::target::{delete_before_caret, insert_at_caret, EditError, TextTarget};
use crate::layout::{Accent, ControlKey, Key, KeyKind, Modifier};

/// Modifier and dead-accent state of the keyboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    /// Engaged Shift / Caps-Lock
    pub modifiers: ModifierState,

    /// Accent waiting for the next vowel
    pub pending_accent: Option<Accent>,
}

/// Effect of one key activation on the text target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// No change to the target
    Nothing,
    /// Insert text at the caret
    Insert(String),
    /// Delete the character before the caret
    DeleteBackward,
    /// Move focus to the next focusable control
    FocusNext,
}

impl Edit {
    /// Applies the edit to `target`.
    ///
    /// `Nothing` and `FocusNext` leave the target alone; focus moves are
    /// carried out by the host.
    pub fn apply(&self, target: &mut dyn TextTarget) -> Result<(), EditError> {
        match self {
            Edit::Insert(text) => insert_at_caret(target, text),
            Edit::DeleteBackward => delete_before_caret(target).map(|_| ()),
            Edit::Nothing | Edit::FocusNext => Ok(()),
        }
    }

    /// Returns `true` if the edit touches the text target.
    pub fn changes_text(&self) -> bool {
        matches!(self, Edit::Insert(_) | Edit::DeleteBackward)
    }
}

/// An edit together with the state it leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub edit: Edit,
    pub next: KeyboardState,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if Shift is engaged.
    pub fn shift(&self) -> bool {
        self.modifiers.shift()
    }

    /// Returns `true` if Caps-Lock is engaged.
    pub fn caps_lock(&self) -> bool {
        self.modifiers.caps_lock()
    }

    /// Glyph a key currently shows.
    ///
    /// Letters follow Shift or Caps-Lock, other keys follow Shift only.
    pub fn display_label<'a>(&self, key: &'a Key) -> &'a str {
        if self.shift() || (self.caps_lock() && key.is_letter()) {
            key.shift_label()
        } else {
            &key.label
        }
    }

    /// Computes the effect of activating `key`.
    ///
    /// The caller is responsible for skipping keys that need a text target
    /// when none is active (see [`Key::needs_text_target`]).
    pub fn resolve(&self, key: &Key) -> Transition {
        let mut next = self.clone();
        let edit = match key.kind {
            KeyKind::Modifier(modifier) => {
                let engaged = next.modifiers.toggle(modifier);
                tracing::debug!("{:?} {}", modifier, if engaged { "engaged" } else { "released" });
                Edit::Nothing
            }
            KeyKind::Control(ControlKey::Backspace) => Edit::DeleteBackward,
            KeyKind::Control(ControlKey::Tab) => Edit::FocusNext,
            KeyKind::Accent(accent) => {
                if let Some(previous) = next.pending_accent.replace(accent) {
                    tracing::debug!("Accent {:?} replaced by {:?}", previous, accent);
                }
                Edit::Nothing
            }
            KeyKind::Character => Edit::Insert(next.produce(key)),
        };
        Transition { edit, next }
    }

    /// Text produced by a character key, updating accent and Shift state.
    fn produce(&mut self, key: &Key) -> String {
        let upper = self.caps_lock() || self.shift();
        let pending = self.pending_accent.take();

        let text = if key.is_letter() {
            let composed = pending.and_then(|accent| compose(accent, &key.label));
            if let (Some(accent), None) = (pending, composed) {
                tracing::debug!("Dropped accent {:?} before '{}'", accent, key.label);
            }
            let base = composed.unwrap_or(key.label.as_str());
            if upper {
                base.to_uppercase()
            } else {
                base.to_string()
            }
        } else {
            if let Some(accent) = pending {
                tracing::debug!("Dropped accent {:?} before '{}'", accent, key.label);
            }
            if self.caps_lock() {
                key.label.to_uppercase()
            } else if self.shift() {
                key.shift_label().to_string()
            } else {
                key.label.clone()
            }
        };

        // Casing is decided above; Shift goes whether or not Caps-Lock is on.
        self.modifiers.clear_oneshot();
        text
    }

    /// Returns the engaged state of `modifier`.
    pub fn is_engaged(&self, modifier: Modifier) -> bool {
        self.modifiers.is_active(modifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::target::TextField;

    fn letter(c: &str) -> Key {
        Key::character(c, c, &c.to_uppercase())
    }

    fn shift() -> Key {
        Key::plain("shift", "\u{21E7}", KeyKind::Modifier(Modifier::Shift))
    }

    fn caps() -> Key {
        Key::plain("caps_lock", "\u{21EA}", KeyKind::Modifier(Modifier::CapsLock))
    }

    fn dead(accent: Accent) -> Key {
        Key::plain("dead", "'", KeyKind::Accent(accent))
    }

    /// Resolves a sequence of keys and returns the concatenated insertions.
    fn type_keys(state: &mut KeyboardState, keys: &[Key]) -> String {
        let mut field = TextField::new();
        for key in keys {
            let transition = state.resolve(key);
            transition.edit.apply(&mut field).unwrap();
            *state = transition.next;
        }
        field.text().to_string()
    }

    #[test]
    fn test_plain_letters() {
        let mut state = KeyboardState::new();
        assert_eq!(type_keys(&mut state, &[letter("h"), letter("i")]), "hi");
        assert_eq!(state, KeyboardState::default());
    }

    #[test]
    fn test_shift_is_one_shot() {
        let mut state = KeyboardState::new();
        let text = type_keys(&mut state, &[shift(), letter("e"), letter("e")]);
        assert_eq!(text, "Ee");
        assert!(!state.shift());
    }

    #[test]
    fn test_caps_lock_is_sticky() {
        let mut state = KeyboardState::new();
        let text = type_keys(&mut state, &[caps(), letter("a"), letter("b")]);
        assert_eq!(text, "AB");
        assert!(state.caps_lock());
    }

    /// Shift is released even though Caps-Lock already uppercased the letter
    #[test]
    fn test_shift_released_under_caps() {
        let mut state = KeyboardState::new();
        let text = type_keys(&mut state, &[caps(), shift(), letter("a"), letter("b")]);
        assert_eq!(text, "AB");
        assert!(!state.shift());
        assert!(state.caps_lock());
    }

    #[test]
    fn test_symbol_rules() {
        let one = Key::character("1", "1", "!");

        let mut state = KeyboardState::new();
        assert_eq!(type_keys(&mut state, &[shift(), one.clone(), one.clone()]), "!1");

        let mut state = KeyboardState::new();
        assert_eq!(
            type_keys(&mut state, &[caps(), one.clone()]),
            "1",
            "Caps-Lock does not shift symbols"
        );

        let mut state = KeyboardState::new();
        assert_eq!(type_keys(&mut state, &[caps(), shift(), one]), "1");
        assert!(!state.shift());
    }

    #[test]
    fn test_accent_composition() {
        let mut state = KeyboardState::new();
        assert_eq!(type_keys(&mut state, &[dead(Accent::Acute), letter("a")]), "á");
        assert_eq!(state.pending_accent, None);

        let mut state = KeyboardState::new();
        assert_eq!(type_keys(&mut state, &[dead(Accent::Tilde), letter("e")]), "ẽ");
    }

    #[test]
    fn test_accent_with_shift_uppercases_composed() {
        let mut state = KeyboardState::new();
        let text = type_keys(&mut state, &[dead(Accent::Diaeresis), shift(), letter("u")]);
        assert_eq!(text, "Ü");
    }

    #[test]
    fn test_unmatched_accent_is_dropped() {
        let mut state = KeyboardState::new();
        assert_eq!(type_keys(&mut state, &[dead(Accent::Circumflex), letter("k")]), "k");
        assert_eq!(state.pending_accent, None);
    }

    #[test]
    fn test_symbol_discards_accent() {
        let mut state = KeyboardState::new();
        let comma = Key::character("comma", ",", "<");
        let text = type_keys(&mut state, &[dead(Accent::Grave), comma, letter("a")]);
        assert_eq!(text, ",a");
    }

    #[test]
    fn test_later_accent_replaces_earlier() {
        let mut state = KeyboardState::new();
        let text = type_keys(&mut state, &[dead(Accent::Acute), dead(Accent::Grave), letter("o")]);
        assert_eq!(text, "ò");
    }

    #[test]
    fn test_modifiers_and_controls_keep_pending_accent() {
        let state = KeyboardState {
            pending_accent: Some(Accent::Acute),
            ..KeyboardState::default()
        };

        let after_caps = state.resolve(&caps()).next;
        assert_eq!(after_caps.pending_accent, Some(Accent::Acute));

        let backspace = Key::plain("backspace", "\u{232B}", KeyKind::Control(ControlKey::Backspace));
        let transition = state.resolve(&backspace);
        assert_eq!(transition.edit, Edit::DeleteBackward);
        assert_eq!(transition.next.pending_accent, Some(Accent::Acute));

        let tab = Key::plain("tab", "Tab", KeyKind::Control(ControlKey::Tab));
        let transition = state.resolve(&tab);
        assert_eq!(transition.edit, Edit::FocusNext);
        assert!(!transition.edit.changes_text());
    }

    #[test]
    fn test_resolve_does_not_mutate_self() {
        let state = KeyboardState::new();
        let transition = state.resolve(&shift());
        assert!(!state.shift());
        assert!(transition.next.shift());
    }

    #[test]
    fn test_display_label() {
        let q = letter("q");
        let one = Key::character("1", "1", "!");
        let mut state = KeyboardState::new();
        assert_eq!(state.display_label(&q), "q");

        state.modifiers.toggle(Modifier::CapsLock);
        assert_eq!(state.display_label(&q), "Q");
        assert_eq!(state.display_label(&one), "1");

        state.modifiers.toggle(Modifier::Shift);
        assert_eq!(state.display_label(&one), "!");

        state.modifiers.toggle(Modifier::Shift);
        assert_eq!(state.display_label(&q), "Q", "Caps-Lock still upper-cases letters");
        assert_eq!(state.display_label(&one), "1");

        state.modifiers.toggle(Modifier::CapsLock);
        assert_eq!(state.display_label(&q), "q");
        assert!(!state.is_engaged(Modifier::CapsLock));
    }
}
