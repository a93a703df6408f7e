// SPDX-License-Identifier: GPL-3.0-only

//! Modifier state management for keyboard input.
//!
//! Tracks which toggle modifiers are engaged. Two behaviors exist:
//!
//! - **One-shot**: released after the next produced character (Shift)
//! - **Sticky**: stays engaged until toggled again (Caps-Lock)
//!
//! # Example
//!
//! ```rust,ignore
//! use virtboard::input::ModifierState;
//! use virtboard::layout::Modifier;
//!
//! let mut state = ModifierState::new();
//! state.toggle(Modifier::Shift);
//! // ... a character is produced ...
//! state.clear_oneshot();
//! assert!(!state.is_active(Modifier::Shift));
//! ```

use crate::layout::Modifier;
use std::collections::HashSet;

/// Tracks the engaged modifiers and which of them are one-shot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifierState {
    /// Set of currently engaged modifiers
    active: HashSet<Modifier>,

    /// Set of engaged modifiers released after the next character
    oneshot: HashSet<Modifier>,
}

impl ModifierState {
    /// Creates a new `ModifierState` with no engaged modifiers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: HashSet::new(),
            oneshot: HashSet::new(),
        }
    }

    /// Returns `true` for modifiers released after one character.
    #[must_use]
    pub fn is_oneshot_modifier(modifier: Modifier) -> bool {
        matches!(modifier, Modifier::Shift)
    }

    /// Engages a modifier with its natural release behavior.
    pub fn activate(&mut self, modifier: Modifier) {
        self.active.insert(modifier);

        if Self::is_oneshot_modifier(modifier) {
            self.oneshot.insert(modifier);
        } else {
            self.oneshot.remove(&modifier);
        }
    }

    /// Releases a modifier.
    pub fn deactivate(&mut self, modifier: Modifier) {
        self.active.remove(&modifier);
        self.oneshot.remove(&modifier);
    }

    /// Toggles a modifier's state.
    ///
    /// # Returns
    ///
    /// `true` if the modifier is now engaged, `false` if it is now released
    pub fn toggle(&mut self, modifier: Modifier) -> bool {
        if self.active.contains(&modifier) {
            self.deactivate(modifier);
            false
        } else {
            self.activate(modifier);
            true
        }
    }

    /// Checks if a modifier is currently engaged.
    #[must_use]
    pub fn is_active(&self, modifier: Modifier) -> bool {
        self.active.contains(&modifier)
    }

    /// Returns `true` if Shift is engaged.
    #[must_use]
    pub fn shift(&self) -> bool {
        self.is_active(Modifier::Shift)
    }

    /// Returns `true` if Caps-Lock is engaged.
    #[must_use]
    pub fn caps_lock(&self) -> bool {
        self.is_active(Modifier::CapsLock)
    }

    /// Releases all one-shot modifiers.
    ///
    /// Called after a character has been produced. Sticky modifiers stay
    /// engaged.
    ///
    /// # Returns
    ///
    /// `true` if at least one modifier was released
    pub fn clear_oneshot(&mut self) -> bool {
        let released = !self.oneshot.is_empty();
        for modifier in self.oneshot.drain() {
            self.active.remove(&modifier);
        }
        released
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_deactivate() {
        let mut state = ModifierState::new();

        state.activate(Modifier::Shift);
        assert!(state.is_active(Modifier::Shift));
        assert!(state.shift());

        state.deactivate(Modifier::Shift);
        assert!(!state.is_active(Modifier::Shift));
    }

    #[test]
    fn test_toggle() {
        let mut state = ModifierState::new();

        assert!(state.toggle(Modifier::CapsLock));
        assert!(state.caps_lock());

        assert!(!state.toggle(Modifier::CapsLock));
        assert!(!state.caps_lock());
    }

    /// Shift is released by clear_oneshot, Caps-Lock is not
    #[test]
    fn test_clear_oneshot_keeps_caps_lock() {
        let mut state = ModifierState::new();
        state.toggle(Modifier::Shift);
        state.toggle(Modifier::CapsLock);

        assert!(state.clear_oneshot(), "Shift should be released");
        assert!(!state.shift());
        assert!(state.caps_lock(), "Caps-Lock is sticky");

        assert!(!state.clear_oneshot(), "Nothing left to release");
        assert!(state.caps_lock());
    }

    #[test]
    fn test_toggling_back_restores_default() {
        let mut state = ModifierState::new();
        state.toggle(Modifier::Shift);
        state.toggle(Modifier::CapsLock);
        state.toggle(Modifier::Shift);
        state.toggle(Modifier::CapsLock);

        assert_eq!(state, ModifierState::default());
    }
}
