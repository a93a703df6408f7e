// SPDX-License-Identifier: GPL-3.0-only

//! Input handling for the Virtboard keyboard.
//!
//! This module turns key activations into edits of a text target.
//!
//! # Features
//!
//! - **Modifier state**: one-shot Shift and sticky Caps-Lock
//! - **Dead accents**: a pending accent composes with the next vowel
//! - **Text targets**: caret-based insertion and backspace on any [`TextTarget`]
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use virtboard::input::{KeyboardState, TextField, TextTarget};
//! use virtboard::layout::us_layout;
//!
//! let layout = us_layout();
//! let mut state = KeyboardState::new();
//! let mut field = TextField::new();
//!
//! for code in ["dead_acute", "e"] {
//!     let key = layout.find(&code.into()).unwrap();
//!     let transition = state.resolve(key);
//!     transition.edit.apply(&mut field).unwrap();
//!     state = transition.next;
//! }
//! assert_eq!(field.text(), "é");
//! ```

// Sub-modules
pub mod accent;
pub mod edit;
pub mod modifier;
pub mod target;

// Re-export public API
pub use accent::{accent_mark, compose};
pub use edit::{Edit, KeyboardState, Transition};
pub use modifier::ModifierState;
pub use target::{delete_before_caret, insert_at_caret, EditError, TextField, TextTarget};

// ============================================================================
// Module Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{us_layout, KeyCode};

    /// Types a sequence of built-in key codes into a fresh field.
    fn type_codes(codes: &[&str]) -> String {
        let layout = us_layout();
        let mut state = KeyboardState::new();
        let mut field = TextField::new();
        for code in codes {
            let key = layout.find(&KeyCode::new(*code)).unwrap();
            let transition = state.resolve(key);
            transition.edit.apply(&mut field).unwrap();
            state = transition.next;
        }
        field.text().to_string()
    }

    #[test]
    fn test_builtin_layout_typing() {
        assert_eq!(type_codes(&["h", "i", "space", "1"]), "hi 1");
        assert_eq!(type_codes(&["shift", "h", "i"]), "Hi");
        assert_eq!(type_codes(&["dead_circumflex", "o", "backspace", "a"]), "a");
        assert_eq!(type_codes(&["shift", "semicolon"]), ":");
    }

    #[test]
    fn test_builtin_accent_keys_compose() {
        assert_eq!(type_codes(&["dead_acute", "a"]), "á");
        assert_eq!(type_codes(&["dead_grave", "e"]), "è");
        assert_eq!(type_codes(&["dead_tilde", "o"]), "õ");
        assert_eq!(type_codes(&["dead_circumflex", "i"]), "î");
        assert_eq!(type_codes(&["dead_diaeresis", "u"]), "ü");
    }
}
