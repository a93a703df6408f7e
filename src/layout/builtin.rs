// SPDX-License-Identifier: GPL-3.0-only

//! The built-in US-like layout.
//!
//! Five rows: number row with shifted symbols, the QWERTY row, the home row,
//! the bottom letter row and a control row with Shift, Caps-Lock, Space,
//! Backspace and the five compact dead accent keys.
//!
//! The semicolon key appears on both the home row and the bottom row with the
//! same code. Both slots bind to one control in the widget.

use crate::input::accent::accent_mark;
use crate::layout::types::{Accent, ControlKey, Key, KeyKind, Layout, Modifier, Row};

/// Layout name reported for the built-in table.
pub const BUILTIN_LAYOUT_NAME: &str = "US";

/// Code shared by both semicolon slots.
pub const SEMICOLON_CODE: &str = "semicolon";

const NUMBER_ROW: [(&str, &str, &str); 12] = [
    ("back_quote", "`", "~"),
    ("1", "1", "!"),
    ("2", "2", "@"),
    ("3", "3", "#"),
    ("4", "4", "$"),
    ("5", "5", "%"),
    ("6", "6", "^"),
    ("7", "7", "&"),
    ("8", "8", "*"),
    ("9", "9", "("),
    ("0", "0", ")"),
    ("minus", "-", "_"),
];

const TOP_ROW: [(&str, &str, &str); 12] = [
    ("q", "q", "Q"),
    ("w", "w", "W"),
    ("e", "e", "E"),
    ("r", "r", "R"),
    ("t", "t", "T"),
    ("y", "y", "Y"),
    ("u", "u", "U"),
    ("i", "i", "I"),
    ("o", "o", "O"),
    ("p", "p", "P"),
    ("brace_left", "[", "{"),
    ("brace_right", "]", "}"),
];

const HOME_ROW: [(&str, &str, &str); 12] = [
    ("a", "a", "A"),
    ("s", "s", "S"),
    ("d", "d", "D"),
    ("f", "f", "F"),
    ("g", "g", "G"),
    ("h", "h", "H"),
    ("j", "j", "J"),
    ("k", "k", "K"),
    ("l", "l", "L"),
    (SEMICOLON_CODE, ";", ":"),
    ("quote", "'", "\""),
    ("equals", "=", "+"),
];

const BOTTOM_ROW: [(&str, &str, &str); 12] = [
    ("z", "z", "Z"),
    ("x", "x", "X"),
    ("c", "c", "C"),
    ("v", "v", "V"),
    ("b", "b", "B"),
    ("n", "n", "N"),
    ("m", "m", "M"),
    ("comma", ",", "<"),
    ("period", ".", ">"),
    (SEMICOLON_CODE, ";", ":"),
    ("slash", "/", "?"),
    ("back_slash", "\\", "|"),
];

fn character_row(table: &[(&str, &str, &str)]) -> Row {
    Row::new(
        table
            .iter()
            .map(|(code, label, shift_label)| Key::character(code, label, shift_label))
            .collect(),
    )
}

fn control_row() -> Row {
    let dead_key = |code: &str, accent: Accent| {
        Key::plain(code, accent_mark(accent), KeyKind::Accent(accent)).with_width(0)
    };

    Row::new(vec![
        Key::plain("shift", "\u{21E7}", KeyKind::Modifier(Modifier::Shift)),
        Key::plain("caps_lock", "\u{21EA}", KeyKind::Modifier(Modifier::CapsLock)),
        Key::plain("space", " ", KeyKind::Character).with_width(4),
        Key::plain("backspace", "\u{232B}", KeyKind::Control(ControlKey::Backspace)),
        dead_key("dead_acute", Accent::Acute),
        dead_key("dead_grave", Accent::Grave),
        dead_key("dead_tilde", Accent::Tilde),
        dead_key("dead_circumflex", Accent::Circumflex),
        dead_key("dead_diaeresis", Accent::Diaeresis),
    ])
}

/// Builds the built-in five-row layout.
pub fn us_layout() -> Layout {
    Layout {
        name: BUILTIN_LAYOUT_NAME.to_string(),
        description: Some("US-like layout with dead accent keys".to_string()),
        rows: vec![
            character_row(&NUMBER_ROW),
            character_row(&TOP_ROW),
            character_row(&HOME_ROW),
            character_row(&BOTTOM_ROW),
            control_row(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::types::KeyCode;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_has_five_rows() {
        let layout = us_layout();
        assert_eq!(layout.rows.len(), 5);
        for row in &layout.rows[..4] {
            assert_eq!(row.keys.len(), 12);
            assert!(row.is_uniform(), "Character rows use equal columns");
        }
        assert_eq!(layout.rows[4].keys.len(), 9);
        assert!(!layout.rows[4].is_uniform());
    }

    #[test]
    fn test_semicolon_code_is_shared() {
        let layout = us_layout();
        let code = KeyCode::new(SEMICOLON_CODE);
        let slots = layout.keys().filter(|key| key.code == code).count();
        assert_eq!(slots, 2, "Semicolon occupies two layout slots");

        let distinct: HashSet<&KeyCode> = layout.keys().map(|key| &key.code).collect();
        assert_eq!(distinct.len(), layout.keys().count() - 1);
    }

    #[test]
    fn test_control_row_contents() {
        let layout = us_layout();
        let row = &layout.rows[4];

        assert_eq!(row.keys[0].kind, KeyKind::Modifier(Modifier::Shift));
        assert_eq!(row.keys[1].kind, KeyKind::Modifier(Modifier::CapsLock));
        assert_eq!(row.keys[2].label, " ");
        assert_eq!(row.keys[2].width, 4);
        assert_eq!(row.keys[3].kind, KeyKind::Control(ControlKey::Backspace));

        let accents: Vec<Accent> = row.keys[4..].iter().filter_map(Key::accent).collect();
        assert_eq!(accents, Accent::ALL.to_vec());
        assert!(row.keys[4..].iter().all(|key| key.width == 0));
    }

    #[test]
    fn test_letters_are_lowercase_with_uppercase_shift() {
        let layout = us_layout();
        let letters: Vec<&Key> = layout.keys().filter(|key| key.is_letter()).collect();
        assert_eq!(letters.len(), 26);
        for key in letters {
            assert_eq!(key.shift_label(), key.label.to_uppercase());
        }
    }
}
