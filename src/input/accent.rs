// SPDX-License-Identifier: GPL-3.0-only

//! Dead accent composition.
//!
//! Each of the five accents combines with the vowels a, e, i, o and u into a
//! single precomposed character. The tilde row uses the precomposed forms
//! for e, i and u as well (ẽ, ĩ, ũ) even though they are rare in practice.

use crate::layout::Accent;

/// Composed characters indexed by vowel in the order a, e, i, o, u.
const fn vowel_row(accent: Accent) -> [&'static str; 5] {
    match accent {
        Accent::Acute => ["á", "é", "í", "ó", "ú"],
        Accent::Grave => ["à", "è", "ì", "ò", "ù"],
        Accent::Tilde => ["ã", "ẽ", "ĩ", "õ", "ũ"],
        Accent::Circumflex => ["â", "ê", "î", "ô", "û"],
        Accent::Diaeresis => ["ä", "ë", "ï", "ö", "ü"],
    }
}

fn vowel_index(vowel: &str) -> Option<usize> {
    match vowel {
        "a" => Some(0),
        "e" => Some(1),
        "i" => Some(2),
        "o" => Some(3),
        "u" => Some(4),
        _ => None,
    }
}

/// Composes `accent` with a letter glyph.
///
/// Returns `None` when the letter is not one of the five lowercase vowels;
/// the caller then falls back to the letter itself.
pub fn compose(accent: Accent, letter: &str) -> Option<&'static str> {
    vowel_index(letter).map(|index| vowel_row(accent)[index])
}

/// The glyph printed on the accent's key in the built-in layout.
pub fn accent_mark(accent: Accent) -> &'static str {
    match accent {
        Accent::Acute => "´",
        Accent::Grave => "`",
        Accent::Tilde => "~",
        Accent::Circumflex => "^",
        Accent::Diaeresis => "\"",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_samples() {
        assert_eq!(compose(Accent::Acute, "a"), Some("á"));
        assert_eq!(compose(Accent::Circumflex, "e"), Some("ê"));
        assert_eq!(compose(Accent::Diaeresis, "u"), Some("ü"));
        assert_eq!(compose(Accent::Tilde, "e"), Some("ẽ"));
        assert_eq!(compose(Accent::Grave, "o"), Some("ò"));
    }

    #[test]
    fn test_every_accent_and_vowel() {
        let expected = [
            (Accent::Acute, "áéíóú"),
            (Accent::Grave, "àèìòù"),
            (Accent::Tilde, "ãẽĩõũ"),
            (Accent::Circumflex, "âêîôû"),
            (Accent::Diaeresis, "äëïöü"),
        ];

        for (accent, row) in expected {
            let composed: String = ["a", "e", "i", "o", "u"]
                .into_iter()
                .filter_map(|vowel| compose(accent, vowel))
                .collect();
            assert_eq!(composed, row, "{:?} row", accent);
        }
    }

    /// Every accent has a single-character form for every vowel
    #[test]
    fn test_table_is_complete() {
        for accent in Accent::ALL {
            for vowel in ["a", "e", "i", "o", "u"] {
                let composed = compose(accent, vowel)
                    .unwrap_or_else(|| panic!("{:?} + {} should compose", accent, vowel));
                assert_eq!(
                    composed.chars().count(),
                    1,
                    "{:?} + {} should be one character",
                    accent,
                    vowel
                );
            }
        }
    }

    #[test]
    fn test_non_vowels_do_not_compose() {
        assert_eq!(compose(Accent::Circumflex, "k"), None);
        assert_eq!(compose(Accent::Acute, "y"), None);
        assert_eq!(compose(Accent::Acute, "A"), None, "Only lowercase glyphs compose");
        assert_eq!(compose(Accent::Acute, ""), None);
    }

    #[test]
    fn test_accent_marks_are_distinct() {
        let marks: std::collections::HashSet<&str> =
            Accent::ALL.iter().map(|a| accent_mark(*a)).collect();
        assert_eq!(marks.len(), 5);
    }
}
