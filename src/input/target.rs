// SPDX-License-Identifier: GPL-3.0-only

//! Text targets and caret-based editing.
//!
//! A [`TextTarget`] is whatever text control currently receives the
//! keyboard's output. Offsets are counted in characters, not bytes.

use std::fmt;

/// Error raised when an edit refers to an offset outside the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The caret offset is past the end of the text
    OffsetOutOfRange {
        /// Requested offset in characters
        offset: usize,
        /// Length of the text in characters
        len: usize,
    },
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::OffsetOutOfRange { offset, len } => {
                write!(f, "offset {} is out of range for text of length {}", offset, len)
            }
        }
    }
}

impl std::error::Error for EditError {}

/// A caret-based editable text control.
pub trait TextTarget {
    /// Current text content.
    fn text(&self) -> &str;

    /// Current caret offset in characters.
    fn caret(&self) -> usize;

    /// Replaces the whole content.
    fn set_text(&mut self, text: String);

    /// Moves the caret.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::OffsetOutOfRange`] if `offset` is past the end.
    fn set_caret(&mut self, offset: usize) -> Result<(), EditError>;
}

/// Converts a character offset into a byte index of `text`.
fn byte_index(text: &str, offset: usize) -> Result<usize, EditError> {
    if offset == 0 {
        return Ok(0);
    }
    text.char_indices()
        .map(|(index, _)| index)
        .chain(std::iter::once(text.len()))
        .nth(offset)
        .ok_or(EditError::OffsetOutOfRange {
            offset,
            len: text.chars().count(),
        })
}

/// Replaces the target's text and moves its caret to `caret`.
///
/// If the target rejects the caret, the previous text and caret are put
/// back before the error is returned.
fn replace_text(
    target: &mut dyn TextTarget,
    updated: String,
    caret: usize,
) -> Result<(), EditError> {
    let previous_text = target.text().to_string();
    let previous_caret = target.caret();

    target.set_text(updated);
    if let Err(err) = target.set_caret(caret) {
        target.set_text(previous_text);
        if let Err(restore) = target.set_caret(previous_caret) {
            tracing::debug!("Caret not restored after failed edit: {}", restore);
        }
        return Err(err);
    }
    Ok(())
}

/// Inserts `insert` at the caret and advances the caret past it.
///
/// On error the target's text is left as it was.
///
/// # Errors
///
/// Returns [`EditError::OffsetOutOfRange`] if the target's caret is past
/// the end of its text, or if the target rejects the new caret.
pub fn insert_at_caret(target: &mut dyn TextTarget, insert: &str) -> Result<(), EditError> {
    let caret = target.caret();
    let text = target.text();
    let index = byte_index(text, caret)?;

    let mut updated = String::with_capacity(text.len() + insert.len());
    updated.push_str(&text[..index]);
    updated.push_str(insert);
    updated.push_str(&text[index..]);

    replace_text(target, updated, caret + insert.chars().count())
}

/// Deletes the character before the caret and moves the caret back by one.
///
/// Does nothing when the text is empty or the caret is at 0. On error the
/// target's text is left as it was.
///
/// # Returns
///
/// `true` if a character was deleted
///
/// # Errors
///
/// Returns [`EditError::OffsetOutOfRange`] if the target's caret is past
/// the end of its text, or if the target rejects the new caret.
pub fn delete_before_caret(target: &mut dyn TextTarget) -> Result<bool, EditError> {
    let caret = target.caret();
    let text = target.text();
    if text.is_empty() || caret == 0 {
        return Ok(false);
    }

    let end = byte_index(text, caret)?;
    let start = byte_index(text, caret - 1)?;

    let mut updated = String::with_capacity(text.len());
    updated.push_str(&text[..start]);
    updated.push_str(&text[end..]);

    replace_text(target, updated, caret - 1)?;
    Ok(true)
}

/// A plain single-line text field.
///
/// Used by the demo application and by tests; hosts with their own text
/// controls implement [`TextTarget`] on those instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    caret: usize,
}

impl TextField {
    /// Creates an empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a field holding `text` with the caret at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = text.chars().count();
        Self { text, caret }
    }
}

impl TextTarget for TextField {
    fn text(&self) -> &str {
        &self.text
    }

    fn caret(&self) -> usize {
        self.caret
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
        self.caret = self.caret.min(self.text.chars().count());
    }

    fn set_caret(&mut self, offset: usize) -> Result<(), EditError> {
        let len = self.text.chars().count();
        if offset > len {
            return Err(EditError::OffsetOutOfRange { offset, len });
        }
        self.caret = offset;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A target whose caret can be left dangling past the end of the text.
    struct DanglingCaret {
        text: String,
        caret: usize,
    }

    impl TextTarget for DanglingCaret {
        fn text(&self) -> &str {
            &self.text
        }

        fn caret(&self) -> usize {
            self.caret
        }

        fn set_text(&mut self, text: String) {
            self.text = text;
        }

        fn set_caret(&mut self, offset: usize) -> Result<(), EditError> {
            self.caret = offset;
            Ok(())
        }
    }

    /// A target that accepts new text but refuses every caret move.
    struct FrozenCaret {
        text: String,
        caret: usize,
    }

    impl TextTarget for FrozenCaret {
        fn text(&self) -> &str {
            &self.text
        }

        fn caret(&self) -> usize {
            self.caret
        }

        fn set_text(&mut self, text: String) {
            self.text = text;
        }

        fn set_caret(&mut self, offset: usize) -> Result<(), EditError> {
            Err(EditError::OffsetOutOfRange {
                offset,
                len: self.text.chars().count(),
            })
        }
    }

    #[test]
    fn test_insert_at_end() {
        let mut field = TextField::with_text("foo");
        insert_at_caret(&mut field, "x").unwrap();
        assert_eq!(field.text(), "foox");
        assert_eq!(field.caret(), 4);
    }

    #[test]
    fn test_insert_in_middle_and_multibyte() {
        let mut field = TextField::with_text("açb");
        field.set_caret(2).unwrap();
        insert_at_caret(&mut field, "é").unwrap();
        assert_eq!(field.text(), "açéb");
        assert_eq!(field.caret(), 3);
    }

    #[test]
    fn test_insert_advances_by_char_count() {
        let mut field = TextField::new();
        insert_at_caret(&mut field, "SS").unwrap();
        assert_eq!(field.caret(), 2);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut field = TextField::with_text("abc");
        field.set_caret(0).unwrap();
        assert!(!delete_before_caret(&mut field).unwrap());
        assert_eq!(field.text(), "abc");
        assert_eq!(field.caret(), 0);

        let mut empty = TextField::new();
        assert!(!delete_before_caret(&mut empty).unwrap());
    }

    #[test]
    fn test_backspace_removes_previous_char() {
        let mut field = TextField::with_text("aéb");
        field.set_caret(2).unwrap();
        assert!(delete_before_caret(&mut field).unwrap());
        assert_eq!(field.text(), "ab");
        assert_eq!(field.caret(), 1);
    }

    #[test]
    fn test_out_of_range_caret_leaves_target_untouched() {
        let mut target = DanglingCaret {
            text: "ab".to_string(),
            caret: 5,
        };

        let err = insert_at_caret(&mut target, "x").unwrap_err();
        assert_eq!(err, EditError::OffsetOutOfRange { offset: 5, len: 2 });
        assert_eq!(target.text, "ab");

        assert!(delete_before_caret(&mut target).is_err());
        assert_eq!(target.text, "ab");
        assert_eq!(target.caret, 5);
    }

    #[test]
    fn test_rejected_caret_restores_text() {
        let mut target = FrozenCaret {
            text: "ab".to_string(),
            caret: 1,
        };

        let err = insert_at_caret(&mut target, "x").unwrap_err();
        assert_eq!(err, EditError::OffsetOutOfRange { offset: 2, len: 3 });
        assert_eq!(target.text, "ab");
        assert_eq!(target.caret, 1);

        assert!(delete_before_caret(&mut target).is_err());
        assert_eq!(target.text, "ab");
        assert_eq!(target.caret, 1);
    }

    #[test]
    fn test_text_field_rejects_bad_caret() {
        let mut field = TextField::with_text("ab");
        assert!(field.set_caret(3).is_err());
        assert_eq!(field.caret(), 2);
    }
}
