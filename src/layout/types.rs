// SPDX-License-Identifier: GPL-3.0-only

//! Core data types for keyboard layouts.
//!
//! This module defines the key and layout data model together with the error
//! and validation types used when layouts are loaded from JSON.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

// ============================================================================
// Error Handling Types
// ============================================================================

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal error that prevents layout from being used
    Error,
    /// Non-fatal issue that should be addressed
    Warning,
}

/// A validation issue discovered while checking a layout.
///
/// Contains the severity, the path of the offending field and an optional
/// suggestion for fixing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Severity level (Error or Warning)
    pub severity: Severity,
    /// Human-readable description of the issue
    pub message: String,
    /// Path to the field that caused the issue (e.g., "rows[3].keys[9]")
    pub field_path: String,
    /// Optional suggestion for how to fix the issue
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Creates a new validation issue.
    pub fn new(
        severity: Severity,
        message: impl Into<String>,
        field_path: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            field_path: field_path.into(),
            suggestion: None,
        }
    }

    /// Creates a warning-level issue.
    pub fn warning(message: impl Into<String>, field_path: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message, field_path)
    }

    /// Creates an error-level issue.
    pub fn error(message: impl Into<String>, field_path: impl Into<String>) -> Self {
        Self::new(Severity::Error, message, field_path)
    }

    /// Adds a suggestion to the validation issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity_str = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
        };

        write!(f, "[{}] {}: {}", severity_str, self.field_path, self.message)?;

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }

        Ok(())
    }
}

/// Error type for layout loading operations.
///
/// Each variant carries the file path (when known) and a suggestion so the
/// message shown to the user points at the fix.
#[derive(Debug)]
pub enum ParseError {
    /// I/O error occurred while reading layout file
    IoError {
        /// The underlying I/O error
        source: std::io::Error,
        /// Optional file path that caused the error
        file_path: Option<String>,
        /// Optional suggestion for fixing the error
        suggestion: Option<String>,
    },

    /// JSON parsing error
    JsonError {
        /// The underlying JSON parsing error
        source: serde_json::Error,
        /// Optional file path being parsed
        file_path: Option<String>,
        /// Line number where the error occurred (from serde_json)
        line_number: Option<usize>,
        /// Optional suggestion for fixing the error
        suggestion: Option<String>,
    },

    /// Fatal validation errors found after parsing
    ValidationError {
        /// List of validation issues found
        issues: Vec<ValidationIssue>,
        /// Optional file path being validated
        file_path: Option<String>,
    },
}

impl ParseError {
    /// Creates an I/O error with file path.
    pub fn io_error_with_path(source: std::io::Error, file_path: impl Into<String>) -> Self {
        Self::IoError {
            source,
            file_path: Some(file_path.into()),
            suggestion: Some("Check that the file exists and you have read permissions".into()),
        }
    }

    /// Creates a JSON parsing error with context.
    pub fn json_error(source: serde_json::Error) -> Self {
        let line_number = Some(source.line()).filter(|line| *line > 0);
        Self::JsonError {
            source,
            file_path: None,
            line_number,
            suggestion: Some("Check the JSON syntax at the indicated line".into()),
        }
    }

    /// Creates a JSON parsing error with file path.
    pub fn json_error_with_path(source: serde_json::Error, file_path: impl Into<String>) -> Self {
        let line_number = Some(source.line()).filter(|line| *line > 0);
        Self::JsonError {
            source,
            file_path: Some(file_path.into()),
            line_number,
            suggestion: Some("Check the JSON syntax at the indicated line".into()),
        }
    }

    /// Creates a validation error from a list of issues.
    pub fn validation_error(issues: Vec<ValidationIssue>) -> Self {
        Self::ValidationError {
            issues,
            file_path: None,
        }
    }

    /// Attaches a file path to the error if it does not carry one yet.
    pub fn with_path(self, path: impl Into<String>) -> Self {
        match self {
            Self::ValidationError {
                issues,
                file_path: None,
            } => Self::ValidationError {
                issues,
                file_path: Some(path.into()),
            },
            other => other,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::IoError {
                source,
                file_path,
                suggestion,
            } => {
                write!(f, "I/O error")?;
                if let Some(path) = file_path {
                    write!(f, " reading file '{}'", path)?;
                }
                write!(f, ": {}", source)?;
                if let Some(hint) = suggestion {
                    write!(f, "\n  Suggestion: {}", hint)?;
                }
            }
            ParseError::JsonError {
                source,
                file_path,
                line_number,
                suggestion,
            } => {
                write!(f, "JSON parsing error")?;
                if let Some(path) = file_path {
                    write!(f, " in file '{}'", path)?;
                }
                if let Some(line) = line_number {
                    write!(f, " at line {}", line)?;
                }
                write!(f, ": {}", source)?;
                if let Some(hint) = suggestion {
                    write!(f, "\n  Suggestion: {}", hint)?;
                }
            }
            ParseError::ValidationError { issues, file_path } => {
                write!(f, "Validation failed")?;
                if let Some(path) = file_path {
                    write!(f, " for file '{}'", path)?;
                }
                writeln!(f, " with {} issue(s):", issues.len())?;
                for (i, issue) in issues.iter().enumerate() {
                    write!(f, "  {}. {}", i + 1, issue)?;
                    if i + 1 < issues.len() {
                        writeln!(f)?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::IoError { source, .. } => Some(source),
            ParseError::JsonError { source, .. } => Some(source),
            ParseError::ValidationError { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::json_error(err)
    }
}

// ============================================================================
// ParseResult Type
// ============================================================================

/// Result of successfully loading a layout with optional warnings.
///
/// Loading is permissive: a usable layout is returned even when non-fatal
/// validation issues are found.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult<T> {
    /// The successfully parsed layout
    pub layout: T,
    /// Non-fatal validation warnings
    pub warnings: Vec<ValidationIssue>,
}

impl<T> ParseResult<T> {
    /// Creates a new parse result with warnings.
    pub fn with_warnings(layout: T, warnings: Vec<ValidationIssue>) -> Self {
        Self { layout, warnings }
    }

    /// Returns true if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Consumes the result and returns the layout, discarding warnings.
    pub fn into_layout(self) -> T {
        self.layout
    }
}

// ============================================================================
// Key Data Structures
// ============================================================================

/// Opaque identifier of a key.
///
/// Two keys are the same key exactly when their codes are equal; the widget
/// binds every layout slot with a given code to a single control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(String);

impl KeyCode {
    /// Creates a key code from any string-like identifier.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KeyCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Toggle modifiers available on the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    /// One-shot shift, released after the next produced character
    Shift,
    /// Sticky caps-lock, stays engaged until toggled off
    CapsLock,
}

/// Keys that edit or navigate instead of producing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKey {
    /// Delete the character before the caret
    Backspace,
    /// Move focus to the next focusable control
    Tab,
}

/// Dead accent keys that combine with the next vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    /// ´
    Acute,
    /// `
    Grave,
    /// ~
    Tilde,
    /// ^
    Circumflex,
    /// ¨
    Diaeresis,
}

impl Accent {
    /// All accents in layout order.
    pub const ALL: [Accent; 5] = [
        Accent::Acute,
        Accent::Grave,
        Accent::Tilde,
        Accent::Circumflex,
        Accent::Diaeresis,
    ];
}

/// What a key does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    /// Produces its label (or shifted label) as text
    #[default]
    Character,
    /// Toggles a modifier
    Modifier(Modifier),
    /// Performs an edit or navigation
    Control(ControlKey),
    /// Buffers an accent for the next vowel
    Accent(Accent),
}

/// Default value for the `width` field.
fn default_width() -> u16 {
    1
}

/// A keyboard key definition.
///
/// `label` is shown and inserted with no modifier engaged; `shift_label` is
/// used while Shift (or, for letters, Caps-Lock) is engaged and defaults to
/// `label` when the key has no shifted form.
///
/// Equality and hashing consider only `code`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Key {
    /// Stable identifier of the key
    pub code: KeyCode,

    /// Glyph shown and inserted without modifiers
    pub label: String,

    /// Glyph shown and inserted with Shift engaged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_label: Option<String>,

    /// Behavior on activation
    #[serde(default)]
    pub kind: KeyKind,

    /// Relative width inside the row; 0 renders the key as compact as possible
    #[serde(default = "default_width")]
    pub width: u16,
}

impl Key {
    /// Creates a character key with distinct base and shifted glyphs.
    pub fn character(code: &str, label: &str, shift_label: &str) -> Self {
        Self {
            code: KeyCode::new(code),
            label: label.to_string(),
            shift_label: (label != shift_label).then(|| shift_label.to_string()),
            kind: KeyKind::Character,
            width: 1,
        }
    }

    /// Creates a key of the given kind whose glyph does not change with Shift.
    pub fn plain(code: &str, label: &str, kind: KeyKind) -> Self {
        Self {
            code: KeyCode::new(code),
            label: label.to_string(),
            shift_label: None,
            kind,
            width: 1,
        }
    }

    /// Sets the width weight.
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Returns the shifted glyph, falling back to the base glyph.
    pub fn shift_label(&self) -> &str {
        self.shift_label.as_deref().unwrap_or(&self.label)
    }

    /// Returns `true` if the key shows a different glyph under Shift.
    pub fn has_alternate_glyph(&self) -> bool {
        self.label != self.shift_label()
    }

    /// Returns `true` if the base glyph is a single alphabetic character.
    pub fn is_letter(&self) -> bool {
        let mut chars = self.label.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
    }

    /// Returns the accent if this is a dead accent key.
    pub fn accent(&self) -> Option<Accent> {
        match self.kind {
            KeyKind::Accent(accent) => Some(accent),
            _ => None,
        }
    }

    /// Returns `true` if this is one of the dead accent keys.
    pub fn is_accent(&self) -> bool {
        self.accent().is_some()
    }

    /// Returns `true` if activating the key toggles a sticky state.
    pub fn is_modifier(&self) -> bool {
        matches!(self.kind, KeyKind::Modifier(_))
    }

    /// Returns `true` if the key does nothing without an editable text target.
    ///
    /// Modifiers and Tab work regardless of the focused control.
    pub fn needs_text_target(&self) -> bool {
        matches!(
            self.kind,
            KeyKind::Character | KeyKind::Accent(_) | KeyKind::Control(ControlKey::Backspace)
        )
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

/// An ordered row of keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Keys from left to right
    #[serde(default)]
    pub keys: Vec<Key>,
}

impl Row {
    /// Creates a row from its keys.
    pub fn new(keys: Vec<Key>) -> Self {
        Self { keys }
    }

    /// Returns `true` if every key in the row has width 1.
    pub fn is_uniform(&self) -> bool {
        self.keys.iter().all(|key| key.width == 1)
    }

    /// Sum of the width weights of the row.
    pub fn total_width(&self) -> u32 {
        self.keys.iter().map(|key| u32::from(key.width)).sum()
    }
}

/// A complete keyboard layout.
///
/// Rows are ordered top to bottom. A layout is immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Layout name
    pub name: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Rows from top to bottom
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Layout {
    /// Iterates every layout slot, duplicates included.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.rows.iter().flat_map(|row| row.keys.iter())
    }

    /// Finds the first key with the given code.
    pub fn find(&self, code: &KeyCode) -> Option<&Key> {
        self.keys().find(|key| &key.code == code)
    }

    /// Finds the first key toggling the given modifier.
    pub fn modifier_key(&self, modifier: Modifier) -> Option<&Key> {
        self.keys()
            .find(|key| key.kind == KeyKind::Modifier(modifier))
    }
}

impl Default for Layout {
    fn default() -> Self {
        crate::layout::builtin::us_layout()
    }
}

// ============================================================================
// Tests
// ============================================================================
