// SPDX-License-Identifier: GPL-3.0-only

//! Validation rules for keyboard layout definitions.
//!
//! Validation is permissive: problems that still leave a usable keyboard are
//! collected as warnings, only a layout without any key is rejected.

use crate::layout::types::{
    Key, KeyCode, Layout, Modifier, ParseError, ParseResult, ValidationIssue,
};
use std::collections::HashMap;

/// Validates a layout and returns it with warnings.
pub fn validate_layout(layout: Layout) -> Result<ParseResult<Layout>, ParseError> {
    if layout.keys().next().is_none() {
        return Err(ParseError::validation_error(vec![
            ValidationIssue::error("Layout contains no keys", "rows")
                .with_suggestion("Add at least one row with keys"),
        ]));
    }

    let mut warnings = Vec::new();

    validate_required_fields(&layout, &mut warnings);
    validate_row_widths(&layout, &mut warnings);
    validate_duplicate_codes(&layout, &mut warnings);
    validate_modifiers_present(&layout, &mut warnings);

    Ok(ParseResult::with_warnings(layout, warnings))
}

/// Checks names and labels.
pub fn validate_required_fields(layout: &Layout, warnings: &mut Vec<ValidationIssue>) {
    if layout.name.is_empty() {
        warnings.push(
            ValidationIssue::warning("Layout name is empty", "name")
                .with_suggestion("Provide a descriptive name for the layout"),
        );
    }

    for (row_idx, row) in layout.rows.iter().enumerate() {
        if row.keys.is_empty() {
            warnings.push(ValidationIssue::warning(
                "Row has no keys",
                format!("rows[{}]", row_idx),
            ));
        }

        for (key_idx, key) in row.keys.iter().enumerate() {
            let key_path = format!("rows[{}].keys[{}]", row_idx, key_idx);
            validate_key(key, &key_path, warnings);
        }
    }
}

fn validate_key(key: &Key, key_path: &str, warnings: &mut Vec<ValidationIssue>) {
    if key.code.as_str().is_empty() {
        warnings.push(
            ValidationIssue::warning("Key code is empty", format!("{}.code", key_path))
                .with_suggestion("Give every key a unique code"),
        );
    }

    // Space is legitimately whitespace, so only an empty label is suspicious.
    if key.label.is_empty() {
        warnings.push(
            ValidationIssue::warning("Key label is empty", format!("{}.label", key_path))
                .with_suggestion("Provide a display label for the key"),
        );
    }

    if key.is_accent() && key.has_alternate_glyph() {
        warnings.push(ValidationIssue::warning(
            "Accent key has a shifted label that is never used",
            format!("{}.shift_label", key_path),
        ));
    }
}

/// Warns about rows whose keys are all compact (width 0).
pub fn validate_row_widths(layout: &Layout, warnings: &mut Vec<ValidationIssue>) {
    for (row_idx, row) in layout.rows.iter().enumerate() {
        if !row.keys.is_empty() && row.total_width() == 0 {
            warnings.push(
                ValidationIssue::warning(
                    "Every key in the row has width 0",
                    format!("rows[{}]", row_idx),
                )
                .with_suggestion("Give at least one key a width of 1 or more"),
            );
        }
    }
}

/// Warns when several layout slots share one code.
///
/// Shared codes are tolerated: all slots bind to the same control and
/// behave identically.
pub fn validate_duplicate_codes(layout: &Layout, warnings: &mut Vec<ValidationIssue>) {
    let mut seen: HashMap<&KeyCode, String> = HashMap::new();

    for (row_idx, row) in layout.rows.iter().enumerate() {
        for (key_idx, key) in row.keys.iter().enumerate() {
            let key_path = format!("rows[{}].keys[{}]", row_idx, key_idx);
            if let Some(first) = seen.get(&key.code) {
                warnings.push(
                    ValidationIssue::warning(
                        format!(
                            "Key code '{}' is already used at {}; both slots share one control",
                            key.code, first
                        ),
                        format!("{}.code", key_path),
                    )
                    .with_suggestion("Use a unique code if the slots should be separate keys"),
                );
            } else {
                seen.insert(&key.code, key_path);
            }
        }
    }
}

/// Warns when Shift or Caps-Lock cannot be reached.
pub fn validate_modifiers_present(layout: &Layout, warnings: &mut Vec<ValidationIssue>) {
    for (modifier, name) in [(Modifier::Shift, "Shift"), (Modifier::CapsLock, "Caps-Lock")] {
        if layout.modifier_key(modifier).is_none() {
            warnings.push(ValidationIssue::warning(
                format!("Layout has no {} key", name),
                "rows",
            ));
        }
    }
}
