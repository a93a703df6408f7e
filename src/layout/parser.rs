// SPDX-License-Identifier: GPL-3.0-only

//! Layout parsing logic for loading JSON layout definitions.

use crate::layout::types::{Layout, ParseError, ParseResult};
use crate::layout::validation::validate_layout;
use std::fs;

/// Parses a keyboard layout from a JSON file.
///
/// I/O failures and JSON syntax errors are reported separately, both with the
/// file path attached. The parsed layout is validated and returned together
/// with any non-fatal warnings.
///
/// # Example
///
/// ```rust,ignore
/// use virtboard::layout::parse_layout_file;
///
/// match parse_layout_file("layouts/us.json") {
///     Ok(result) => println!("Loaded layout: {}", result.layout.name),
///     Err(e) => eprintln!("Failed to parse layout: {}", e),
/// }
/// ```
pub fn parse_layout_file(path: &str) -> Result<ParseResult<Layout>, ParseError> {
    let json_str =
        fs::read_to_string(path).map_err(|e| ParseError::io_error_with_path(e, path))?;

    let layout: Layout = serde_json::from_str(&json_str)
        .map_err(|e| ParseError::json_error_with_path(e, path))?;

    validate_layout(layout).map_err(|e| e.with_path(path))
}

/// Parses a keyboard layout from a JSON string.
pub fn parse_layout_from_string(json: &str) -> Result<ParseResult<Layout>, ParseError> {
    let layout: Layout = serde_json::from_str(json)?;

    validate_layout(layout)
}

// ============================================================================
// Tests
// ============================================================================
