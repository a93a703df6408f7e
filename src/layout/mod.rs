// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard layouts for Virtboard.
//!
//! A layout is an ordered list of rows, each an ordered list of [`Key`]s.
//! The built-in US-like layout is always available; layouts can also be
//! loaded from JSON files.
//!
//! # Example Usage
//!
//! ## Built-in Layout
//!
//! ```rust,ignore
//! use virtboard::layout::us_layout;
//!
//! let layout = us_layout();
//! for row in &layout.rows {
//!     let labels: Vec<&str> = row.keys.iter().map(|k| k.label.as_str()).collect();
//!     println!("{}", labels.join(" "));
//! }
//! ```
//!
//! ## Loading from JSON
//!
//! ```rust,ignore
//! use virtboard::layout::parse_layout_from_string;
//!
//! let json = r#"{
//!     "name": "Minimal",
//!     "rows": [
//!         {"keys": [
//!             {"code": "a", "label": "a", "shift_label": "A"},
//!             {"code": "shift", "label": "Shift", "kind": {"modifier": "shift"}},
//!             {"code": "space", "label": " ", "width": 4},
//!             {"code": "acute", "label": "´", "kind": {"accent": "acute"}, "width": 0}
//!         ]}
//!     ]
//! }"#;
//!
//! match parse_layout_from_string(json) {
//!     Ok(result) => {
//!         for warning in &result.warnings {
//!             eprintln!("Warning: {}", warning);
//!         }
//!         println!("Parsed layout: {}", result.layout.name);
//!     }
//!     Err(e) => eprintln!("Parse error: {}", e),
//! }
//! ```
//!
//! Key kinds are `"character"` (the default), `{"modifier": "shift" | "caps_lock"}`,
//! `{"control": "backspace" | "tab"}` and
//! `{"accent": "acute" | "grave" | "tilde" | "circumflex" | "diaeresis"}`.

// Sub-modules
pub mod builtin;
pub mod parser;
pub mod types;
pub mod validation;

// Re-export public API - Error handling types
pub use types::{ParseError, ParseResult, Severity, ValidationIssue};

// Re-export public API - Parser functions
pub use parser::{parse_layout_file, parse_layout_from_string};

// Re-export public API - Data structures
pub use builtin::us_layout;
pub use types::{Accent, ControlKey, Key, KeyCode, KeyKind, Layout, Modifier, Row};

/// Loads the layout at `path`, or the built-in layout when `path` is empty.
///
/// Warnings are logged; a layout that fails to load falls back to the
/// built-in table after logging the error.
pub fn load_or_builtin(path: &str) -> Layout {
    if path.is_empty() {
        return us_layout();
    }

    match parse_layout_file(path) {
        Ok(result) => {
            for warning in &result.warnings {
                tracing::warn!("Layout '{}': {}", path, warning);
            }
            tracing::info!("Loaded layout '{}' from {}", result.layout.name, path);
            result.into_layout()
        }
        Err(err) => {
            tracing::error!("Falling back to built-in layout: {}", err);
            us_layout()
        }
    }
}
