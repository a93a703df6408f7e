// SPDX-License-Identifier: GPL-3.0-only

//! Virtboard - an on-screen keyboard widget
//!
//! The keyboard types into whichever text control its host reports as
//! focused. It supports one-shot Shift, sticky Caps-Lock, dead accents for
//! the five vowels and caret-based backspace.
//!
//! # Modules
//!
//! - `layout`: Key and layout types, the built-in layout and JSON loading
//! - `input`: Modifier state, accent composition and text editing rules
//! - `focus`: Host focus observation and the `FocusHost` seam
//! - `renderer`: The `KeyboardWidget` and its libcosmic rendering
//! - `app`: Demo application with two text fields
//! - `app_settings`: Centralized application constants
//! - `config`: User configuration with cosmic_config persistence

pub mod app;
pub mod app_settings;
pub mod config;
pub mod focus;
pub mod input;
pub mod layout;
pub mod renderer;

// ============================================================================
// Integration Tests
// ============================================================================
