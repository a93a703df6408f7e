// SPDX-License-Identifier: GPL-3.0-only

//! Centralized application settings and constants.

/// Application ID in RDNN (reverse domain name notation) format.
pub const APP_ID: &str = "io.github.virtboard.Virtboard";

/// Default window width in pixels.
pub const DEFAULT_WIDTH: f32 = 640.0;

/// Default window height in pixels.
pub const DEFAULT_HEIGHT: f32 = 420.0;

/// Minimum window width in pixels.
pub const MIN_WIDTH: f32 = 320.0;

/// Minimum window height in pixels.
pub const MIN_HEIGHT: f32 = 160.0;

/// Spacing between keys and rows in pixels.
pub const DEFAULT_KEY_SPACING: f32 = 4.0;

/// Padding around the keyboard and the demo fields in pixels.
pub const DEFAULT_PADDING: f32 = 8.0;
