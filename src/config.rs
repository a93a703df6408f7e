// SPDX-License-Identifier: GPL-3.0-only

use cosmic::cosmic_config;
use cosmic::cosmic_config::{cosmic_config_derive::CosmicConfigEntry, CosmicConfigEntry};

use crate::app_settings;

/// User configuration that persists between application runs.
///
/// Only presentation is configurable. Modifier and accent state always
/// start cleared.
#[derive(Debug, Clone, CosmicConfigEntry, PartialEq)]
#[version = 1]
pub struct Config {
    /// Path of a JSON layout file; empty selects the built-in layout.
    pub layout_path: String,

    /// Spacing between keys and rows in pixels.
    pub key_spacing: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout_path: String::new(),
            key_spacing: app_settings::DEFAULT_KEY_SPACING,
        }
    }
}

impl Config {
    /// Key spacing clamped to a sane non-negative value.
    pub fn spacing(&self) -> f32 {
        if self.key_spacing.is_finite() && self.key_spacing >= 0.0 {
            self.key_spacing
        } else {
            app_settings::DEFAULT_KEY_SPACING
        }
    }
}
