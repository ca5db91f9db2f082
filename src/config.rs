// SPDX-License-Identifier: GPL-3.0-only

use crate::color::Rgba;
use crate::constants::{self, ui};
use crate::errors::{AppResult, ConfigError};
use crate::squish::ButtonMode;
use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use cosmic::{Theme, theme};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Application theme preference
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum AppTheme {
    /// Follow system theme (dark or light based on system setting)
    #[default]
    System,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl AppTheme {
    pub const ALL: [AppTheme; 3] = [AppTheme::System, AppTheme::Dark, AppTheme::Light];

    /// Get the COSMIC theme for this app theme preference
    pub fn theme(&self) -> Theme {
        match self {
            Self::Dark => {
                let mut theme = theme::system_dark();
                theme.theme_type.prefer_dark(Some(true));
                theme
            }
            Self::Light => {
                let mut theme = theme::system_light();
                theme.theme_type.prefer_dark(Some(false));
                theme
            }
            Self::System => theme::system_preference(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::System => "Match desktop",
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

/// Persisted description of a squish button.
///
/// Missing fields fall back to the widget defaults, so `{}` is a valid description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    /// Pixels the inner shape shrinks by while pressed
    pub scaling: f32,
    /// Press/release animation duration in milliseconds
    pub animation_duration_ms: u64,
    /// Inner shape color applied at setup
    pub color: Rgba,
    /// Gap between border and inner shape
    pub inner_inset: f32,
    /// Edge length of the (square) button frame
    pub size: f32,
    /// Optional text drawn over the button, hidden while pressed
    pub title: Option<String>,
    /// Mode the host switches to once the button is set up
    pub mode: ButtonMode,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            scaling: constants::DEFAULT_SCALING,
            animation_duration_ms: constants::DEFAULT_ANIMATION_DURATION.as_millis() as u64,
            color: Rgba::WHITE,
            inner_inset: constants::DEFAULT_INNER_INSET,
            size: ui::DEFAULT_BUTTON_SIZE,
            title: None,
            mode: ButtonMode::default(),
        }
    }
}

impl ButtonConfig {
    /// Parse and validate a JSON description
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ButtonConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON description from disk
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject negative or non-finite geometry and out-of-range colors
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("scaling", self.scaling),
            ("inner_inset", self.inner_inset),
            ("size", self.size),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        if !self.color.is_valid() {
            return Err(ConfigError::InvalidColor);
        }
        Ok(())
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }
}

#[derive(Debug, Clone, CosmicConfigEntry, PartialEq, Serialize, Deserialize)]
#[version = 1]
pub struct Config {
    /// Application theme preference (System, Dark, Light)
    pub app_theme: AppTheme,
    /// Button shown by the host window
    pub button: ButtonConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_theme: AppTheme::default(),
            button: ButtonConfig::default(),
        }
    }
}

/// Which parts of the effective configuration a stored update touched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigChange {
    pub button: bool,
    pub theme: bool,
}

/// Stored configuration with an optional one-off button description on top.
///
/// The override comes from the command line and is never written back: only
/// [`LayeredConfig::stored`] is persisted, and edits made while an override is
/// active reach the stored description field by field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayeredConfig {
    stored: Config,
    button_override: Option<ButtonConfig>,
}

impl LayeredConfig {
    pub fn new(stored: Config, button_override: Option<ButtonConfig>) -> Self {
        Self {
            stored,
            button_override,
        }
    }

    /// Configuration as it should be persisted
    pub fn stored(&self) -> &Config {
        &self.stored
    }

    /// Button description in effect, override first
    pub fn button(&self) -> &ButtonConfig {
        self.button_override
            .as_ref()
            .unwrap_or(&self.stored.button)
    }

    pub fn app_theme(&self) -> AppTheme {
        self.stored.app_theme
    }

    pub fn set_app_theme(&mut self, app_theme: AppTheme) {
        self.stored.app_theme = app_theme;
    }

    /// Apply a user edit to the effective button and to the stored one
    pub fn update_button(&mut self, edit: impl Fn(&mut ButtonConfig)) {
        edit(&mut self.stored.button);
        if let Some(button) = self.button_override.as_mut() {
            edit(button);
        }
    }

    /// Take a configuration read back from disk
    pub fn replace_stored(&mut self, stored: Config) -> ConfigChange {
        let previous_button = self.button().clone();
        let theme = stored.app_theme != self.stored.app_theme;
        self.stored = stored;
        ConfigChange {
            button: *self.button() != previous_button,
            theme,
        }
    }
}
