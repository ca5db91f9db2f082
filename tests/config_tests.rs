// SPDX-License-Identifier: MPL-2.0

//! Integration tests for configuration module

use squish_button::config::{AppTheme, ButtonConfig};
use squish_button::errors::{AppError, ConfigError};
use squish_button::{ButtonMode, Config, Rgba, SquishButton};
use std::time::{Duration, Instant};

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.app_theme, AppTheme::System);
    assert_eq!(config.button, ButtonConfig::default());
}

#[test]
fn test_button_config_defaults_match_widget() {
    let button = ButtonConfig::default();
    assert_eq!(button.scaling, 20.0);
    assert_eq!(button.animation_duration(), Duration::from_millis(150));
    assert_eq!(button.color, Rgba::WHITE);
    assert_eq!(button.inner_inset, 5.0);
    assert!(button.title.is_none());
    assert_eq!(button.mode, ButtonMode::Camera);
    assert!(button.validate().is_ok());
}

#[test]
fn test_empty_description_is_default() {
    let button = ButtonConfig::from_json("{}").unwrap();
    assert_eq!(button, ButtonConfig::default());
}

#[test]
fn test_full_description() {
    let json = r#"{
        "scaling": 10.0,
        "animation_duration_ms": 250,
        "color": { "r": 0.0, "g": 0.5, "b": 1.0, "a": 1.0 },
        "inner_inset": 8.0,
        "size": 120.0,
        "title": "REC"
    }"#;
    let button = ButtonConfig::from_json(json).unwrap();
    assert_eq!(button.scaling, 10.0);
    assert_eq!(button.animation_duration(), Duration::from_millis(250));
    assert_eq!(button.color, Rgba::new(0.0, 0.5, 1.0, 1.0));
    assert_eq!(button.inner_inset, 8.0);
    assert_eq!(button.size, 120.0);
    assert_eq!(button.title.as_deref(), Some("REC"));
}

#[test]
fn test_negative_size_rejected() {
    let err = ButtonConfig::from_json(r#"{ "size": -4.0 }"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidValue { field: "size", .. }
    ));
    assert!(err.to_string().contains("size"));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = ButtonConfig::load(std::path::Path::new("/nonexistent/squish.json"));
    assert!(matches!(result, Err(AppError::Io(_))));
}

#[test]
fn test_initial_mode_from_description() {
    let button = ButtonConfig::from_json(r#"{ "mode": "Video" }"#).unwrap();
    assert_eq!(button.mode, ButtonMode::Video);

    // Setup always lands in camera mode; the stored mode is applied afterwards
    let now = Instant::now();
    let mut squish = SquishButton::from_config(&button, now);
    assert_eq!(squish.mode(), ButtonMode::Camera);
    squish.set_mode(button.mode, now);
    assert_eq!(squish.mode(), ButtonMode::Video);
    assert_eq!(
        squish.inner().presented_fill_color(now + Duration::from_millis(300)),
        Rgba::RED
    );
}

#[test]
fn test_unknown_mode_is_parse_error() {
    assert!(matches!(
        ButtonConfig::from_json(r#"{ "mode": "Timelapse" }"#),
        Err(ConfigError::Parse(_))
    ));
}
