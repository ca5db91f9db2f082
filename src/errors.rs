// SPDX-License-Identifier: MPL-2.0

//! Error types for the squish button and its host application

use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main error type
#[derive(Debug, Clone)]
pub enum AppError {
    /// Invalid or unreadable button configuration
    Config(ConfigError),
    /// Filesystem errors
    Io(String),
}

/// Button configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Persisted description could not be parsed
    Parse(String),
    /// A numeric field is negative, NaN or infinite
    InvalidValue { field: &'static str, value: f32 },
    /// Color components must be finite and within 0..=1
    InvalidColor,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Failed to parse button description: {}", msg),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value for {}: {}", field, value)
            }
            ConfigError::InvalidColor => write!(f, "Color components must be within 0.0..=1.0"),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for ConfigError {}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err.into())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}
