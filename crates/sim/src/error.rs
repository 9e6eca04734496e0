//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize default config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("World size must be positive, got {width}x{height}")]
    InvalidWorld { width: f32, height: f32 },

    #[error("Blob radius must be positive, got {0}")]
    InvalidRadius(f32),

    #[error("Blob speed must be non-negative, got {0}")]
    InvalidSpeed(f32),

    #[error("Bouncer ratio must be within 0..=1, got {0}")]
    InvalidRatio(f64),

    #[error("Survey radius must be non-negative, got {0}")]
    InvalidSurveyRadius(f64),
}
