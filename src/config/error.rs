//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Ring {field} must be a positive finite number, got {value}")]
    InvalidRingDimension { field: &'static str, value: f64 },

    #[error("Indicator size {indicator_size} exceeds ring diameter {diameter}")]
    IndicatorTooLarge { indicator_size: f64, diameter: f64 },

    #[error("Log filter directive must not be empty")]
    EmptyLogLevel,
}
