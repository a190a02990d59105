//! Application configuration module
//!
//! This module provides type-safe configuration loading from an optional TOML
//! file and environment variables using the `config` and `dotenvy` crates.
//! Environment variables use the `CYCLE_COMPANION` prefix and nested values
//! are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use cycle_companion::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Ring radius {}", config.ring.radius);
//! ```

mod error;
mod logging;
mod ring;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use ring::RingConfig;

use std::path::Path;

use serde::Deserialize;

/// Base name of the optional config file looked up in the working directory
const DEFAULT_CONFIG_FILE: &str = "cycle-companion";

const ENV_PREFIX: &str = "CYCLE_COMPANION";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Progress ring dimensions
    #[serde(default)]
    pub ring: RingConfig,
}

impl AppConfig {
    /// Load configuration from `cycle-companion.toml` (if present) and the environment
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads the optional config file
    /// 3. Reads environment variables with `CYCLE_COMPANION` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `CYCLE_COMPANION__RING__RADIUS=120` -> `ring.radius = 120`
    /// - `CYCLE_COMPANION__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        let file = config::File::with_name(DEFAULT_CONFIG_FILE).required(false);
        Self::build(file)
    }

    /// Like [`AppConfig::load`], but reads the given file, which must exist.
    /// Environment variables still take precedence over file values.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = config::File::from(path.as_ref()).required(true);
        Self::build(file)
    }

    fn build<T>(file: T) -> Result<Self, ConfigError>
    where
        T: config::Source + Send + Sync + 'static,
    {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.ring.validate()?;
        Ok(())
    }
}
