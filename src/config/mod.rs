//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `JOBREACH` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use jobreach::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod credits;
mod directory;
mod error;

pub use credits::CreditsConfig;
pub use directory::DirectoryConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the Jobreach campaign core.
/// Load using [`AppConfig::load()`] which reads from environment
/// variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Company directory configuration (search API)
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// Credit balance configuration
    #[serde(default)]
    pub credits: CreditsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `JOBREACH` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `JOBREACH__DIRECTORY__BASE_URL=...` -> `directory.base_url = ...`
    /// - `JOBREACH__CREDITS__DEFAULT_AVAILABLE=500` -> `credits.default_available = 500`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("JOBREACH")
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
        self.directory.validate()?;
        Ok(())
    }
}
