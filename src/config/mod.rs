//! Application configuration module
//!
//! Configuration is loaded from environment variables using the `config` and
//! `dotenvy` crates. Variables use the `PERIOD_TRACKER` prefix and nested
//! values are separated by double underscores. Every section has defaults,
//! so an empty environment yields a working configuration.
//!
//! # Example
//!
//! ```no_run
//! use period_tracker::config::{init_tracing, AppConfig};
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! init_tracing(&config.logging).expect("Failed to install subscriber");
//! ```

mod error;
mod logging;
mod prediction;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use logging::{init_tracing, LogFormat, LoggingConfig};
pub use prediction::{PredictionConfig, MAX_DEFAULT_CYCLE_LENGTH, MAX_MONTHS_TO_PREDICT};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Phase engine settings (horizon, fallbacks, ovulation window)
    #[serde(default)]
    pub prediction: PredictionConfig,

    /// Repository backend selection
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads `PERIOD_TRACKER__*` variables.
    ///
    /// # Environment Variable Format
    ///
    /// - `PERIOD_TRACKER__PREDICTION__MONTHS_TO_PREDICT=6` -> `prediction.months_to_predict = 6`
    /// - `PERIOD_TRACKER__STORAGE__BACKEND=file` -> `storage.backend = File`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PERIOD_TRACKER")
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
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.prediction.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
