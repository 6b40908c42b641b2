//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Tracing initialization failed: {0}")]
    TracingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("months_to_predict must be between 1 and {max}, got {actual}")]
    InvalidMonthsToPredict { max: u32, actual: u32 },

    #[error("default_cycle_length must be between 1 and {max}, got {actual}")]
    InvalidCycleLength { max: u32, actual: u32 },

    #[error("default_period_length must be at least 1 and not exceed the cycle length")]
    InvalidPeriodLength,

    #[error("ovulation_days must be between 1 and {max}, got {actual}")]
    InvalidOvulationDays { max: u32, actual: u32 },

    #[error("Storage data_dir is required for the file backend")]
    MissingDataDir,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
