//! Prediction configuration

use serde::Deserialize;

use crate::domain::cycle::{
    PhaseCalculator, DEFAULT_CYCLE_LENGTH, DEFAULT_MONTHS_TO_PREDICT, DEFAULT_OVULATION_DAYS,
    DEFAULT_PERIOD_LENGTH, MAX_OVULATION_DAYS,
};

use super::error::ValidationError;

/// Longest projection horizon accepted from configuration.
pub const MAX_MONTHS_TO_PREDICT: u32 = 60;

/// Longest cycle accepted as a default.
pub const MAX_DEFAULT_CYCLE_LENGTH: u32 = 90;

/// Settings for the cycle phase engine
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PredictionConfig {
    /// Number of cycles projected for the calendar
    #[serde(default = "default_months_to_predict")]
    pub months_to_predict: u32,

    /// Cycle length used when the user never declared one
    #[serde(default = "default_cycle_length")]
    pub default_cycle_length: u32,

    /// Period length used when neither end date nor length is known
    #[serde(default = "default_period_length")]
    pub default_period_length: u32,

    /// Length of the ovulation window in days
    #[serde(default = "default_ovulation_days")]
    pub ovulation_days: u32,
}

impl PredictionConfig {
    /// Build the phase calculator for these settings
    pub fn calculator(&self) -> PhaseCalculator {
        PhaseCalculator::new(self.ovulation_days)
    }

    /// Validate prediction configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.months_to_predict == 0 || self.months_to_predict > MAX_MONTHS_TO_PREDICT {
            return Err(ValidationError::InvalidMonthsToPredict {
                max: MAX_MONTHS_TO_PREDICT,
                actual: self.months_to_predict,
            });
        }
        if self.default_cycle_length == 0 || self.default_cycle_length > MAX_DEFAULT_CYCLE_LENGTH {
            return Err(ValidationError::InvalidCycleLength {
                max: MAX_DEFAULT_CYCLE_LENGTH,
                actual: self.default_cycle_length,
            });
        }
        if self.default_period_length == 0 || self.default_period_length > self.default_cycle_length
        {
            return Err(ValidationError::InvalidPeriodLength);
        }
        if self.ovulation_days == 0 || self.ovulation_days > MAX_OVULATION_DAYS {
            return Err(ValidationError::InvalidOvulationDays {
                max: MAX_OVULATION_DAYS,
                actual: self.ovulation_days,
            });
        }
        Ok(())
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            months_to_predict: default_months_to_predict(),
            default_cycle_length: default_cycle_length(),
            default_period_length: default_period_length(),
            ovulation_days: default_ovulation_days(),
        }
    }
}

fn default_months_to_predict() -> u32 {
    DEFAULT_MONTHS_TO_PREDICT
}

fn default_cycle_length() -> u32 {
    DEFAULT_CYCLE_LENGTH
}

fn default_period_length() -> u32 {
    DEFAULT_PERIOD_LENGTH
}

fn default_ovulation_days() -> u32 {
    DEFAULT_OVULATION_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_config_defaults() {
        let config = PredictionConfig::default();
        assert_eq!(config.months_to_predict, 12);
        assert_eq!(config.default_cycle_length, 28);
        assert_eq!(config.default_period_length, 5);
        assert_eq!(config.ovulation_days, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_calculator_uses_ovulation_days() {
        let config = PredictionConfig {
            ovulation_days: 2,
            ..Default::default()
        };
        assert_eq!(config.calculator().ovulation_days(), 2);
    }

    #[test]
    fn test_validation_rejects_zero_months() {
        let config = PredictionConfig {
            months_to_predict: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidMonthsToPredict { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_wide_ovulation_window() {
        let config = PredictionConfig {
            ovulation_days: 4,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidOvulationDays { max: 3, actual: 4 })
        );
    }

    #[test]
    fn test_validation_rejects_period_longer_than_cycle() {
        let config = PredictionConfig {
            default_cycle_length: 10,
            default_period_length: 11,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidPeriodLength));
    }

    #[test]
    fn test_prediction_config_deserialization() {
        let json = r#"{ "months_to_predict": 6, "ovulation_days": 3 }"#;
        let config: PredictionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.months_to_predict, 6);
        assert_eq!(config.ovulation_days, 3);
        assert_eq!(config.default_cycle_length, 28);
    }
}
