//! CycleAnchor - the recorded period every projection is computed from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Cycle length assumed when the user never declared one.
pub const DEFAULT_CYCLE_LENGTH: u32 = 28;

/// Bleeding days assumed when neither an end date nor a period length is known.
pub const DEFAULT_PERIOD_LENGTH: u32 = 5;

/// The most recent recorded menstruation and the user's declared lengths.
///
/// Every field is optional because the host form lets users submit any
/// subset of them. Missing data is not an error here; the calculator turns
/// it into empty or absent results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleAnchor {
    pub menstruation_start: Option<NaiveDate>,
    #[serde(default)]
    pub menstruation_end: Option<NaiveDate>,
    #[serde(default)]
    pub cycle_length: Option<u32>,
    #[serde(default)]
    pub period_length: Option<u32>,
    /// User-declared first day of the cycle, used for next-period prediction.
    #[serde(default)]
    pub first_day_of_cycle: Option<NaiveDate>,
}

impl CycleAnchor {
    /// Creates an anchor for a period starting on `start`.
    pub fn starting(start: NaiveDate) -> Self {
        Self {
            menstruation_start: Some(start),
            ..Self::default()
        }
    }

    /// Builder: observed last day of bleeding.
    pub fn with_end(mut self, end: NaiveDate) -> Self {
        self.menstruation_end = Some(end);
        self
    }

    /// Builder: declared cycle length in days.
    pub fn with_cycle_length(mut self, days: u32) -> Self {
        self.cycle_length = Some(days);
        self
    }

    /// Builder: declared period length in days.
    pub fn with_period_length(mut self, days: u32) -> Self {
        self.period_length = Some(days);
        self
    }

    /// Builder: declared first day of the cycle.
    pub fn with_first_day(mut self, day: NaiveDate) -> Self {
        self.first_day_of_cycle = Some(day);
        self
    }

    /// Usable cycle length; zero counts as missing.
    pub fn cycle_length_days(&self) -> Option<u32> {
        self.cycle_length.filter(|days| *days > 0)
    }

    /// Number of bleeding days, never less than one.
    ///
    /// An observed end date wins over the declared period length. An end
    /// date before the start clamps to a single day.
    pub fn menstruation_duration(&self) -> u32 {
        let observed = match (self.menstruation_start, self.menstruation_end) {
            (Some(start), Some(end)) => Some((end - start).num_days() + 1),
            _ => None,
        };

        let days = observed
            .or_else(|| self.period_length.map(i64::from))
            .unwrap_or(i64::from(DEFAULT_PERIOD_LENGTH));

        u32::try_from(days.max(1)).unwrap_or(u32::MAX)
    }

    /// First day used for next-period prediction.
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.first_day_of_cycle.or(self.menstruation_start)
    }

    /// Returns a copy with missing or zero lengths replaced by defaults.
    pub fn with_defaults(&self, default_cycle_length: u32, default_period_length: u32) -> Self {
        let mut filled = self.clone();
        if filled.cycle_length_days().is_none() {
            filled.cycle_length = Some(default_cycle_length);
        }
        if filled.period_length.is_none() {
            filled.period_length = Some(default_period_length);
        }
        filled
    }

    /// True when the recorded start lies after `today`.
    pub fn starts_after(&self, today: NaiveDate) -> bool {
        self.menstruation_start.is_some_and(|start| start > today)
    }
}
