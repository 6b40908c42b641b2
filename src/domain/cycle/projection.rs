//! Projected phase intervals for a single cycle.

use chrono::NaiveDate;
use serde::Serialize;

use super::Phase;

/// One phase of one projected cycle, as an inclusive date range.
///
/// An interval may be inverted (`end < start`) when the cycle is too short
/// for the fixed luteal assumption; such an interval contains no dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseInterval {
    pub phase: Phase,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub display_color: &'static str,
}

impl PhaseInterval {
    pub fn new(phase: Phase, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            phase,
            start,
            end,
            display_color: phase.display_color(),
        }
    }

    /// Inclusive containment check.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Inclusive length in days; zero or negative for inverted intervals.
    pub fn length_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// Restricts the interval to `first..=last`. An interval lying wholly
    /// outside that range comes back inverted.
    pub fn clipped(self, first: NaiveDate, last: NaiveDate) -> Self {
        Self {
            start: self.start.max(first),
            end: self.end.min(last),
            ..self
        }
    }
}

/// The four phase intervals of one cycle, offset `index * cycle_length`
/// days from the anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleProjection {
    pub index: u32,
    pub cycle_start: NaiveDate,
    pub cycle_length: u32,
    pub intervals: [PhaseInterval; 4],
}

impl CycleProjection {
    /// Interval for the given phase.
    pub fn interval(&self, phase: Phase) -> &PhaseInterval {
        // intervals are stored in Phase::ALL order
        &self.intervals[phase as usize]
    }

    pub fn menstruation(&self) -> &PhaseInterval {
        self.interval(Phase::Menstruation)
    }

    pub fn follicular(&self) -> &PhaseInterval {
        self.interval(Phase::Follicular)
    }

    pub fn ovulation(&self) -> &PhaseInterval {
        self.interval(Phase::Ovulation)
    }

    pub fn luteal(&self) -> &PhaseInterval {
        self.interval(Phase::Luteal)
    }

    /// Last day of this cycle (the luteal end).
    pub fn cycle_end(&self) -> NaiveDate {
        self.luteal().end
    }

    /// First phase, in cycle order, whose interval contains `date`.
    ///
    /// Dates outside `cycle_start..=cycle_end()` are never classified.
    pub fn classify(&self, date: NaiveDate) -> Option<Phase> {
        if date < self.cycle_start || date > self.cycle_end() {
            return None;
        }
        self.intervals
            .iter()
            .find(|interval| interval.contains(date))
            .map(|interval| interval.phase)
    }
}
