//! Calendar assembly - phase blocks plus color-coded journal entries.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::cycle::{CycleProjection, Phase, PhaseCalculator, PhaseInterval};
use crate::domain::foundation::{LogEntryId, PainLevel};

use super::{LogEntry, Mood, Symptom};

/// A journal entry placed on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEntry {
    pub id: LogEntryId,
    pub title: String,
    pub date: NaiveDate,
    /// Phase the date falls in, if it is inside the projected horizon.
    pub phase: Option<Phase>,
    pub color: Option<&'static str>,
    pub symptoms: Vec<Symptom>,
    pub moods: Vec<Mood>,
    pub pain_level: Option<PainLevel>,
}

/// Everything the calendar view renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CycleCalendar {
    pub phase_blocks: Vec<PhaseInterval>,
    pub entries: Vec<CalendarEntry>,
}

impl CycleCalendar {
    /// Builds the calendar from projections and the user's entries.
    ///
    /// Inverted (empty) phase intervals are left out of the blocks.
    /// Entries are ordered by date.
    pub fn assemble(projections: &[CycleProjection], entries: &[LogEntry]) -> Self {
        let phase_blocks = projections
            .iter()
            .flat_map(|projection| projection.intervals.iter().copied())
            .filter(|interval| !interval.is_inverted())
            .collect();

        let mut calendar_entries: Vec<CalendarEntry> = entries
            .iter()
            .map(|entry| {
                let phase = PhaseCalculator::classify_date(entry.date(), projections);
                CalendarEntry {
                    id: entry.id(),
                    title: entry.event().to_string(),
                    date: entry.date(),
                    phase,
                    color: phase.map(|p| p.display_color()),
                    symptoms: entry.symptoms().to_vec(),
                    moods: entry.moods().to_vec(),
                    pain_level: entry.pain_level(),
                }
            })
            .collect();
        calendar_entries.sort_by_key(|entry| entry.date);

        Self {
            phase_blocks,
            entries: calendar_entries,
        }
    }

    /// True when there is neither a projection nor any entry to show.
    pub fn is_empty(&self) -> bool {
        self.phase_blocks.is_empty() && self.entries.is_empty()
    }
}
