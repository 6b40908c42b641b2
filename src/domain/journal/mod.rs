//! Journal module - daily health log and the views derived from it.
//!
//! # Components
//!
//! - `LogEntry` - Dated entry with event title, symptom/mood tags, pain level
//! - `Symptom` / `Mood` - Enumerated tags
//! - `StatisticsSummary` - Tag and pain frequencies over the last year
//! - `CycleCalendar` - Phase blocks plus entries colored by phase

mod calendar;
mod log_entry;
mod statistics;
mod tags;

pub use calendar::{CalendarEntry, CycleCalendar};
pub use log_entry::{HealthNotes, LogEntry, MAX_EVENT_LENGTH};
pub use statistics::{MonthlyFrequency, StatisticsSummary, TagFrequency, STATISTICS_WINDOW_DAYS};
pub use tags::{Mood, Symptom};
