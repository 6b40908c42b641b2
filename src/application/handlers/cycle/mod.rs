//! Cycle command and query handlers.

mod get_cycle_calendar;
mod get_cycle_overview;
mod record_period;
mod remove_period;

pub use get_cycle_calendar::{GetCycleCalendarHandler, GetCycleCalendarQuery};
pub use get_cycle_overview::{CycleOverview, GetCycleOverviewHandler, GetCycleOverviewQuery};
pub use record_period::{RecordPeriodCommand, RecordPeriodHandler, RecordPeriodResult};
pub use remove_period::RemovePeriodHandler;
