//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod cycle;
pub mod journal;

pub use cycle::{
    CycleOverview, GetCycleCalendarHandler, GetCycleCalendarQuery, GetCycleOverviewHandler,
    GetCycleOverviewQuery, RecordPeriodCommand, RecordPeriodHandler, RecordPeriodResult,
    RemovePeriodHandler,
};
pub use journal::{
    DeleteLogEntryCommand, DeleteLogEntryHandler, GetStatisticsHandler, GetStatisticsQuery,
    RecordLogEntryCommand, RecordLogEntryHandler, RecordLogEntryResult,
};
