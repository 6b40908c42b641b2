//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Cycle handlers
    CycleOverview, GetCycleCalendarHandler, GetCycleCalendarQuery, GetCycleOverviewHandler,
    GetCycleOverviewQuery, RecordPeriodCommand, RecordPeriodHandler, RecordPeriodResult,
    RemovePeriodHandler,
    // Journal handlers
    DeleteLogEntryCommand, DeleteLogEntryHandler, GetStatisticsHandler, GetStatisticsQuery,
    RecordLogEntryCommand, RecordLogEntryHandler, RecordLogEntryResult,
};
