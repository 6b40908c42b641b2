//! Journal command and query handlers.

mod delete_log_entry;
mod get_statistics;
mod record_log_entry;

pub use delete_log_entry::{DeleteLogEntryCommand, DeleteLogEntryHandler};
pub use get_statistics::{GetStatisticsHandler, GetStatisticsQuery};
pub use record_log_entry::{RecordLogEntryCommand, RecordLogEntryHandler, RecordLogEntryResult};
