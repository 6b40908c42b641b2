//! LogEntryRepository port for journal persistence

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, LogEntryId, UserId};
use crate::domain::journal::LogEntry;

/// Repository for journal log entries.
#[async_trait]
pub trait LogEntryRepository: Send + Sync {
    /// Insert or replace an entry (keyed by its id).
    async fn save(&self, entry: &LogEntry) -> Result<(), DomainError>;

    /// Find an entry by id, regardless of owner.
    async fn find_by_id(&self, id: LogEntryId) -> Result<Option<LogEntry>, DomainError>;

    /// All entries owned by the user, ordered by date.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<LogEntry>, DomainError>;

    /// Delete an entry; returns false if it did not exist.
    async fn delete(&self, id: LogEntryId) -> Result<bool, DomainError>;
}
