//! DeleteLogEntryHandler - Command handler for removing a journal entry.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::{CommandMetadata, DomainError, ErrorCode, LogEntryId};
use crate::ports::LogEntryRepository;

/// Command to delete one of the acting user's entries.
#[derive(Debug, Clone, Copy)]
pub struct DeleteLogEntryCommand {
    pub entry_id: LogEntryId,
}

/// Handler for deleting journal entries.
pub struct DeleteLogEntryHandler {
    repository: Arc<dyn LogEntryRepository>,
}

impl DeleteLogEntryHandler {
    pub fn new(repository: Arc<dyn LogEntryRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// `LogEntryNotFound` when the entry is missing or owned by someone else.
    pub async fn handle(
        &self,
        cmd: DeleteLogEntryCommand,
        metadata: CommandMetadata,
    ) -> Result<(), DomainError> {
        let owned = self
            .repository
            .find_by_id(cmd.entry_id)
            .await?
            .filter(|entry| entry.is_owner(&metadata.user_id));

        if owned.is_none() {
            warn!(
                user_id = %metadata.user_id,
                entry_id = %cmd.entry_id,
                "Delete requested for unknown or foreign entry"
            );
            return Err(Self::not_found(cmd.entry_id));
        }

        if !self.repository.delete(cmd.entry_id).await? {
            return Err(Self::not_found(cmd.entry_id));
        }

        info!(
            user_id = %metadata.user_id,
            correlation_id = %metadata.correlation_id(),
            entry_id = %cmd.entry_id,
            "Deleted log entry"
        );

        Ok(())
    }

    fn not_found(id: LogEntryId) -> DomainError {
        DomainError::new(ErrorCode::LogEntryNotFound, "Log entry not found")
            .with_detail("entry_id", id.to_string())
    }
}
