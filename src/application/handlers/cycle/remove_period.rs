//! RemovePeriodHandler - Command handler for deleting the recorded period.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{CommandMetadata, DomainError, ErrorCode};
use crate::ports::AnchorRepository;

/// Handler for removing a user's recorded period.
pub struct RemovePeriodHandler {
    anchors: Arc<dyn AnchorRepository>,
}

impl RemovePeriodHandler {
    pub fn new(anchors: Arc<dyn AnchorRepository>) -> Self {
        Self { anchors }
    }

    /// Deletes the acting user's anchor.
    ///
    /// # Errors
    ///
    /// `AnchorNotFound` if the user has nothing recorded.
    pub async fn handle(&self, metadata: CommandMetadata) -> Result<(), DomainError> {
        if self
            .anchors
            .get_latest_anchor(&metadata.user_id)
            .await?
            .is_none()
        {
            return Err(DomainError::new(
                ErrorCode::AnchorNotFound,
                "No period recorded for this user",
            ));
        }

        self.anchors.delete_anchor(&metadata.user_id).await?;

        info!(
            user_id = %metadata.user_id,
            correlation_id = %metadata.correlation_id(),
            "Removed recorded period"
        );

        Ok(())
    }
}
