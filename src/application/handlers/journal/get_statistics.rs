//! GetStatisticsHandler - Query handler for the yearly journal summary.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::foundation::{CommandMetadata, DomainError};
use crate::domain::journal::StatisticsSummary;
use crate::ports::LogEntryRepository;

/// Query for statistics as of a given day.
#[derive(Debug, Clone, Copy)]
pub struct GetStatisticsQuery {
    pub today: NaiveDate,
}

/// Handler for the statistics view.
pub struct GetStatisticsHandler {
    repository: Arc<dyn LogEntryRepository>,
}

impl GetStatisticsHandler {
    pub fn new(repository: Arc<dyn LogEntryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetStatisticsQuery,
        metadata: CommandMetadata,
    ) -> Result<StatisticsSummary, DomainError> {
        let entries = self.repository.list_for_user(&metadata.user_id).await?;
        let summary = StatisticsSummary::compile(&entries, query.today);

        debug!(
            user_id = %metadata.user_id,
            entries = summary.entry_count,
            since = %summary.since,
            "Compiled statistics"
        );

        Ok(summary)
    }
}
