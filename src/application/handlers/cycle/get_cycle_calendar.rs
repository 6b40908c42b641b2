//! GetCycleCalendarHandler - Query handler for the phase calendar.

use std::sync::Arc;

use tracing::debug;

use crate::config::{PredictionConfig, MAX_MONTHS_TO_PREDICT};
use crate::domain::foundation::{CommandMetadata, DomainError, ValidationError};
use crate::domain::journal::CycleCalendar;
use crate::ports::{AnchorRepository, LogEntryRepository};

/// Query for the calendar view.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetCycleCalendarQuery {
    /// Overrides the configured projection horizon.
    pub months_to_predict: Option<u32>,
}

/// Handler that projects the user's anchor and lays journal entries over it.
pub struct GetCycleCalendarHandler {
    anchors: Arc<dyn AnchorRepository>,
    log_entries: Arc<dyn LogEntryRepository>,
    prediction: PredictionConfig,
}

impl GetCycleCalendarHandler {
    pub fn new(
        anchors: Arc<dyn AnchorRepository>,
        log_entries: Arc<dyn LogEntryRepository>,
        prediction: PredictionConfig,
    ) -> Self {
        Self {
            anchors,
            log_entries,
            prediction,
        }
    }

    pub async fn handle(
        &self,
        query: GetCycleCalendarQuery,
        metadata: CommandMetadata,
    ) -> Result<CycleCalendar, DomainError> {
        let months = query
            .months_to_predict
            .unwrap_or(self.prediction.months_to_predict);
        if months == 0 || months > MAX_MONTHS_TO_PREDICT {
            return Err(ValidationError::out_of_range(
                "months_to_predict",
                1,
                i64::from(MAX_MONTHS_TO_PREDICT),
                i64::from(months),
            )
            .into());
        }

        let projections = match self.anchors.get_latest_anchor(&metadata.user_id).await? {
            Some(anchor) => self.prediction.calculator().project_cycle_phases(&anchor, months),
            None => Vec::new(),
        };
        let entries = self.log_entries.list_for_user(&metadata.user_id).await?;

        let calendar = CycleCalendar::assemble(&projections, &entries);

        debug!(
            user_id = %metadata.user_id,
            cycles = projections.len(),
            entries = calendar.entries.len(),
            "Assembled cycle calendar"
        );

        Ok(calendar)
    }
}
