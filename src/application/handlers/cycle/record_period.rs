//! RecordPeriodHandler - Command handler for recording the latest period.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::cycle::CycleAnchor;
use crate::domain::foundation::{CommandMetadata, DomainError, ErrorCode, ValidationError};
use crate::ports::AnchorRepository;

/// Command to record a period, as submitted by the data-entry form.
#[derive(Debug, Clone, Default)]
pub struct RecordPeriodCommand {
    pub menstruation_start: Option<NaiveDate>,
    pub menstruation_end: Option<NaiveDate>,
    pub cycle_length: Option<u32>,
    pub period_length: Option<u32>,
    pub first_day_of_cycle: Option<NaiveDate>,
}

/// Result of a successfully recorded period.
#[derive(Debug, Clone)]
pub struct RecordPeriodResult {
    pub anchor: CycleAnchor,
}

/// Handler for recording periods.
///
/// Each user keeps a single anchor; recording replaces the previous one.
pub struct RecordPeriodHandler {
    anchors: Arc<dyn AnchorRepository>,
}

impl RecordPeriodHandler {
    pub fn new(anchors: Arc<dyn AnchorRepository>) -> Self {
        Self { anchors }
    }

    pub async fn handle(
        &self,
        cmd: RecordPeriodCommand,
        metadata: CommandMetadata,
    ) -> Result<RecordPeriodResult, DomainError> {
        // 1. Validate form input
        let anchor = Self::validate(cmd)?;

        // 2. Persist, replacing the previous anchor
        self.anchors.save_anchor(&metadata.user_id, &anchor).await?;

        info!(
            user_id = %metadata.user_id,
            correlation_id = %metadata.correlation_id(),
            "Recorded period"
        );

        Ok(RecordPeriodResult { anchor })
    }

    fn validate(cmd: RecordPeriodCommand) -> Result<CycleAnchor, DomainError> {
        let start = cmd
            .menstruation_start
            .ok_or_else(|| ValidationError::empty_field("menstruation_start"))?;

        if let Some(days) = cmd.cycle_length {
            Self::require_positive("cycle_length", days)?;
        }
        if let Some(days) = cmd.period_length {
            Self::require_positive("period_length", days)?;
        }
        if let Some(end) = cmd.menstruation_end {
            if end < start {
                return Err(DomainError::new(
                    ErrorCode::InvalidRange,
                    "Menstruation end cannot be before its start",
                )
                .with_detail("menstruation_start", start.to_string())
                .with_detail("menstruation_end", end.to_string()));
            }
        }

        Ok(CycleAnchor {
            menstruation_start: Some(start),
            menstruation_end: cmd.menstruation_end,
            cycle_length: cmd.cycle_length,
            period_length: cmd.period_length,
            first_day_of_cycle: cmd.first_day_of_cycle,
        })
    }

    fn require_positive(field: &str, days: u32) -> Result<(), ValidationError> {
        if days == 0 {
            return Err(ValidationError::out_of_range(
                field,
                1,
                i64::from(u32::MAX),
                0,
            ));
        }
        Ok(())
    }
}
