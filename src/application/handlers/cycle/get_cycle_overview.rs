//! GetCycleOverviewHandler - Query handler for the "where am I in my cycle" view.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::PredictionConfig;
use crate::domain::cycle::{
    hormone_profile, phase_guidance, HormoneProfile, Phase, PhaseCalculator, PhaseGuidance,
};
use crate::domain::foundation::{CommandMetadata, DomainError};
use crate::ports::AnchorRepository;

/// Query for the overview on a given day.
#[derive(Debug, Clone, Copy)]
pub struct GetCycleOverviewQuery {
    pub today: NaiveDate,
}

/// Current cycle position with the lookup tables for its phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleOverview {
    pub cycle_day: u32,
    pub cycle_length: u32,
    pub current_phase: Phase,
    pub hormone_profile: HormoneProfile,
    pub guidance: PhaseGuidance,
    pub next_period: Option<NaiveDate>,
}

/// Handler for the cycle overview.
pub struct GetCycleOverviewHandler {
    anchors: Arc<dyn AnchorRepository>,
    prediction: PredictionConfig,
}

impl GetCycleOverviewHandler {
    pub fn new(anchors: Arc<dyn AnchorRepository>, prediction: PredictionConfig) -> Self {
        Self {
            anchors,
            prediction,
        }
    }

    /// Returns `None` when the user should be prompted for data: nothing
    /// recorded yet, or the recorded period starts in the future.
    pub async fn handle(
        &self,
        query: GetCycleOverviewQuery,
        metadata: CommandMetadata,
    ) -> Result<Option<CycleOverview>, DomainError> {
        let Some(anchor) = self.anchors.get_latest_anchor(&metadata.user_id).await? else {
            debug!(user_id = %metadata.user_id, "No period recorded");
            return Ok(None);
        };

        if anchor.starts_after(query.today) {
            debug!(user_id = %metadata.user_id, "Recorded period starts in the future");
            return Ok(None);
        }

        let anchor = anchor.with_defaults(
            self.prediction.default_cycle_length,
            self.prediction.default_period_length,
        );
        let calculator = self.prediction.calculator();

        let (Some(cycle_day), Some(cycle_length)) = (
            PhaseCalculator::current_cycle_day(query.today, &anchor),
            anchor.cycle_length_days(),
        ) else {
            return Ok(None);
        };

        let Some(current_phase) = calculator.phase_for_cycle_day(&anchor, cycle_day) else {
            warn!(
                user_id = %metadata.user_id,
                correlation_id = %metadata.correlation_id(),
                cycle_day,
                "Cycle day could not be classified"
            );
            return Ok(None);
        };

        let next_period =
            PhaseCalculator::predict_next_period(anchor.first_day(), Some(cycle_length), query.today);

        Ok(Some(CycleOverview {
            cycle_day,
            cycle_length,
            current_phase,
            hormone_profile: hormone_profile(current_phase),
            guidance: phase_guidance(current_phase),
            next_period,
        }))
    }
}
