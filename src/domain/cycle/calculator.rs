//! Phase Calculator - projects cycle phases from a recorded anchor.
//!
//! Every function here is pure. Missing or unusable input (no start date,
//! no positive cycle length) yields an empty sequence or `None`, never an
//! error, so callers can show a data-entry prompt instead of a failure.
//!
//! # Phase rules
//!
//! Ovulation is assumed to happen a fixed 14 days before the next cycle
//! starts, whatever the cycle length. For cycle `m`:
//!
//! - menstruation: `cycle_start ..= cycle_start + duration - 1`
//! - follicular: `cycle_length - duration - 14` days after menstruation
//! - ovulation: `ovulation_days` days after follicular
//! - luteal: from the day after ovulation to the day before the next cycle
//!
//! When the follicular length comes out negative the follicular interval
//! is inverted and ovulation overlaps menstruation. This is kept as is.

use chrono::{Days, NaiveDate};

use super::{CycleAnchor, CycleProjection, Phase, PhaseInterval};

/// Fixed distance between ovulation and the next cycle start.
pub const LUTEAL_PHASE_DAYS: i64 = 14;

/// Default ovulation window length in days.
pub const DEFAULT_OVULATION_DAYS: u32 = 1;

/// Longest supported ovulation window.
pub const MAX_OVULATION_DAYS: u32 = 3;

/// Default number of cycles to project forward.
pub const DEFAULT_MONTHS_TO_PREDICT: u32 = 12;

/// Shifts a calendar date by a signed number of days.
pub(crate) fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

/// Calculator for cycle phase projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseCalculator {
    ovulation_days: u32,
}

impl PhaseCalculator {
    /// Creates a calculator with the given ovulation window, clamped to 1..=3 days.
    pub fn new(ovulation_days: u32) -> Self {
        Self {
            ovulation_days: ovulation_days.clamp(1, MAX_OVULATION_DAYS),
        }
    }

    pub fn ovulation_days(&self) -> u32 {
        self.ovulation_days
    }

    /// Projects `months_to_predict` consecutive cycles from the anchor.
    ///
    /// # Edge Cases
    /// - No start date or no positive cycle length: empty
    /// - `months_to_predict == 0`: empty
    /// - Projection stops early if a date would leave chrono's range
    pub fn project_cycle_phases(
        &self,
        anchor: &CycleAnchor,
        months_to_predict: u32,
    ) -> Vec<CycleProjection> {
        let (Some(start), Some(cycle_length)) =
            (anchor.menstruation_start, anchor.cycle_length_days())
        else {
            return Vec::new();
        };
        let duration = anchor.menstruation_duration();

        (0..months_to_predict)
            .map_while(|index| self.project_cycle(start, cycle_length, duration, index))
            .collect()
    }

    /// Projects the single cycle at `index`.
    fn project_cycle(
        &self,
        anchor_start: NaiveDate,
        cycle_length: u32,
        duration: u32,
        index: u32,
    ) -> Option<CycleProjection> {
        let cycle_length_days = i64::from(cycle_length);
        let duration = i64::from(duration);
        let follicular_days = cycle_length_days - duration - LUTEAL_PHASE_DAYS;

        let cycle_start = shift_days(anchor_start, cycle_length_days * i64::from(index))?;

        let menstruation_end = shift_days(cycle_start, duration - 1)?;

        let follicular_start = shift_days(menstruation_end, 1)?;
        let follicular_end = shift_days(follicular_start, follicular_days - 1)?;

        let ovulation_start = shift_days(follicular_end, 1)?;
        let ovulation_end = shift_days(ovulation_start, i64::from(self.ovulation_days) - 1)?;

        let luteal_start = shift_days(ovulation_end, 1)?;
        let luteal_end = shift_days(cycle_start, cycle_length_days - 1)?;

        // Cycles shorter than the luteal assumption push ovulation and luteal
        // starts before cycle_start; keep every interval inside its own cycle.
        let clip = |interval: PhaseInterval| interval.clipped(cycle_start, luteal_end);

        Some(CycleProjection {
            index,
            cycle_start,
            cycle_length,
            intervals: [
                clip(PhaseInterval::new(Phase::Menstruation, cycle_start, menstruation_end)),
                clip(PhaseInterval::new(Phase::Follicular, follicular_start, follicular_end)),
                clip(PhaseInterval::new(Phase::Ovulation, ovulation_start, ovulation_end)),
                clip(PhaseInterval::new(Phase::Luteal, luteal_start, luteal_end)),
            ],
        })
    }

    /// First phase across all projections whose interval contains `date`.
    ///
    /// Returns `None` before the anchor or past the projected horizon.
    pub fn classify_date(date: NaiveDate, projections: &[CycleProjection]) -> Option<Phase> {
        projections
            .iter()
            .find_map(|projection| projection.classify(date))
    }

    /// Predicts the next period start after `today`.
    ///
    /// Uses floor division, so a `today` before `first_day` predicts
    /// `first_day` itself.
    pub fn predict_next_period(
        first_day: Option<NaiveDate>,
        cycle_length: Option<u32>,
        today: NaiveDate,
    ) -> Option<NaiveDate> {
        let first_day = first_day?;
        let cycle_length = i64::from(cycle_length.filter(|days| *days > 0)?);

        let days_since_start = (today - first_day).num_days();
        let completed_cycles = days_since_start.div_euclid(cycle_length);

        shift_days(first_day, (completed_cycles + 1) * cycle_length)
    }

    /// 1-based day within the current cycle, in `1..=cycle_length`.
    ///
    /// Returns `None` when the anchor starts after `today` or lacks a start
    /// date or positive cycle length.
    pub fn current_cycle_day(today: NaiveDate, anchor: &CycleAnchor) -> Option<u32> {
        let start = anchor.menstruation_start?;
        let cycle_length = i64::from(anchor.cycle_length_days()?);

        let days_since_start = (today - start).num_days();
        if days_since_start < 0 {
            return None;
        }

        u32::try_from(days_since_start % cycle_length + 1).ok()
    }

    /// Phase of the given 1-based day of the anchor's cycle.
    ///
    /// Uses the same rules as the projection, so the current phase always
    /// agrees with the calendar.
    pub fn phase_for_cycle_day(&self, anchor: &CycleAnchor, cycle_day: u32) -> Option<Phase> {
        if cycle_day == 0 {
            return None;
        }
        let first_cycle = self.project_cycle_phases(anchor, 1);
        let start = first_cycle.first()?.cycle_start;
        let date = shift_days(start, i64::from(cycle_day) - 1)?;
        Self::classify_date(date, &first_cycle)
    }
}

impl Default for PhaseCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_OVULATION_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn standard_anchor() -> CycleAnchor {
        CycleAnchor::starting(date(2024, 1, 1))
            .with_cycle_length(28)
            .with_period_length(5)
    }

    // ───────────────────────────────────────────────────────────────
    // project_cycle_phases
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn projects_reference_cycle() {
        let projections = PhaseCalculator::default().project_cycle_phases(&standard_anchor(), 12);
        let first = &projections[0];

        assert_eq!(first.menstruation().start, date(2024, 1, 1));
        assert_eq!(first.menstruation().end, date(2024, 1, 5));
        assert_eq!(first.follicular().start, date(2024, 1, 6));
        assert_eq!(first.follicular().end, date(2024, 1, 14));
        assert_eq!(first.ovulation().start, date(2024, 1, 15));
        assert_eq!(first.ovulation().end, date(2024, 1, 15));
        assert_eq!(first.luteal().start, date(2024, 1, 16));
        assert_eq!(first.luteal().end, date(2024, 1, 28));
    }

    #[test]
    fn projects_requested_number_of_cycles() {
        let calc = PhaseCalculator::default();
        assert_eq!(calc.project_cycle_phases(&standard_anchor(), 12).len(), 12);
        assert_eq!(calc.project_cycle_phases(&standard_anchor(), 3).len(), 3);
        assert!(calc.project_cycle_phases(&standard_anchor(), 0).is_empty());
    }

    #[test]
    fn second_cycle_is_offset_by_cycle_length() {
        let projections = PhaseCalculator::default().project_cycle_phases(&standard_anchor(), 2);
        assert_eq!(projections[1].index, 1);
        assert_eq!(projections[1].cycle_start, date(2024, 1, 29));
        assert_eq!(projections[1].menstruation().end, date(2024, 2, 2));
        assert_eq!(projections[1].luteal().end, date(2024, 2, 25));
    }

    #[test]
    fn missing_cycle_length_yields_empty_projection() {
        let anchor = CycleAnchor::starting(date(2024, 1, 1)).with_period_length(5);
        assert!(PhaseCalculator::default()
            .project_cycle_phases(&anchor, 12)
            .is_empty());
    }

    #[test]
    fn missing_start_yields_empty_projection() {
        let anchor = CycleAnchor::default().with_cycle_length(28);
        assert!(PhaseCalculator::default()
            .project_cycle_phases(&anchor, 12)
            .is_empty());
    }

    #[test]
    fn zero_cycle_length_yields_empty_projection() {
        let anchor = CycleAnchor::starting(date(2024, 1, 1)).with_cycle_length(0);
        assert!(PhaseCalculator::default()
            .project_cycle_phases(&anchor, 12)
            .is_empty());
    }

    #[test]
    fn end_date_drives_menstruation_duration() {
        let anchor = CycleAnchor::starting(date(2024, 1, 1))
            .with_end(date(2024, 1, 7))
            .with_cycle_length(30);
        let first = &PhaseCalculator::default().project_cycle_phases(&anchor, 1)[0];

        assert_eq!(first.menstruation().end, date(2024, 1, 7));
        // 30 - 7 - 14 = 9 follicular days
        assert_eq!(first.follicular().length_days(), 9);
        assert_eq!(first.luteal().end, date(2024, 1, 30));
    }

    #[test]
    fn wider_ovulation_window_shortens_luteal() {
        let projections = PhaseCalculator::new(3).project_cycle_phases(&standard_anchor(), 1);
        let first = &projections[0];

        assert_eq!(first.ovulation().start, date(2024, 1, 15));
        assert_eq!(first.ovulation().end, date(2024, 1, 17));
        assert_eq!(first.luteal().start, date(2024, 1, 18));
        assert_eq!(first.luteal().end, date(2024, 1, 28));
    }

    #[test]
    fn ovulation_window_is_clamped() {
        assert_eq!(PhaseCalculator::new(0).ovulation_days(), 1);
        assert_eq!(PhaseCalculator::new(9).ovulation_days(), MAX_OVULATION_DAYS);
    }

    #[test]
    fn short_cycle_produces_inverted_follicular_interval() {
        // 20 - 7 - 14 = -1 follicular days
        let anchor = CycleAnchor::starting(date(2024, 1, 1))
            .with_cycle_length(20)
            .with_period_length(7);
        let first = &PhaseCalculator::default().project_cycle_phases(&anchor, 1)[0];

        assert!(first.follicular().is_inverted());
        assert_eq!(first.follicular().start, date(2024, 1, 8));
        assert_eq!(first.follicular().end, date(2024, 1, 6));
        // luteal end is still anchored to the next cycle start
        assert_eq!(first.luteal().end, date(2024, 1, 20));
    }

    #[test]
    fn phases_tile_each_cycle() {
        let projections = PhaseCalculator::default().project_cycle_phases(&standard_anchor(), 12);
        for window in projections.windows(2) {
            let (current, next) = (&window[0], &window[1]);
            for pair in current.intervals.windows(2) {
                assert_eq!(shift_days(pair[0].end, 1), Some(pair[1].start));
            }
            assert_eq!(shift_days(current.luteal().end, 1), Some(next.cycle_start));
        }
    }

    #[test]
    fn projection_is_idempotent() {
        let calc = PhaseCalculator::default();
        assert_eq!(
            calc.project_cycle_phases(&standard_anchor(), 12),
            calc.project_cycle_phases(&standard_anchor(), 12)
        );
    }

    // ───────────────────────────────────────────────────────────────
    // classify_date
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn classify_date_finds_each_phase() {
        let projections = PhaseCalculator::default().project_cycle_phases(&standard_anchor(), 2);
        let classify = |d| PhaseCalculator::classify_date(d, &projections);

        assert_eq!(classify(date(2024, 1, 3)), Some(Phase::Menstruation));
        assert_eq!(classify(date(2024, 1, 10)), Some(Phase::Follicular));
        assert_eq!(classify(date(2024, 1, 15)), Some(Phase::Ovulation));
        assert_eq!(classify(date(2024, 1, 28)), Some(Phase::Luteal));
        assert_eq!(classify(date(2024, 1, 29)), Some(Phase::Menstruation));
    }

    #[test]
    fn classify_date_outside_horizon_is_none() {
        let projections = PhaseCalculator::default().project_cycle_phases(&standard_anchor(), 1);
        assert_eq!(PhaseCalculator::classify_date(date(2023, 12, 31), &projections), None);
        assert_eq!(PhaseCalculator::classify_date(date(2024, 1, 29), &projections), None);
        assert_eq!(PhaseCalculator::classify_date(date(2024, 1, 1), &[]), None);
    }

    #[test]
    fn classify_prefers_earlier_phase_on_overlap() {
        // ovulation overlaps menstruation when follicular is inverted
        let anchor = CycleAnchor::starting(date(2024, 1, 1))
            .with_cycle_length(18)
            .with_period_length(7);
        let projections = PhaseCalculator::default().project_cycle_phases(&anchor, 1);
        assert!(projections[0].ovulation().start <= projections[0].menstruation().end);
        assert_eq!(
            PhaseCalculator::classify_date(projections[0].ovulation().start, &projections),
            Some(Phase::Menstruation)
        );
    }

    #[test]
    fn very_short_cycle_stays_inside_its_own_dates() {
        // 10 - 14 puts ovulation four days before the anchor without clipping
        let anchor = CycleAnchor::starting(date(2024, 1, 10))
            .with_cycle_length(10)
            .with_period_length(5);
        let projections = PhaseCalculator::default().project_cycle_phases(&anchor, 12);

        assert_eq!(PhaseCalculator::classify_date(date(2024, 1, 9), &projections), None);
        for projection in &projections {
            for interval in projection.intervals.iter().filter(|i| !i.is_inverted()) {
                assert!(interval.start >= projection.cycle_start);
                assert!(interval.end <= projection.cycle_end());
            }
        }
        let first = &projections[0];
        assert_eq!(first.menstruation().end, date(2024, 1, 14));
        assert_eq!(first.luteal().end, date(2024, 1, 19));
        assert_eq!(
            PhaseCalculator::classify_date(date(2024, 1, 19), &projections),
            Some(Phase::Luteal)
        );
    }

    #[test]
    fn period_longer_than_cycle_is_cut_at_cycle_end() {
        let anchor = CycleAnchor::starting(date(2024, 1, 1))
            .with_cycle_length(3)
            .with_period_length(5);
        let projections = PhaseCalculator::default().project_cycle_phases(&anchor, 2);

        assert_eq!(projections[0].menstruation().end, date(2024, 1, 3));
        assert_eq!(projections[1].menstruation().start, date(2024, 1, 4));
    }

    // ───────────────────────────────────────────────────────────────
    // predict_next_period
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn predicts_next_period_within_first_cycle() {
        let next =
            PhaseCalculator::predict_next_period(Some(date(2024, 1, 1)), Some(28), date(2024, 1, 20));
        assert_eq!(next, Some(date(2024, 1, 29)));
    }

    #[test]
    fn predicts_next_period_after_several_cycles() {
        let next =
            PhaseCalculator::predict_next_period(Some(date(2024, 1, 1)), Some(28), date(2024, 3, 1));
        // Jan 29 and Feb 26 have passed
        assert_eq!(next, Some(date(2024, 3, 25)));
    }

    #[test]
    fn prediction_on_cycle_boundary_moves_to_following_cycle() {
        let next =
            PhaseCalculator::predict_next_period(Some(date(2024, 1, 1)), Some(28), date(2024, 1, 29));
        assert_eq!(next, Some(date(2024, 2, 26)));
    }

    #[test]
    fn prediction_before_first_day_returns_first_day() {
        let next =
            PhaseCalculator::predict_next_period(Some(date(2024, 1, 10)), Some(28), date(2024, 1, 1));
        assert_eq!(next, Some(date(2024, 1, 10)));
    }

    #[test]
    fn prediction_without_data_is_none() {
        let today = date(2024, 1, 20);
        assert_eq!(PhaseCalculator::predict_next_period(None, Some(28), today), None);
        assert_eq!(
            PhaseCalculator::predict_next_period(Some(date(2024, 1, 1)), None, today),
            None
        );
        assert_eq!(
            PhaseCalculator::predict_next_period(Some(date(2024, 1, 1)), Some(0), today),
            None
        );
    }

    // ───────────────────────────────────────────────────────────────
    // current_cycle_day / phase_for_cycle_day
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn current_cycle_day_counts_from_one() {
        let anchor = standard_anchor();
        assert_eq!(PhaseCalculator::current_cycle_day(date(2024, 1, 1), &anchor), Some(1));
        assert_eq!(PhaseCalculator::current_cycle_day(date(2024, 1, 28), &anchor), Some(28));
        assert_eq!(PhaseCalculator::current_cycle_day(date(2024, 1, 29), &anchor), Some(1));
        assert_eq!(PhaseCalculator::current_cycle_day(date(2024, 2, 10), &anchor), Some(13));
    }

    #[test]
    fn current_cycle_day_is_none_for_future_anchor() {
        assert_eq!(
            PhaseCalculator::current_cycle_day(date(2023, 12, 31), &standard_anchor()),
            None
        );
    }

    #[test]
    fn current_cycle_day_requires_cycle_length() {
        let anchor = CycleAnchor::starting(date(2024, 1, 1));
        assert_eq!(PhaseCalculator::current_cycle_day(date(2024, 1, 5), &anchor), None);
    }

    #[test]
    fn phase_for_cycle_day_matches_projection() {
        let calc = PhaseCalculator::default();
        let anchor = standard_anchor();

        assert_eq!(calc.phase_for_cycle_day(&anchor, 1), Some(Phase::Menstruation));
        assert_eq!(calc.phase_for_cycle_day(&anchor, 5), Some(Phase::Menstruation));
        assert_eq!(calc.phase_for_cycle_day(&anchor, 6), Some(Phase::Follicular));
        assert_eq!(calc.phase_for_cycle_day(&anchor, 15), Some(Phase::Ovulation));
        assert_eq!(calc.phase_for_cycle_day(&anchor, 16), Some(Phase::Luteal));
        assert_eq!(calc.phase_for_cycle_day(&anchor, 28), Some(Phase::Luteal));
        assert_eq!(calc.phase_for_cycle_day(&anchor, 29), None);
        assert_eq!(calc.phase_for_cycle_day(&anchor, 0), None);
    }

    #[test]
    fn shift_days_handles_both_directions() {
        assert_eq!(shift_days(date(2024, 1, 1), 31), Some(date(2024, 2, 1)));
        assert_eq!(shift_days(date(2024, 3, 1), -1), Some(date(2024, 2, 29)));
        assert_eq!(shift_days(date(2024, 3, 1), 0), Some(date(2024, 3, 1)));
    }
}
