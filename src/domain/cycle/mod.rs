//! Cycle module - the cycle phase engine.
//!
//! # Components
//!
//! - `CycleAnchor` - Recorded period the projections start from
//! - `Phase` - Menstruation, follicular, ovulation, luteal
//! - `PhaseInterval` / `CycleProjection` - Projected date ranges per cycle
//! - `PhaseCalculator` - Projection, date classification, next-period prediction
//! - `hormone_profile` / `phase_guidance` - Fixed per-phase lookup tables
//!
//! Everything here is pure and stateless. No ports or adapters are needed
//! since there's no I/O.

mod anchor;
mod calculator;
mod guidance;
mod hormones;
mod phase;
mod projection;

pub use anchor::{CycleAnchor, DEFAULT_CYCLE_LENGTH, DEFAULT_PERIOD_LENGTH};
pub use calculator::{
    PhaseCalculator, DEFAULT_MONTHS_TO_PREDICT, DEFAULT_OVULATION_DAYS, LUTEAL_PHASE_DAYS,
    MAX_OVULATION_DAYS,
};
pub(crate) use calculator::shift_days;
pub use guidance::{phase_guidance, PhaseGuidance};
pub use hormones::{hormone_profile, Hormone, HormoneLevel, HormoneProfile};
pub use phase::Phase;
pub use projection::{CycleProjection, PhaseInterval};
