//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `cycle` - Cycle phase engine: anchor, projections, hormone and guidance tables
//! - `journal` - Daily log entries, statistics and the phase calendar

pub mod cycle;
pub mod foundation;
pub mod journal;
