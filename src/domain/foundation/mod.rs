//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the period tracker domain.

mod command;
mod errors;
mod ids;
mod pain_level;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{LogEntryId, UserId};
pub use pain_level::PainLevel;
pub use timestamp::Timestamp;
