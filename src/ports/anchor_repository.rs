//! AnchorRepository port for the per-user cycle anchor.

use async_trait::async_trait;

use crate::domain::cycle::CycleAnchor;
use crate::domain::foundation::{DomainError, UserId};

/// Repository for the latest recorded cycle anchor of each user.
///
/// Holds a single row per user: `save_anchor` replaces any previous anchor.
#[async_trait]
pub trait AnchorRepository: Send + Sync {
    /// Latest anchor for the user, `None` if nothing was recorded.
    async fn get_latest_anchor(&self, user_id: &UserId) -> Result<Option<CycleAnchor>, DomainError>;

    /// Create or replace the user's anchor.
    async fn save_anchor(&self, user_id: &UserId, anchor: &CycleAnchor) -> Result<(), DomainError>;

    /// Remove the user's anchor; a no-op when none exists.
    async fn delete_anchor(&self, user_id: &UserId) -> Result<(), DomainError>;
}
