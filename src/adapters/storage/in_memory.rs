//! In-Memory Storage Adapters
//!
//! Keeps anchors and log entries in process memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::cycle::CycleAnchor;
use crate::domain::foundation::{DomainError, LogEntryId, UserId};
use crate::domain::journal::LogEntry;
use crate::ports::{AnchorRepository, LogEntryRepository};

/// In-memory anchor storage, one anchor per user.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAnchorRepository {
    anchors: Arc<RwLock<HashMap<UserId, CycleAnchor>>>,
}

impl InMemoryAnchorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a stored anchor
    pub async fn len(&self) -> usize {
        self.anchors.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.anchors.read().await.is_empty()
    }
}

#[async_trait]
impl AnchorRepository for InMemoryAnchorRepository {
    async fn get_latest_anchor(&self, user_id: &UserId) -> Result<Option<CycleAnchor>, DomainError> {
        Ok(self.anchors.read().await.get(user_id).cloned())
    }

    async fn save_anchor(&self, user_id: &UserId, anchor: &CycleAnchor) -> Result<(), DomainError> {
        self.anchors
            .write()
            .await
            .insert(user_id.clone(), anchor.clone());
        Ok(())
    }

    async fn delete_anchor(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.anchors.write().await.remove(user_id);
        Ok(())
    }
}

/// In-memory journal storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLogEntryRepository {
    entries: Arc<RwLock<HashMap<LogEntryId, LogEntry>>>,
}

impl InMemoryLogEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored entries (useful for tests)
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl LogEntryRepository for InMemoryLogEntryRepository {
    async fn save(&self, entry: &LogEntry) -> Result<(), DomainError> {
        self.entries.write().await.insert(entry.id(), entry.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: LogEntryId) -> Result<Option<LogEntry>, DomainError> {
        Ok(self.entries.read().await.get(&id).cloned())
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<LogEntry>, DomainError> {
        let mut owned: Vec<LogEntry> = self
            .entries
            .read()
            .await
            .values()
            .filter(|entry| entry.is_owner(user_id))
            .cloned()
            .collect();
        owned.sort_by_key(|entry| (entry.date(), *entry.recorded_at()));
        Ok(owned)
    }

    async fn delete(&self, id: LogEntryId) -> Result<bool, DomainError> {
        Ok(self.entries.write().await.remove(&id).is_some())
    }
}
