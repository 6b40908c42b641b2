//! File-based Storage Adapters
//!
//! Stores anchors and log entries as YAML files on disk:
//!
//! ```text
//! <base>/anchors/<sha256(user_id)>.yaml
//! <base>/entries/<log_entry_id>.yaml
//! ```
//!
//! User ids are hashed so any id is a safe file name.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::cycle::CycleAnchor;
use crate::domain::foundation::{DomainError, LogEntryId, UserId};
use crate::domain::journal::LogEntry;
use crate::ports::{AnchorRepository, LogEntryRepository};

use super::StorageError;

/// Hex-encoded SHA-256 of the user id.
fn user_key(user_id: &UserId) -> String {
    Sha256::digest(user_id.as_str().as_bytes())
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

async fn write_yaml<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).await?;
    }
    let yaml =
        serde_yaml::to_string(value).map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
    fs::write(path, yaml).await?;
    Ok(())
}

async fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StorageError> {
    let yaml = match fs::read_to_string(path).await {
        Ok(yaml) => yaml,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    serde_yaml::from_str(&yaml)
        .map(Some)
        .map_err(|e| StorageError::DeserializationFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
}

/// Removes a file; returns false if it did not exist.
async fn remove_file(path: &Path) -> Result<bool, StorageError> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// File-based anchor storage
#[derive(Debug, Clone)]
pub struct FileAnchorRepository {
    base_path: PathBuf,
}

impl FileAnchorRepository {
    /// Create a repository rooted at `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let anchors = FileAnchorRepository::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn anchor_path(&self, user_id: &UserId) -> PathBuf {
        self.base_path
            .join("anchors")
            .join(format!("{}.yaml", user_key(user_id)))
    }
}

#[async_trait]
impl AnchorRepository for FileAnchorRepository {
    async fn get_latest_anchor(&self, user_id: &UserId) -> Result<Option<CycleAnchor>, DomainError> {
        Ok(read_yaml(&self.anchor_path(user_id)).await?)
    }

    async fn save_anchor(&self, user_id: &UserId, anchor: &CycleAnchor) -> Result<(), DomainError> {
        let path = self.anchor_path(user_id);
        write_yaml(&path, anchor).await?;
        debug!(user_id = %user_id, path = %path.display(), "Anchor written");
        Ok(())
    }

    async fn delete_anchor(&self, user_id: &UserId) -> Result<(), DomainError> {
        remove_file(&self.anchor_path(user_id)).await?;
        Ok(())
    }
}

/// File-based journal storage
#[derive(Debug, Clone)]
pub struct FileLogEntryRepository {
    base_path: PathBuf,
}

impl FileLogEntryRepository {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn entries_dir(&self) -> PathBuf {
        self.base_path.join("entries")
    }

    fn entry_path(&self, id: LogEntryId) -> PathBuf {
        self.entries_dir().join(format!("{}.yaml", id))
    }
}

#[async_trait]
impl LogEntryRepository for FileLogEntryRepository {
    async fn save(&self, entry: &LogEntry) -> Result<(), DomainError> {
        write_yaml(&self.entry_path(entry.id()), entry).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: LogEntryId) -> Result<Option<LogEntry>, DomainError> {
        Ok(read_yaml(&self.entry_path(id)).await?)
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<LogEntry>, DomainError> {
        let mut dir = match fs::read_dir(self.entries_dir()).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::from(e).into()),
        };

        let mut owned = Vec::new();
        while let Some(item) = dir.next_entry().await.map_err(StorageError::from)? {
            let path = item.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("yaml") {
                continue;
            }
            if let Some(entry) = read_yaml::<LogEntry>(&path).await? {
                if entry.is_owner(user_id) {
                    owned.push(entry);
                }
            }
        }

        owned.sort_by_key(|entry| (entry.date(), *entry.recorded_at()));
        Ok(owned)
    }

    async fn delete(&self, id: LogEntryId) -> Result<bool, DomainError> {
        Ok(remove_file(&self.entry_path(id)).await?)
    }
}
