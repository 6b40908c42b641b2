//! Storage Adapters
//!
//! Implementations of the `AnchorRepository` and `LogEntryRepository` ports.
//!
//! ## Available Adapters
//!
//! - **FileAnchorRepository / FileLogEntryRepository** - YAML files on disk
//! - **InMemoryAnchorRepository / InMemoryLogEntryRepository** - process memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use period_tracker::adapters::Repositories;
//!
//! let repos = Repositories::from_config(&config.storage);
//! ```

mod error;
mod file;
mod in_memory;

pub use error::StorageError;
pub use file::{FileAnchorRepository, FileLogEntryRepository};
pub use in_memory::{InMemoryAnchorRepository, InMemoryLogEntryRepository};

use std::sync::Arc;

use tracing::info;

use crate::config::{StorageBackend, StorageConfig};
use crate::ports::{AnchorRepository, LogEntryRepository};

/// The pair of repositories selected by configuration.
#[derive(Clone)]
pub struct Repositories {
    pub anchors: Arc<dyn AnchorRepository>,
    pub log_entries: Arc<dyn LogEntryRepository>,
}

impl Repositories {
    pub fn from_config(config: &StorageConfig) -> Self {
        info!(backend = ?config.backend, data_dir = %config.data_dir.display(), "Selecting storage backend");
        match config.backend {
            StorageBackend::Memory => Self {
                anchors: Arc::new(InMemoryAnchorRepository::new()),
                log_entries: Arc::new(InMemoryLogEntryRepository::new()),
            },
            StorageBackend::File => Self {
                anchors: Arc::new(FileAnchorRepository::new(&config.data_dir)),
                log_entries: Arc::new(FileLogEntryRepository::new(&config.data_dir)),
            },
        }
    }
}
