//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems.
//! Each adapter implements one or more port traits.

pub mod storage;

pub use storage::{
    FileAnchorRepository, FileLogEntryRepository, InMemoryAnchorRepository,
    InMemoryLogEntryRepository, Repositories, StorageError,
};
