//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AnchorRepository` - Latest recorded cycle anchor per user
//! - `LogEntryRepository` - Journal entries owned by users

mod anchor_repository;
mod log_entry_repository;

pub use anchor_repository::AnchorRepository;
pub use log_entry_repository::LogEntryRepository;
