//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod snapshot_repository;

pub use snapshot_repository::{SnapshotRepository, StorageError};
