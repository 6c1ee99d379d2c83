//! SnapshotRepository port
//!
//! Persists the whole farm snapshot as one document.

use std::path::PathBuf;

use crate::domain::entities::AppData;

pub trait SnapshotRepository: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet
    fn load(&self) -> Result<Option<AppData>, StorageError>;
    fn save(&self, data: &AppData) -> Result<(), StorageError>;
    /// Remove the durable copy; succeeding when there is none
    fn clear(&self) -> Result<(), StorageError>;
    /// Human-readable location for messages
    fn location(&self) -> String;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Failed to access farm data: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize farm data: {message}")]
    SerializationError { message: String },

    #[error(
        "farm data file corrupted: {path}\n  → Fix: Restore a sheep_farm_backup_*.json over it, or move it aside to start from the seed farm\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },
}
