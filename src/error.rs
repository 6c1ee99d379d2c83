//! Error types for flockbook
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::ValidationError;
use crate::domain::policies::GuardViolation;
use crate::domain::ports::StorageError;

/// Result type alias for flockbook operations
pub type FlockResult<T> = Result<T, FlockError>;

/// Main error type for flockbook operations
#[derive(Error, Debug)]
pub enum FlockError {
    /// A record was missing a required field
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Reading or writing the snapshot failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A non-default guard refused the mutation
    #[error(transparent)]
    Guard(#[from] GuardViolation),

    /// Adding a sheep whose ear tag is already on file
    #[error("ear tag '{id}' is already registered")]
    DuplicateEarTag { id: String },

    /// Config file could not be parsed
    #[error("invalid config in {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
