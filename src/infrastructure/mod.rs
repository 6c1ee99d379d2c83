//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Data and config file locations
//! - `repositories/` - Snapshot repositories (JSON file, in-memory)

pub mod fs;
pub mod repositories;

pub use repositories::{InMemorySnapshotRepository, JsonSnapshotRepository};
