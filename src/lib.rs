//! flockbook - record keeping for a single sheep farm
//!
//! One snapshot holds the farm info and six collections (sheep, pens,
//! breeding, prevention, feed, disease, sales). Every change goes through
//! [`FarmStore`], which applies the cross-record rules and writes the whole
//! snapshot back to disk.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{export_snapshot, FarmStore};
pub use config::Config;
pub use domain::entities::AppData;
pub use error::{FlockError, FlockResult};
pub use infrastructure::{InMemorySnapshotRepository, JsonSnapshotRepository};
