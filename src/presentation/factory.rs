//! Store Factory
//!
//! Wires the farm store to its infrastructure dependencies.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::FarmStore;
use crate::config::Config;
use crate::domain::policies::MutationGuard;
use crate::domain::ports::SnapshotRepository;
use crate::error::FlockResult;
use crate::infrastructure::fs::default_data_path;
use crate::infrastructure::JsonSnapshotRepository;

/// Snapshot file: `--data`, then config `storage.path`, then the platform default
pub fn resolve_data_path(cli_data: Option<&Path>, config: &Config) -> PathBuf {
    cli_data
        .map(Path::to_path_buf)
        .or_else(|| config.storage.path.clone())
        .unwrap_or_else(default_data_path)
}

pub fn create_repository(path: PathBuf) -> Arc<dyn SnapshotRepository> {
    Arc::new(JsonSnapshotRepository::with_path(path))
}

pub fn create_guard(config: &Config) -> Arc<dyn MutationGuard> {
    config.store.guard.guard()
}

/// Open the store the CLI works on
pub fn open_store(cli_data: Option<&Path>, config: &Config) -> FlockResult<FarmStore> {
    let path = resolve_data_path(cli_data, config);
    tracing::trace!(path = %path.display(), guard = ?config.store.guard, "opening farm store");
    FarmStore::open(create_repository(path), create_guard(config))
}
