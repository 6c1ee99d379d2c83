//! JSON Snapshot Repository
//!
//! Persists the farm snapshot as a single pretty-printed JSON document.
//! Writes go through a temp file in the same directory and a rename, under an
//! exclusive lock on a sibling `.lock` file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::domain::entities::AppData;
use crate::domain::ports::{SnapshotRepository, StorageError};
use crate::infrastructure::fs::default_data_path;

pub struct JsonSnapshotRepository {
    path: PathBuf,
}

impl JsonSnapshotRepository {
    pub fn new() -> Self {
        Self {
            path: default_data_path(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn with_lock<T>(&self, f: impl FnOnce() -> Result<T, StorageError>) -> Result<T, StorageError> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(access_error)?;
        }

        let lock_file = fs::File::create(&lock_path).map_err(access_error)?;
        lock_file.lock_exclusive().map_err(access_error)?;

        let result = f();

        let _ = lock_file.unlock();
        result
    }

    fn write_atomically(&self, content: &str) -> Result<(), StorageError> {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => parent.to_path_buf(),
            None => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(access_error)?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(access_error)?;
        tmp.write_all(content.as_bytes()).map_err(access_error)?;
        tmp.as_file().sync_all().map_err(access_error)?;
        tmp.persist(&self.path)
            .map_err(|e| access_error(e.error))?;
        Ok(())
    }
}

impl Default for JsonSnapshotRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotRepository for JsonSnapshotRepository {
    fn load(&self) -> Result<Option<AppData>, StorageError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no snapshot on disk");
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(access_error)?;
        let data: AppData =
            serde_json::from_str(&content).map_err(|e| StorageError::Corrupted {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            path = %self.path.display(),
            sheep = data.sheep.len(),
            pens = data.pens.len(),
            "snapshot loaded"
        );
        Ok(Some(data))
    }

    fn save(&self, data: &AppData) -> Result<(), StorageError> {
        let content =
            serde_json::to_string_pretty(data).map_err(|e| StorageError::SerializationError {
                message: e.to_string(),
            })?;

        self.with_lock(|| self.write_atomically(&content))?;
        tracing::debug!(path = %self.path.display(), bytes = content.len(), "snapshot saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.with_lock(|| match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(access_error(e)),
        })?;
        let _ = fs::remove_file(self.lock_path());
        tracing::info!(path = %self.path.display(), "snapshot cleared");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

fn access_error(e: std::io::Error) -> StorageError {
    StorageError::AccessError {
        message: e.to_string(),
    }
}
