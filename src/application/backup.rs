//! Backup export
//!
//! Writes the full snapshot as pretty JSON to a dated file. There is no
//! matching import; a backup is restored by pointing `--data` at it.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::NamedTempFile;

use crate::domain::entities::AppData;
use crate::domain::ports::StorageError;
use crate::error::FlockResult;

/// `sheep_farm_backup_YYYY-MM-DD.json`
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("sheep_farm_backup_{}.json", date.format("%Y-%m-%d"))
}

/// Write `data` into `dir`, creating it if needed. Returns the file written.
///
/// An existing backup from the same day is replaced through a temp file, so a
/// failed export never leaves a truncated backup behind.
pub fn export_snapshot(data: &AppData, dir: &Path, date: NaiveDate) -> FlockResult<PathBuf> {
    let content =
        serde_json::to_string_pretty(data).map_err(|e| StorageError::SerializationError {
            message: e.to_string(),
        })?;

    fs::create_dir_all(dir)?;
    let path = dir.join(backup_file_name(date));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(&path).map_err(|e| e.error)?;

    tracing::info!(path = %path.display(), sheep = data.sheep.len(), "backup exported");
    Ok(path)
}
