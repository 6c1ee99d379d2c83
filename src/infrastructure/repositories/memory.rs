//! In-memory snapshot repository, used by tests and dry runs

use std::sync::Mutex;

use crate::domain::entities::AppData;
use crate::domain::ports::{SnapshotRepository, StorageError};

#[derive(Debug, Default)]
pub struct InMemorySnapshotRepository {
    data: Mutex<Option<AppData>>,
    saves: Mutex<usize>,
    fail_saves: bool,
}

impl InMemorySnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: AppData) -> Self {
        Self {
            data: Mutex::new(Some(data)),
            ..Self::default()
        }
    }

    /// Every `save` fails with an access error
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Option<AppData> {
        self.data.lock().ok().and_then(|d| d.clone())
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().map(|n| *n).unwrap_or(0)
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> StorageError {
    StorageError::AccessError {
        message: "in-memory store lock poisoned".to_string(),
    }
}

impl SnapshotRepository for InMemorySnapshotRepository {
    fn load(&self) -> Result<Option<AppData>, StorageError> {
        Ok(self.data.lock().map_err(poisoned)?.clone())
    }

    fn save(&self, data: &AppData) -> Result<(), StorageError> {
        if self.fail_saves {
            return Err(StorageError::AccessError {
                message: "storage unavailable".to_string(),
            });
        }
        *self.data.lock().map_err(poisoned)? = Some(data.clone());
        *self.saves.lock().map_err(poisoned)? += 1;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.data.lock().map_err(poisoned)? = None;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
