use super::error::StoreError;
use super::files::{atomic_write, backup_file};
use super::TaskRepository;
use crate::domain::Task;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Fixed key the task list is stored under
pub const TASKS_KEY: &str = "todos";

/// Task list stored as one JSON blob at `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Repository for the default key inside `dir`
    pub fn new(dir: &Path) -> Self {
        Self::with_key(dir, TASKS_KEY)
    }

    pub fn with_key(dir: &Path, key: &str) -> Self {
        Self {
            path: dir.join(format!("{}.json", key)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskRepository for JsonFileRepository {
    fn load(&self) -> Result<Vec<Task>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|source| {
            match backup_file(&self.path) {
                Ok(backup) => warn!("Malformed task file kept as {}", backup.display()),
                Err(e) => warn!("Could not back up malformed task file: {:#}", e),
            }
            StoreError::Malformed {
                path: self.path.clone(),
                source,
            }
        })
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(tasks)?;
        atomic_write(&self.path, &json).map_err(|e| StoreError::Write(format!("{:#}", e)))
    }
}
