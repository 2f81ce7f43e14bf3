use super::error::StoreError;
use super::TaskRepository;
use crate::domain::Task;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the JSON file. Clones share the same contents,
/// so a test can keep a handle while the store owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    tasks: Arc<Mutex<Vec<Task>>>,
    saves: Arc<AtomicUsize>,
    fail_saves: Arc<AtomicBool>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-filled with tasks, as if loaded from disk
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let repo = Self::default();
        if let Ok(mut stored) = repo.tasks.lock() {
            *stored = tasks;
        }
        repo
    }

    /// Snapshot of what was last saved
    pub fn stored(&self) -> Vec<Task> {
        self.tasks.lock().map(|t| t.clone()).unwrap_or_default()
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Make subsequent saves fail
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

impl TaskRepository for MemoryRepository {
    fn load(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.stored())
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), StoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Write("memory repository set to fail".to_string()));
        }
        let mut stored = self
            .tasks
            .lock()
            .map_err(|_| StoreError::Write("memory repository poisoned".to_string()))?;
        *stored = tasks.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let repo = MemoryRepository::new();
        let mut handle = repo.clone();
        handle.save(&[Task::new("a").unwrap()]).unwrap();

        assert_eq!(repo.stored().len(), 1);
        assert_eq!(repo.save_count(), 1);
    }

    #[test]
    fn test_failing_saves() {
        let mut repo = MemoryRepository::new();
        repo.set_fail_saves(true);
        assert!(repo.save(&[]).is_err());
        assert_eq!(repo.save_count(), 0);
    }
}
