pub mod error;
pub mod files;
pub mod json;
#[cfg(test)]
pub mod memory;
pub mod settings;

use crate::domain::Task;

pub use error::StoreError;
pub use files::{atomic_write, ensure_dir, get_data_dir, init_local_dir};
pub use json::JsonFileRepository;
#[cfg(test)]
pub use memory::MemoryRepository;
pub use settings::{load_settings_or_default, save_settings, settings_file, Settings};

/// Where the task list lives between runs
pub trait TaskRepository {
    /// Read the whole list. No stored value is an empty list, not an error.
    fn load(&self) -> Result<Vec<Task>, StoreError>;

    /// Replace the stored list with `tasks`
    fn save(&mut self, tasks: &[Task]) -> Result<(), StoreError>;
}

impl<T: TaskRepository + ?Sized> TaskRepository for Box<T> {
    fn load(&self) -> Result<Vec<Task>, StoreError> {
        (**self).load()
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), StoreError> {
        (**self).save(tasks)
    }
}
