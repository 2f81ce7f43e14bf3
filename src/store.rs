use crate::domain::task::normalize_text;
use crate::domain::{compute_stats, sorted_view, SortOrder, Stats, Task, TaskId};
use crate::persistence::TaskRepository;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Owns the task list. Loaded once from the repository, written back after
/// every mutation. Unknown ids and blank text are silent no-ops.
pub struct TaskStore<R: TaskRepository> {
    tasks: Vec<Task>,
    repo: R,
    last_save_failed: bool,
}

impl<R: TaskRepository> TaskStore<R> {
    /// Load the stored list. Unreadable or malformed data starts an empty list.
    pub fn open(repo: R) -> Self {
        let tasks = match repo.load() {
            Ok(tasks) => clean_loaded(tasks),
            Err(e) => {
                warn!("Starting with an empty task list: {}", e);
                Vec::new()
            }
        };
        debug!(count = tasks.len(), "Loaded tasks");

        Self {
            tasks,
            repo,
            last_save_failed: false,
        }
    }

    /// Tasks in storage (insertion) order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn sorted_view(&self, order: SortOrder) -> Vec<&Task> {
        sorted_view(&self.tasks, order)
    }

    pub fn stats(&self) -> Stats {
        compute_stats(&self.tasks)
    }

    /// Whether the most recent write to the repository failed
    pub fn last_save_failed(&self) -> bool {
        self.last_save_failed
    }

    /// Append a new task. Blank input is ignored.
    pub fn add(&mut self, raw: &str) -> Option<TaskId> {
        let task = Task::new(raw)?;
        let id = task.id;
        debug!(%id, "Adding task");
        self.tasks.push(task);
        self.persist();
        Some(id)
    }

    /// Remove the task with `id`. Returns false if there was none.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        debug!(%id, "Removing task");
        self.tasks.remove(pos);
        self.persist();
        true
    }

    /// Flip completion of the task with `id`
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        self.tasks[pos].toggle();
        debug!(%id, completed = self.tasks[pos].completed, "Toggled task");
        self.persist();
        true
    }

    /// Replace the text of `id` with trimmed `raw`. Blank edits are discarded.
    pub fn edit_text(&mut self, id: TaskId, raw: &str) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        if !self.tasks[pos].rename(raw) {
            debug!(%id, "Discarded blank edit");
            return false;
        }
        debug!(%id, "Edited task");
        self.persist();
        true
    }

    /// Drop every completed task in one write. Returns how many went.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        if removed > 0 {
            debug!(removed, "Cleared completed tasks");
            self.persist();
        }
        removed
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    fn persist(&mut self) {
        match self.repo.save(&self.tasks) {
            Ok(()) => self.last_save_failed = false,
            Err(e) => {
                warn!("Failed to save tasks: {}", e);
                self.last_save_failed = true;
            }
        }
    }
}

/// Trim loaded text, drop blank entries and keep the first task for each id
fn clean_loaded(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::new();
    tasks
        .into_iter()
        .filter_map(|mut task| {
            let Some(text) = normalize_text(&task.text) else {
                warn!(id = %task.id, "Dropping stored task with blank text");
                return None;
            };
            if !seen.insert(task.id) {
                warn!(id = %task.id, "Dropping stored task with duplicate id");
                return None;
            }
            task.text = text;
            Some(task)
        })
        .collect()
}
