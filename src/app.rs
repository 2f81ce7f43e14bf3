use crate::domain::{EditOutcome, EditSession, SortOrder, Stats, Task, TaskId, UiMode};
use crate::persistence::{save_settings, Settings, TaskRepository};
use crate::store::TaskStore;
use crate::ticker::{Elapsed, SessionTimer};
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, warn};

/// Screen regions from the last frame, used to resolve mouse clicks
#[derive(Debug, Clone, Copy, Default)]
pub struct HitAreas {
    pub add_input: Rect,
    pub add_button: Rect,
    /// Inside of the list block (rows only, no border)
    pub list_rows: Rect,
}

/// Main application state
pub struct AppState {
    pub store: TaskStore<Box<dyn TaskRepository>>,
    pub timer: SessionTimer,
    pub settings: Settings,
    settings_path: Option<PathBuf>,
    pub sort_order: SortOrder,
    pub ui_mode: UiMode,
    /// Text typed into the add-task field
    pub add_input: String,
    /// The single in-place edit slot
    pub edit: Option<EditSession>,
    /// Index into the sorted view
    pub selected_index: usize,
    pub list_state: ListState,
    pub hit_areas: HitAreas,
    /// Task and time of the last left click, for double-click detection
    pub last_click: Option<(TaskId, Instant)>,
}

impl AppState {
    pub fn new(
        store: TaskStore<Box<dyn TaskRepository>>,
        timer: SessionTimer,
        settings: Settings,
        settings_path: Option<PathBuf>,
    ) -> Self {
        Self {
            store,
            timer,
            sort_order: settings.sort_order,
            settings,
            settings_path,
            ui_mode: UiMode::Normal,
            add_input: String::new(),
            edit: None,
            selected_index: 0,
            list_state: ListState::default(),
            hit_areas: HitAreas::default(),
            last_click: None,
        }
    }

    /// Tasks in the order they are displayed
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.store.sorted_view(self.sort_order)
    }

    pub fn task_count(&self) -> usize {
        self.store.tasks().len()
    }

    pub fn stats(&self) -> Stats {
        self.store.stats()
    }

    pub fn elapsed(&self) -> Elapsed {
        self.timer.elapsed()
    }

    /// Id of the task under the selection
    pub fn selected_id(&self) -> Option<TaskId> {
        self.row_id(self.selected_index)
    }

    /// Id of the task displayed at `row`
    pub fn row_id(&self, row: usize) -> Option<TaskId> {
        self.visible_tasks().get(row).map(|t| t.id)
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.edit.as_ref().is_some_and(|e| e.task_id == id)
    }

    // ── Selection ──────────────────────────────────────────────────────────

    pub fn move_selection_up(&mut self) {
        self.commit_edit();
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        self.commit_edit();
        if self.selected_index + 1 < self.task_count() {
            self.selected_index += 1;
        }
    }

    /// Select a task by id, committing an edit open on a different task
    pub fn select_task(&mut self, id: TaskId) {
        if self.edit.is_some() && !self.is_editing(id) {
            self.commit_edit();
        }
        self.follow(id);
    }

    /// Keep the selection on `id` after the display order changed
    fn follow(&mut self, id: TaskId) {
        if let Some(pos) = self.visible_tasks().iter().position(|t| t.id == id) {
            self.selected_index = pos;
        }
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let count = self.task_count();
        if count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= count {
            self.selected_index = count - 1;
        }
    }

    // ── Row actions ────────────────────────────────────────────────────────

    /// Flip completion on the selected task
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.toggle(id);
        }
    }

    pub fn toggle(&mut self, id: TaskId) {
        if self.store.toggle(id) {
            self.follow(id);
        }
    }

    /// Delete the selected task
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.delete(id);
        }
    }

    pub fn delete(&mut self, id: TaskId) {
        if self.is_editing(id) {
            self.cancel_edit();
        }
        self.store.remove(id);
        self.clamp_selection();
    }

    /// Remove every completed task
    pub fn clear_completed(&mut self) -> usize {
        if let Some(edit) = &self.edit {
            let editing_done = self.store.get(edit.task_id).is_some_and(|t| t.completed);
            if editing_done {
                self.cancel_edit();
            }
        }
        let selected = self.selected_id();
        let removed = self.store.clear_completed();
        match selected {
            Some(id) if self.store.get(id).is_some() => self.follow(id),
            _ => self.clamp_selection(),
        }
        removed
    }

    // ── Sorting ────────────────────────────────────────────────────────────

    /// Switch display order and remember it for the next start
    pub fn set_sort(&mut self, order: SortOrder) {
        if self.sort_order == order {
            return;
        }
        let selected = self.selected_id();
        self.sort_order = order;
        if let Some(id) = selected {
            self.follow(id);
        }

        self.settings.sort_order = order;
        self.save_settings();
        debug!(order = order.name(), "Sort order changed");
    }

    fn save_settings(&self) {
        if let Some(path) = &self.settings_path {
            if let Err(e) = save_settings(path, &self.settings) {
                warn!("Failed to save settings: {:#}", e);
            }
        }
    }

    // ── Add-task input ─────────────────────────────────────────────────────

    pub fn focus_add_input(&mut self) {
        self.commit_edit();
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn leave_add_input(&mut self) {
        if self.ui_mode == UiMode::AddingTask {
            self.ui_mode = UiMode::Normal;
        }
    }

    pub fn add_input_push(&mut self, c: char) {
        self.add_input.push(c);
    }

    pub fn add_input_backspace(&mut self) {
        self.add_input.pop();
    }

    /// Add the typed task. Blank input leaves everything as it is.
    pub fn submit_add(&mut self) {
        if let Some(id) = self.store.add(&self.add_input) {
            self.add_input.clear();
            self.follow(id);
        }
    }

    // ── In-place editing ───────────────────────────────────────────────────

    pub fn begin_edit_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.begin_edit(id);
        }
    }

    /// Open `id` for editing. An edit open on another row is committed first.
    pub fn begin_edit(&mut self, id: TaskId) {
        if self.is_editing(id) {
            return;
        }
        self.commit_edit();

        let Some(task) = self.store.get(id) else {
            return;
        };
        self.edit = Some(EditSession::begin(task));
        self.ui_mode = UiMode::EditingTask;
        self.follow(id);
    }

    pub fn edit_mut(&mut self) -> Option<&mut EditSession> {
        self.edit.as_mut()
    }

    /// Close the edit slot, storing the draft unless it is blank
    pub fn commit_edit(&mut self) {
        let Some(edit) = self.edit.take() else {
            return;
        };
        if let EditOutcome::Commit { id, text } = edit.commit() {
            self.store.edit_text(id, &text);
            self.follow(id);
        }
        self.finish_edit();
    }

    /// Close the edit slot without storing anything
    pub fn cancel_edit(&mut self) {
        if let Some(edit) = self.edit.take() {
            edit.cancel();
        }
        self.finish_edit();
    }

    fn finish_edit(&mut self) {
        if self.ui_mode == UiMode::EditingTask {
            self.ui_mode = UiMode::Normal;
        }
    }

    /// Terminal lost focus: an open edit is committed like a blur
    pub fn handle_focus_lost(&mut self) {
        self.commit_edit();
    }

    /// Called once when the UI exits
    pub fn shutdown(&mut self) {
        self.commit_edit();
        self.timer.stop();
        tracing::info!(
            seconds = self.timer.elapsed().seconds,
            tasks = self.task_count(),
            "Session ended"
        );
    }
}
