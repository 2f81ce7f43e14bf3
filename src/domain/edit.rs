use super::task::{normalize_text, Task, TaskId};

/// The single in-place edit slot. Owned as `Option<EditSession>` by the app,
/// so at most one row can be editing at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task_id: TaskId,
    pub draft: String,
    /// Cursor position as a char index into `draft`
    pub cursor: usize,
}

/// Result of closing an edit with confirm or focus loss
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Store this trimmed text on the task
    Commit { id: TaskId, text: String },
    /// Draft was blank; the stored text stays as it is
    Discard,
}

impl EditSession {
    /// Enter edit mode with the draft initialised from the task's current text
    pub fn begin(task: &Task) -> Self {
        Self {
            task_id: task.id,
            draft: task.text.clone(),
            cursor: task.text.chars().count(),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.draft.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        self.draft.remove(at);
        self.cursor -= 1;
    }

    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.draft.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Draft split at the cursor, for rendering
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.draft.split_at(self.byte_index(self.cursor))
    }

    /// Confirm the edit
    pub fn commit(self) -> EditOutcome {
        match normalize_text(&self.draft) {
            Some(text) => EditOutcome::Commit {
                id: self.task_id,
                text,
            },
            None => EditOutcome::Discard,
        }
    }

    /// Abandon the draft. Nothing is written back.
    pub fn cancel(self) {}

    fn len(&self) -> usize {
        self.draft.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.draft
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.draft.len())
    }
}
