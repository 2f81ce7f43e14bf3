use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier of a task, assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

/// Ids as found on disk. Older files used a millisecond timestamp number.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredId {
    Uuid(Uuid),
    Timestamp(u64),
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match StoredId::deserialize(deserializer)? {
            StoredId::Uuid(uuid) => Self(uuid),
            StoredId::Timestamp(millis) => Self::from_timestamp_id(millis),
        })
    }
}

impl TaskId {
    /// Generate a fresh, never-before-used id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Fixed mapping for numeric ids, so the same file always loads the same ids
    pub fn from_timestamp_id(millis: u64) -> Self {
        Self(Uuid::from_u64_pair(0, millis))
    }

    /// Short prefix for display in the CLI
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Trimmed, never empty
    pub text: String,
    /// Older files wrote this flag as `done`
    #[serde(default, alias = "done")]
    pub completed: bool,
}

impl Task {
    /// Create a task from raw user input. Returns `None` for blank input.
    pub fn new(raw: &str) -> Option<Self> {
        let text = normalize_text(raw)?;
        Some(Self {
            id: TaskId::new(),
            text,
            completed: false,
        })
    }

    /// Flip the completion flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Replace the text with the trimmed value of `raw`.
    /// Blank input is discarded and the current text kept; returns whether the text was replaced.
    pub fn rename(&mut self, raw: &str) -> bool {
        match normalize_text(raw) {
            Some(text) => {
                self.text = text;
                true
            }
            None => false,
        }
    }
}

/// Trim user input, `None` if nothing is left
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
