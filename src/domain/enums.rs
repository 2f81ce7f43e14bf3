use serde::{Deserialize, Serialize};

/// Display ordering for the task list. Never changes storage order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Incomplete tasks first, insertion order within each group
    #[default]
    Status,
    /// Ascending by text
    Alpha,
}

impl SortOrder {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Alpha => "alpha",
        }
    }

    /// Label shown in the list title
    pub fn label(&self) -> &'static str {
        match self {
            Self::Status => "by status",
            Self::Alpha => "A → Z",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Navigating the list
    Normal,
    /// Typing into the add-task input
    AddingTask,
    /// A row is open for in-place editing
    EditingTask,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_default_is_status() {
        assert_eq!(SortOrder::default(), SortOrder::Status);
    }

    #[test]
    fn test_sort_order_serde_names() {
        assert_eq!(serde_json::to_string(&SortOrder::Alpha).unwrap(), "\"alpha\"");
        let parsed: SortOrder = serde_json::from_str("\"status\"").unwrap();
        assert_eq!(parsed, SortOrder::Status);
        assert_eq!(SortOrder::Alpha.name(), "alpha");
    }
}
