pub mod edit;
pub mod enums;
pub mod task;
pub mod views;

pub use edit::{EditOutcome, EditSession};
pub use enums::{SortOrder, UiMode};
pub use task::{Task, TaskId};
pub use views::{checkbox, compute_stats, sorted_view, Stats};
