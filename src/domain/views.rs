use super::enums::SortOrder;
use super::task::Task;
use std::cmp::Ordering;

/// Derived counts over the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
    /// Completion percentage, 0..=100
    pub percent: u8,
}

/// Compute statistics for a snapshot of the task list
pub fn compute_stats(tasks: &[Task]) -> Stats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();

    Stats {
        total,
        completed,
        active: total - completed,
        percent: completion_percent(completed, total),
    }
}

/// Round `completed / total * 100` to the nearest integer, halves rounded up
fn completion_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let scaled = (completed * 200 + total) / (2 * total);
    scaled.min(100) as u8
}

/// Return the tasks in display order without touching the stored order.
/// Both orderings use a stable sort, so ties keep insertion order.
pub fn sorted_view(tasks: &[Task], order: SortOrder) -> Vec<&Task> {
    let mut view: Vec<&Task> = tasks.iter().collect();
    match order {
        SortOrder::Status => view.sort_by_key(|t| t.completed),
        SortOrder::Alpha => view.sort_by(|a, b| collate(&a.text, &b.text)),
    }
    view
}

/// Dictionary-style comparison: case-folded first, raw text breaks ties
fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Checkbox glyph for a row
pub fn checkbox(task: &Task) -> &'static str {
    if task.completed {
        "[x]"
    } else {
        "[ ]"
    }
}
