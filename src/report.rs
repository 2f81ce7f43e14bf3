use crate::domain::{checkbox, sorted_view, SortOrder, Stats, Task};
use crate::ticker::Elapsed;

/// Plain-text task list for `todo list`
pub fn format_task_list(tasks: &[Task], order: SortOrder) -> String {
    if tasks.is_empty() {
        return "No tasks.\n".to_string();
    }

    let mut out = String::new();
    for task in sorted_view(tasks, order) {
        out.push_str(&format!("{} {}  ({})\n", checkbox(task), task.text, task.id.short()));
    }
    out
}

/// Statistics block for `todo stats` and the exit summary
pub fn format_stats(stats: &Stats) -> String {
    format!(
        "Total:     {}\nActive:    {}\nCompleted: {}\nProgress:  {}%\n",
        stats.total, stats.active, stats.completed, stats.percent
    )
}

/// One line printed after the UI closes
pub fn format_session_summary(stats: &Stats, elapsed: Elapsed) -> String {
    format!(
        "{} of {} tasks done ({}%) · you spent {} in the app",
        stats.completed, stats.total, stats.percent, elapsed
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::compute_stats;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_task_list_sorted() {
        let mut done = Task::new("write report").unwrap();
        done.toggle();
        let tasks = vec![done, Task::new("buy milk").unwrap()];

        let out = format_task_list(&tasks, SortOrder::Status);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("[ ] buy milk"));
        assert!(lines[1].starts_with("[x] write report"));
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_task_list(&[], SortOrder::Alpha), "No tasks.\n");
    }

    #[test]
    fn test_format_stats() {
        let mut a = Task::new("a").unwrap();
        a.toggle();
        let stats = compute_stats(&[a, Task::new("b").unwrap()]);
        assert_eq!(
            format_stats(&stats),
            "Total:     2\nActive:    1\nCompleted: 1\nProgress:  50%\n"
        );
    }

    #[test]
    fn test_session_summary() {
        let stats = compute_stats(&[Task::new("a").unwrap()]);
        let line = format_session_summary(&stats, Elapsed { seconds: 61 });
        assert_eq!(line, "0 of 1 tasks done (0%) · you spent 1 min 1 sec in the app");
    }
}
