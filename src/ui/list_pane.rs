use crate::app::AppState;
use crate::domain::{checkbox, EditSession, Task};
use crate::input::mouse::{CHECKBOX_WIDTH, DELETE_WIDTH};
use crate::ui::styles::{
    border_style, checked_style, cursor_style, default_style, delete_style, done_style,
    editing_style, error_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the task list
pub fn render_list_pane(f: &mut Frame, app: &mut AppState, area: Rect) {
    let block = list_block(app);
    let inner = block.inner(area);
    app.hit_areas.list_rows = inner;

    let items: Vec<ListItem> = app
        .visible_tasks()
        .into_iter()
        .map(|task| {
            let edit = app.edit.as_ref().filter(|e| e.task_id == task.id);
            ListItem::new(create_task_line(task, edit, inner.width)).style(default_style())
        })
        .collect();

    let list = if items.is_empty() {
        List::new(vec![ListItem::new(Line::raw(
            "Nothing to do yet. Press a to add a task.",
        ))])
        .block(block)
    } else {
        List::new(items).block(block).highlight_style(selected_style())
    };

    if app.task_count() == 0 {
        app.list_state.select(None);
    } else {
        app.list_state.select(Some(app.selected_index));
    }
    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn list_block(app: &AppState) -> Block<'static> {
    let date = chrono::Local::now().format("%a %b %d");
    let mut title = vec![Span::styled(
        format!(" Todo ({}) · sorted {} ", date, app.sort_order.label()),
        title_style(),
    )];
    if app.store.last_save_failed() {
        title.push(Span::styled(" unsaved ", error_style()));
    }

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Line::from(title))
}

/// Create a single row
/// Format: [x] Buy milk ................. ×
fn create_task_line(task: &Task, edit: Option<&EditSession>, width: u16) -> Line<'static> {
    let mut spans = Vec::new();

    let box_style = if task.completed {
        checked_style()
    } else {
        default_style()
    };
    spans.push(Span::styled(checkbox(task).to_string(), box_style));
    spans.push(Span::raw(" "));

    let text_width = usize::from(width.saturating_sub(CHECKBOX_WIDTH + 1 + DELETE_WIDTH));
    let used = match edit {
        Some(edit) => push_draft(&mut spans, edit, text_width),
        None => {
            let text = truncate(&task.text, text_width);
            let used = text.chars().count();
            let style = if task.completed {
                done_style()
            } else {
                default_style()
            };
            spans.push(Span::styled(text, style));
            used
        }
    };

    let padding = text_width.saturating_sub(used);
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(" ×", delete_style()));

    Line::from(spans)
}

/// Draft with a block cursor. Returns the number of columns used.
fn push_draft(spans: &mut Vec<Span<'static>>, edit: &EditSession, max: usize) -> usize {
    let (before, after) = edit.split_at_cursor();
    let before = truncate(before, max.saturating_sub(1));
    let mut used = before.chars().count();
    spans.push(Span::styled(before, editing_style()));

    let mut rest = after.chars();
    let under_cursor = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
    spans.push(Span::styled(under_cursor, cursor_style()));
    used += 1;

    let after = truncate(rest.as_str(), max.saturating_sub(used));
    used += after.chars().count();
    spans.push(Span::styled(after, editing_style()));
    used
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_create_task_line() {
        let task = Task::new("Buy milk").unwrap();
        let text = line_text(&create_task_line(&task, None, 30));

        assert!(text.starts_with("[ ] Buy milk"));
        assert!(text.ends_with(" ×"));
        assert_eq!(text.chars().count(), 30);
    }

    #[test]
    fn test_completed_line_is_checked() {
        let mut task = Task::new("Done").unwrap();
        task.toggle();
        let line = create_task_line(&task, None, 20);
        assert!(line_text(&line).starts_with("[x] Done"));
        assert_eq!(line.spans[2].style, done_style());
    }

    #[test]
    fn test_long_text_is_truncated() {
        let task = Task::new("a very long task description indeed").unwrap();
        let text = line_text(&create_task_line(&task, None, 20));
        assert_eq!(text.chars().count(), 20);
        assert!(text.contains('…'));
        assert!(text.ends_with(" ×"));
    }

    #[test]
    fn test_editing_line_shows_draft_and_cursor() {
        let task = Task::new("walk").unwrap();
        let mut edit = EditSession::begin(&task);
        edit.insert_char('s');
        let line = create_task_line(&task, Some(&edit), 20);

        let text = line_text(&line);
        assert!(text.starts_with("[ ] walks "));
        assert_eq!(text.chars().count(), 20);
        assert_eq!(line.spans[3].style, cursor_style());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abc", 0), "");
    }
}
