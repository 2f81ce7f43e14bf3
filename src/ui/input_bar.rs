use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::{
    layout::split_input_row,
    styles::{border_style, focused_border_style, hint_style, title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PLACEHOLDER: &str = "Add a task...";

/// Render the add-task field and its [+] button
pub fn render_input_bar(f: &mut Frame, app: &mut AppState, area: Rect) {
    let focused = app.ui_mode == UiMode::AddingTask;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            focused_border_style()
        } else {
            border_style()
        })
        .title(Span::styled(" New task ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (field_area, button_area) = split_input_row(inner);
    app.hit_areas.add_input = field_area;
    app.hit_areas.add_button = button_area;

    let field_line = if app.add_input.is_empty() && !focused {
        Line::from(Span::styled(PLACEHOLDER, hint_style()))
    } else {
        Line::from(vec![
            Span::raw("> "),
            Span::styled(visible_tail(&app.add_input, field_area.width), title_style()),
            if focused {
                Span::styled("█", title_style()) // Cursor
            } else {
                Span::raw("")
            },
        ])
    };
    f.render_widget(Paragraph::new(field_line), field_area);
    f.render_widget(Paragraph::new(Span::styled("[+]", title_style())), button_area);
}

/// Keep the end of long input visible next to the cursor
fn visible_tail(input: &str, width: u16) -> String {
    // "> " prefix and the cursor take three columns
    let room = usize::from(width.saturating_sub(3));
    let len = input.chars().count();
    if len <= room {
        input.to_string()
    } else {
        input.chars().skip(len - room).collect()
    }
}
