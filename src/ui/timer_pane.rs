use crate::app::AppState;
use crate::ui::styles::{border_style, default_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the session timer
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled("In app: ", title_style()),
            Span::styled(app.elapsed().to_string(), default_style()),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Session ", title_style())),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
