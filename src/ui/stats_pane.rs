use crate::app::AppState;
use crate::domain::Stats;
use crate::ui::styles::{border_style, gauge_style, title_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the statistics panel: counts plus a progress gauge
pub fn render_stats_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let stats = app.stats();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Stats ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    f.render_widget(Paragraph::new(stats_lines(&stats)), chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .percent(u16::from(stats.percent))
        .label(format!("{}%", stats.percent));
    f.render_widget(gauge, chunks[1]);
}

fn stats_lines(stats: &Stats) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled("Total: ", title_style()),
            Span::raw(format!("{}   ", stats.total)),
            Span::styled("Active: ", title_style()),
            Span::raw(stats.active.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Completed: ", title_style()),
            Span::raw(format!("{}   ", stats.completed)),
            Span::styled("Progress: ", title_style()),
            Span::raw(format!("{}%", stats.percent)),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_lines() {
        let stats = Stats {
            total: 4,
            completed: 1,
            active: 3,
            percent: 25,
        };
        let text: String = stats_lines(&stats)
            .iter()
            .flat_map(|line| line.spans.iter().map(|s| s.content.to_string()))
            .collect();

        assert!(text.contains("Total: 4"));
        assert!(text.contains("Active: 3"));
        assert!(text.contains("Completed: 1"));
        assert!(text.contains("Progress: 25%"));
    }
}
