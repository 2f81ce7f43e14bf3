use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the keybindings hint bar for the current mode
pub fn render_keybindings(f: &mut Frame, mode: UiMode, area: Rect) {
    let paragraph = Paragraph::new(hints(mode)).style(hint_style());
    f.render_widget(paragraph, area);
}

fn hints(mode: UiMode) -> Line<'static> {
    let hints: &[&str] = match mode {
        UiMode::Normal => &[
            " ↑/↓ select   ",
            "a add   ",
            "space done   ",
            "e edit   ",
            "d delete   ",
            "s sort:status   ",
            "o sort:a-z   ",
            "C clear done   ",
            "q quit",
        ],
        UiMode::AddingTask => &[" Enter add   ", "Esc back to list"],
        UiMode::EditingTask => &[" Enter save   ", "Esc cancel   ", "←/→ move cursor"],
    };
    Line::from(hints.iter().map(|h| Span::raw(*h)).collect::<Vec<_>>())
}
