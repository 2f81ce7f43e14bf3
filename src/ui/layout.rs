use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub input_area: Rect,
    pub list_area: Rect,
    pub stats_area: Rect,
    pub timer_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Add-task input (3 rows, bordered)
/// - Task list (remaining space)
/// - Bottom: Stats (60%) | Timer (40%)
pub fn create_layout(area: Rect) -> MainLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(3), // Add-task input
            Constraint::Min(3),    // Task list
            Constraint::Length(6), // Stats + timer
        ])
        .split(area);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(vertical[3]);

    MainLayout {
        keybindings_area: vertical[0],
        input_area: vertical[1],
        list_area: vertical[2],
        stats_area: bottom[0],
        timer_area: bottom[1],
    }
}

/// Split the inside of the input block into the text field and the [+] button
pub fn split_input_row(inner: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(inner);
    (chunks[0], chunks[1])
}
