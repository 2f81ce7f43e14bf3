pub mod input_bar;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod stats_pane;
pub mod styles;
pub mod timer_pane;

use crate::app::AppState;
use input_bar::render_input_bar;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::Frame;
use stats_pane::render_stats_pane;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &mut AppState) {
    let layout = create_layout(f.size());

    render_keybindings(f, app.ui_mode, layout.keybindings_area);
    render_input_bar(f, app, layout.input_area);
    render_list_pane(f, app, layout.list_area);
    render_stats_pane(f, app, layout.stats_area);
    render_timer_pane(f, app, layout.timer_area);
}
