use crate::app::AppState;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Two clicks on the same task within this window open it for editing
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

/// Width of the checkbox column at the start of each row
pub const CHECKBOX_WIDTH: u16 = 3;

/// Width of the delete marker column at the end of each row
pub const DELETE_WIDTH: u16 = 2;

/// Handle mouse events
pub fn handle_mouse(app: &mut AppState, event: MouseEvent) {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            handle_left_click(app, event.column, event.row, Instant::now());
        }
        MouseEventKind::ScrollUp => app.move_selection_up(),
        MouseEventKind::ScrollDown => app.move_selection_down(),
        _ => {}
    }
}

/// Resolve a left click against the areas of the last rendered frame
pub fn handle_left_click(app: &mut AppState, column: u16, row: u16, now: Instant) {
    let hit = app.hit_areas;

    if contains(hit.add_button, column, row) {
        app.focus_add_input();
        app.submit_add();
        return;
    }

    if contains(hit.add_input, column, row) {
        app.focus_add_input();
        return;
    }

    // Anything else moves focus off the add field
    app.leave_add_input();

    if !contains(hit.list_rows, column, row) {
        app.last_click = None;
        app.commit_edit();
        return;
    }

    let index = app.list_state.offset() + usize::from(row - hit.list_rows.y);
    let Some(id) = app.row_id(index) else {
        app.last_click = None;
        app.commit_edit();
        return;
    };

    let x = column - hit.list_rows.x;
    let right_edge = hit.list_rows.width.saturating_sub(DELETE_WIDTH);

    if x < CHECKBOX_WIDTH {
        app.select_task(id);
        app.toggle(id);
        app.last_click = None;
    } else if x >= right_edge {
        app.select_task(id);
        app.delete(id);
        app.last_click = None;
    } else {
        let is_double = matches!(
            app.last_click,
            Some((last_id, at)) if last_id == id && now.duration_since(at) <= DOUBLE_CLICK_WINDOW
        );
        app.select_task(id);
        if is_double {
            app.begin_edit(id);
            app.last_click = None;
        } else {
            app.last_click = Some((id, now));
        }
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}
