use crate::app::AppState;
use crate::domain::{SortOrder, UiMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_add_input_mode(app, key),
        UiMode::EditingTask => handle_editing_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        // Checkbox
        KeyCode::Char(' ') | KeyCode::Char('x') => app.toggle_selected(),

        // Delete
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),

        // Edit in place
        KeyCode::Char('e') | KeyCode::F(2) => app.begin_edit_selected(),

        // Focus the add-task field
        KeyCode::Char('a') | KeyCode::Char('i') => app.focus_add_input(),

        // Sort controls
        KeyCode::Char('s') => app.set_sort(SortOrder::Status),
        KeyCode::Char('o') => app.set_sort(SortOrder::Alpha),

        // Clear completed
        KeyCode::Char('C') => {
            app.clear_completed();
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,

        _ => {}
    }
    false
}

/// Handle keys while the add-task field has focus
fn handle_add_input_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        // Enter is the same as pressing [+]
        KeyCode::Enter => app.submit_add(),
        KeyCode::Esc => app.leave_add_input(),
        KeyCode::Backspace => app.add_input_backspace(),
        KeyCode::Char(c) if is_text_input(key) => app.add_input_push(c),
        _ => {}
    }
    false
}

/// Handle keys while a row is being edited
fn handle_editing_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Esc => app.cancel_edit(),

        // Leaving the row commits, like a blur
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),

        _ => {
            if let Some(edit) = app.edit_mut() {
                match key.code {
                    KeyCode::Backspace => edit.backspace(),
                    KeyCode::Delete => edit.delete(),
                    KeyCode::Left => edit.move_left(),
                    KeyCode::Right => edit.move_right(),
                    KeyCode::Home => edit.move_home(),
                    KeyCode::End => edit.move_end(),
                    KeyCode::Char(c) if is_text_input(key) => edit.insert_char(c),
                    _ => {}
                }
            }
        }
    }
    false
}

/// Plain or shifted characters only, chords are not text
fn is_text_input(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::create_test_app;
    use pretty_assertions::assert_eq;

    fn press(app: &mut AppState, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(app: &mut AppState, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn texts(app: &AppState) -> Vec<String> {
        app.visible_tasks().iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _) = create_test_app(&[]);
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(press(&mut app, KeyCode::Esc));
        assert!(handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn test_add_flow() {
        let (mut app, _) = create_test_app(&[]);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        // 'q' is text here, not quit
        type_str(&mut app, "quiet walk");
        assert!(!press(&mut app, KeyCode::Enter));
        type_str(&mut app, "second");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        assert_eq!(texts(&app), vec!["quiet walk", "second"]);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_backspace_in_add_input() {
        let (mut app, _) = create_test_app(&[]);
        press(&mut app, KeyCode::Char('i'));
        type_str(&mut app, "abc");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.add_input, "ab");
    }

    #[test]
    fn test_toggle_and_delete_keys() {
        let (mut app, _) = create_test_app(&["a", "b"]);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.store.tasks()[0].completed);

        press(&mut app, KeyCode::Char('x'));
        assert!(!app.store.tasks()[0].completed);

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(texts(&app), vec!["b"]);
    }

    #[test]
    fn test_sort_keys() {
        let (mut app, _) = create_test_app(&["b", "a"]);
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.sort_order, SortOrder::Alpha);
        assert_eq!(texts(&app), vec!["a", "b"]);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.sort_order, SortOrder::Status);
        assert_eq!(texts(&app), vec!["b", "a"]);
    }

    #[test]
    fn test_edit_keys() {
        let (mut app, _) = create_test_app(&["walk"]);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.ui_mode, UiMode::EditingTask);

        type_str(&mut app, " dog");
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        press(&mut app, KeyCode::Char('W'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(texts(&app), vec!["Walk dog"]);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_escape_cancels_edit() {
        let (mut app, _) = create_test_app(&["walk"]);
        press(&mut app, KeyCode::F(2));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Esc);

        assert_eq!(texts(&app), vec!["walk"]);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_clear_completed_key() {
        let (mut app, _) = create_test_app(&["a", "b"]);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('C'));
        assert_eq!(texts(&app), vec!["b"]);
    }

    #[test]
    fn test_chords_are_not_typed() {
        let (mut app, _) = create_test_app(&["walk"]);
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        let alt_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);

        press(&mut app, KeyCode::Char('a'));
        assert!(!handle_key(&mut app, ctrl_a));
        assert!(!handle_key(&mut app, alt_x));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT));
        assert_eq!(app.add_input, "B");
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('e'));
        handle_key(&mut app, ctrl_a);
        handle_key(&mut app, alt_x);
        press(&mut app, KeyCode::Enter);
        assert_eq!(texts(&app), vec!["walk"]);
    }
}
