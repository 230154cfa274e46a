use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, FormState, NotificationLevel};

/// Handle a key event.
/// Returns false when the app should quit.
pub fn handle_key_input(app: &mut App, key: KeyEvent) -> bool {
    // Ctrl+C quits from any state.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return false;
    }

    match app.form {
        FormState::Closed => handle_list_keys(app, key),
        _ => handle_form_keys(app, key),
    }
}

/// Keys while browsing the task list.
fn handle_list_keys(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => return false,
        KeyCode::Char('a') => app.toggle_form(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit(),
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Err(e) = app.delete_selected() {
                app.show_notification(format!("Delete failed: {e}"), NotificationLevel::Error);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        _ => {}
    }
    true
}

/// Keys while the entry form is open. Everything that is not submit/cancel
/// goes to the text field.
fn handle_form_keys(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => app.close_form(),
        KeyCode::Enter => {
            if let Err(e) = app.submit() {
                app.show_notification(format!("Save failed: {e}"), NotificationLevel::Error);
            }
        }
        _ => {
            app.input.input(key);
        }
    }
    true
}
