//! Keyboard event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') => Action::Quit,
        // Esc aborts a gesture first, quits otherwise
        KeyCode::Esc if app.drag_owner().is_some() => Action::CancelGesture,
        KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let app = test_app();
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_key_event(&app, key(KeyCode::Esc)), Action::Quit);
        assert_eq!(
            handle_key_event(&app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('c'))), Action::None);
    }

    #[test]
    fn test_escape_cancels_gesture() {
        let mut app = test_app();
        app.dispatch(Action::PointerDown {
            column: "size".to_string(),
            y: 100.0,
        })
        .unwrap();
        assert_eq!(handle_key_event(&app, key(KeyCode::Esc)), Action::CancelGesture);
    }
}
