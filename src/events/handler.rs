//! Central event handler that turns terminal events into actions.

use crossterm::event::{Event, KeyEventKind};

use crate::app::{App, InputMode};

use super::Action;
use super::keyboard::handle_key_event;
use super::mouse::handle_mouse_event;

/// Central event handler for the application.
pub struct EventHandler;

impl EventHandler {
    /// Handle a crossterm event (keyboard, mouse, paste) and return an action.
    pub fn handle_event(app: &App, event: &Event) -> Action {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, *key),
            Event::Mouse(mouse) => handle_mouse_event(app, *mouse),
            Event::Paste(text) if app.input_mode == InputMode::Edit => {
                Action::InputPaste(text.clone())
            }
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_paste_goes_to_editor() {
        let app = App::default();
        let action = EventHandler::handle_event(&app, &Event::Paste("a\nb".to_string()));
        assert_eq!(action, Action::InputPaste("a\nb".to_string()));
    }

    #[test]
    fn test_paste_ignored_in_help() {
        let mut app = App::default();
        app.input_mode = InputMode::Help;
        let action = EventHandler::handle_event(&app, &Event::Paste("x".to_string()));
        assert_eq!(action, Action::None);
    }

    #[test]
    fn test_key_release_ignored() {
        let app = App::default();
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(EventHandler::handle_event(&app, &Event::Key(key)), Action::None);
    }
}
