//! Keyboard event handling by input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode};

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    // Quit works everywhere
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
    {
        return Action::Quit;
    }

    match app.input_mode {
        InputMode::Edit => handle_edit_mode(key),
        InputMode::Help => handle_help_mode(key),
    }
}

fn handle_edit_mode(key: KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        // Pick: Ctrl+Enter where the terminal reports it, with fallbacks
        KeyCode::Enter if ctrl || alt => Action::Pick,
        KeyCode::Char('p') if ctrl => Action::Pick,
        KeyCode::F(5) => Action::Pick,

        KeyCode::Esc => Action::Reset,
        KeyCode::Char('x') if ctrl => Action::ClearAll,
        KeyCode::Char('l') if ctrl => Action::LoadSamples,
        KeyCode::F(2) => Action::LoadSamples,
        KeyCode::Char('y') if ctrl => Action::CopyResult,
        KeyCode::F(1) => Action::OpenHelp,

        // Clipboard
        KeyCode::Char('v') if ctrl => Action::PasteClipboard,

        // History scrolling
        KeyCode::PageUp => Action::ScrollHistoryUp(5),
        KeyCode::PageDown => Action::ScrollHistoryDown(5),

        // Navigation - emacs style
        KeyCode::Char('a') if ctrl => Action::InputHome,
        KeyCode::Char('e') if ctrl => Action::InputEnd,
        KeyCode::Home => Action::InputHome,
        KeyCode::End => Action::InputEnd,

        // Word navigation
        KeyCode::Left if alt || ctrl => Action::InputWordLeft,
        KeyCode::Right if alt || ctrl => Action::InputWordRight,
        KeyCode::Char('b') if alt => Action::InputWordLeft,
        KeyCode::Char('f') if alt => Action::InputWordRight,

        // Word/line deletion
        KeyCode::Char('w') if ctrl => Action::InputDeleteWordBack,
        KeyCode::Backspace if alt => Action::InputDeleteWordBack,
        KeyCode::Char('d') if alt => Action::InputDeleteWordForward,
        KeyCode::Char('k') if ctrl => Action::InputKillLine,
        KeyCode::Char('u') if ctrl => Action::InputKillToStart,

        // Basic editing
        KeyCode::Enter => Action::InputNewline,
        KeyCode::Char('j') if ctrl => Action::InputNewline,
        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Delete => Action::InputDelete,
        KeyCode::Left => Action::InputLeft,
        KeyCode::Right => Action::InputRight,
        KeyCode::Up => Action::InputUp,
        KeyCode::Down => Action::InputDown,

        // Unbound control chords must not type letters
        KeyCode::Char(_) if ctrl => Action::None,
        KeyCode::Char(c) => Action::InputChar(c),

        _ => Action::None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') | KeyCode::Char('?') => {
            Action::CloseHelp
        }
        _ => Action::None,
    }
}
