//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents and are processed by `App::dispatch`.

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,
    /// Open help popup
    OpenHelp,
    /// Close help popup
    CloseHelp,

    // === Picking ===
    /// Commit a random pick and start the reveal animation
    Pick,
    /// Clear picks, history and the displayed result (keeps the list)
    Reset,
    /// Clear the list as well as picks and history
    ClearAll,
    /// Replace the list with the built-in samples and clear picks
    LoadSamples,
    /// Copy the last picked item to the clipboard
    CopyResult,

    // === Editor ===
    /// Add character at the cursor
    InputChar(char),
    /// Insert a line break
    InputNewline,
    /// Insert pasted text
    InputPaste(String),
    /// Paste from the system clipboard
    PasteClipboard,
    /// Delete character before cursor
    InputBackspace,
    /// Delete character at cursor
    InputDelete,
    /// Move cursor left
    InputLeft,
    /// Move cursor right
    InputRight,
    /// Move cursor up a line
    InputUp,
    /// Move cursor down a line
    InputDown,
    /// Move cursor to start of line
    InputHome,
    /// Move cursor to end of line
    InputEnd,
    /// Move cursor word left
    InputWordLeft,
    /// Move cursor word right
    InputWordRight,
    /// Delete word before cursor
    InputDeleteWordBack,
    /// Delete word after cursor
    InputDeleteWordForward,
    /// Delete to end of line
    InputKillLine,
    /// Delete to start of line
    InputKillToStart,

    // === History ===
    /// Scroll history up by n lines
    ScrollHistoryUp(usize),
    /// Scroll history down by n lines
    ScrollHistoryDown(usize),

    // === No-op ===
    /// No action to take
    None,
}

impl Action {
    /// Actions that mutate pick state and must wait for the animation to finish.
    pub fn is_blocked_while_animating(&self) -> bool {
        matches!(
            self,
            Action::Pick | Action::Reset | Action::ClearAll | Action::LoadSamples
        )
    }
}
