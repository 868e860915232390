use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::clipboard::{self, ClipboardContent};
use crate::config::Config;
use crate::editor::Editor;
use crate::error::PickError;
use crate::events::Action;
use crate::items::{parse_items, sample_text};
use crate::log;
use crate::pick::PickEngine;
use crate::reveal::{RevealAnimator, RevealFrame};
use crate::tui::interaction::InteractionRegistry;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Edit, // Typing into the item list
    Help, // Help popup showing all hotkeys
}

/// Rectangular screen region for mouse hit testing
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

/// What the result panel shows when not animating
#[derive(Debug, Clone, PartialEq)]
pub enum Shown {
    /// A committed pick
    Item(String),
    /// Why the last pick attempt did not happen
    Message(PickError),
}

/// Idle, or revealing a pick that is already committed
#[derive(Debug, Clone)]
pub enum Selection {
    Idle,
    Animating {
        animator: RevealAnimator,
        started: Instant,
    },
}

/// State of the Pick button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickButton {
    Ready,
    Animating,
    NeedsItems,
    AllPicked,
}

impl PickButton {
    pub fn is_enabled(&self) -> bool {
        *self == PickButton::Ready
    }

    pub fn label(&self) -> &'static str {
        match self {
            PickButton::Ready | PickButton::NeedsItems => "Pick Random Item",
            PickButton::Animating => "Picking...",
            PickButton::AllPicked => "All Items Picked!",
        }
    }

    /// Tooltip-style hint shown next to the button
    pub fn hint(&self) -> &'static str {
        match self {
            PickButton::Ready | PickButton::Animating => "Ctrl+Enter",
            PickButton::NeedsItems => "Enter items first",
            PickButton::AllPicked => "Reset to start over",
        }
    }
}

/// Counts shown under the buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub available: usize,
    pub picked: usize,
}

pub struct App {
    pub input_mode: InputMode,
    pub editor: Editor,
    pub engine: PickEngine,
    pub selection: Selection,
    /// Result panel content outside of animations
    pub shown: Option<Shown>,
    /// One-line feedback for clipboard operations and ignored input
    pub notice: Option<String>,
    pub history_scroll: usize,
    pub show_timestamps: bool,
    pub should_quit: bool,
    /// Clickable regions, rebuilt on each render
    pub interactions: InteractionRegistry,
    rng: StdRng,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default(), None)
    }
}

impl App {
    pub fn new(config: &Config, initial_text: Option<String>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let editor = match initial_text {
            Some(text) => Editor::with_text(&text),
            None if config.load_sample_on_start() => Editor::with_text(&sample_text()),
            None => Editor::new(),
        };

        Self {
            input_mode: InputMode::Edit,
            editor,
            engine: PickEngine::new(),
            selection: Selection::Idle,
            shown: None,
            notice: None,
            history_scroll: 0,
            show_timestamps: config.show_timestamps(),
            should_quit: false,
            interactions: InteractionRegistry::new(),
            rng,
        }
    }

    /// Candidate list parsed from the editor text
    pub fn candidates(&self) -> Vec<String> {
        parse_items(self.editor.text())
    }

    pub fn counts(&self) -> Counts {
        let candidates = self.candidates();
        Counts {
            total: candidates.len(),
            available: self.engine.available_count(&candidates),
            picked: self.engine.picked_count(),
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.selection, Selection::Animating { .. })
    }

    pub fn pick_button(&self) -> PickButton {
        if self.is_animating() {
            return PickButton::Animating;
        }
        let counts = self.counts();
        if counts.total == 0 {
            PickButton::NeedsItems
        } else if counts.available == 0 {
            PickButton::AllPicked
        } else {
            PickButton::Ready
        }
    }

    /// Text for the result panel: the flashing item while animating,
    /// otherwise the committed item or the last error message. Before the
    /// first flash of a reveal, the previous result stays up.
    pub fn displayed_text(&self) -> Option<String> {
        let shown = || match &self.shown {
            Some(Shown::Item(item)) => Some(item.clone()),
            Some(Shown::Message(err)) => Some(err.to_string()),
            None => None,
        };
        match &self.selection {
            Selection::Animating { animator, .. } => animator
                .displayed()
                .map(str::to_string)
                .or_else(shown),
            Selection::Idle => shown(),
        }
    }

    /// The last item revealed, if the panel currently shows one
    pub fn result_item(&self) -> Option<&str> {
        match (&self.selection, &self.shown) {
            (Selection::Idle, Some(Shown::Item(item))) => Some(item),
            _ => None,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        self.dispatch_at(action, Instant::now());
    }

    /// Apply an action, with `now` as the time a pick animation starts.
    pub fn dispatch_at(&mut self, action: Action, now: Instant) {
        if action.is_blocked_while_animating() && self.is_animating() {
            log::log_event(&format!("Ignored {:?} while animating", action));
            return;
        }

        if !matches!(action, Action::None) {
            self.notice = None;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::OpenHelp => self.input_mode = InputMode::Help,
            Action::CloseHelp => self.input_mode = InputMode::Edit,

            Action::Pick => self.pick(now),
            Action::Reset => self.reset(),
            Action::ClearAll => {
                self.editor.clear();
                self.reset();
            }
            Action::LoadSamples => self.load_samples(),
            Action::CopyResult => self.copy_result(),

            Action::InputChar(c) => self.editor.input_char(c),
            Action::InputNewline => self.editor.input_newline(),
            Action::InputPaste(text) => self.editor.input_str(&text),
            Action::PasteClipboard => self.paste_clipboard(),
            Action::InputBackspace => self.editor.input_backspace(),
            Action::InputDelete => self.editor.input_delete(),
            Action::InputLeft => self.editor.input_left(),
            Action::InputRight => self.editor.input_right(),
            Action::InputUp => self.editor.input_up(),
            Action::InputDown => self.editor.input_down(),
            Action::InputHome => self.editor.input_home(),
            Action::InputEnd => self.editor.input_end(),
            Action::InputWordLeft => self.editor.input_word_left(),
            Action::InputWordRight => self.editor.input_word_right(),
            Action::InputDeleteWordBack => self.editor.input_delete_word_back(),
            Action::InputDeleteWordForward => self.editor.input_delete_word_forward(),
            Action::InputKillLine => self.editor.input_kill_line(),
            Action::InputKillToStart => self.editor.input_kill_to_start(),

            Action::ScrollHistoryUp(n) => {
                self.history_scroll = self.history_scroll.saturating_sub(n);
            }
            Action::ScrollHistoryDown(n) => {
                let max = self.engine.history().len().saturating_sub(1);
                self.history_scroll = (self.history_scroll + n).min(max);
            }

            Action::None => {}
        }
    }

    /// Advance the reveal animation to `now`.
    pub fn tick(&mut self, now: Instant) {
        let Selection::Animating { animator, started } = &mut self.selection else {
            return;
        };

        let elapsed = now.saturating_duration_since(*started);
        if animator.tick(elapsed, &mut self.rng) == RevealFrame::Finished {
            let item = animator.final_item().to_string();
            log::log_event(&format!("Reveal finished after {}ms", elapsed.as_millis()));
            self.shown = Some(Shown::Item(item));
            self.selection = Selection::Idle;
        }
    }

    /// Commit a pick, then start revealing it.
    fn pick(&mut self, now: Instant) {
        let candidates = self.candidates();
        match self.engine.pick(&candidates, &mut self.rng) {
            Ok(item) => {
                // Item text stays out of the log
                log::log_event(&format!(
                    "Picked ({} of {} remaining)",
                    self.engine.available_count(&candidates),
                    candidates.len()
                ));
                self.history_scroll = 0;
                self.selection = Selection::Animating {
                    animator: RevealAnimator::new(item, candidates),
                    started: now,
                };
            }
            Err(err) => {
                log::log_event(&format!("Pick rejected: {}", err));
                self.shown = Some(Shown::Message(err));
            }
        }
    }

    fn reset(&mut self) {
        self.engine.reset();
        self.shown = None;
        self.history_scroll = 0;
        log::log_event("Reset");
    }

    fn load_samples(&mut self) {
        self.editor.set_text(&sample_text());
        self.reset();
        log::log_event("Loaded sample items");
    }

    fn copy_result(&mut self) {
        let Some(item) = self.result_item().map(str::to_string) else {
            self.notice = Some("Nothing to copy yet".to_string());
            return;
        };

        match clipboard::write_clipboard(&item) {
            Ok(()) => self.notice = Some(format!("Copied \"{}\"", item)),
            Err(e) => {
                log::log(&format!("Clipboard write failed: {}", e));
                self.notice = Some("Clipboard unavailable".to_string());
            }
        }
    }

    fn paste_clipboard(&mut self) {
        match clipboard::read_clipboard() {
            Ok(ClipboardContent::Text(text)) => self.editor.input_str(&text),
            Ok(ClipboardContent::None) => {
                self.notice = Some("Clipboard has no text".to_string());
            }
            Err(e) => {
                log::log(&format!("Clipboard read failed: {}", e));
                self.notice = Some("Clipboard unavailable".to_string());
            }
        }
    }
}
