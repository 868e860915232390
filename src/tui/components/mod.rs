//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `editor_view` - Multi-line item editor with picked items dimmed
//! - `result_panel` - Flashing item during the reveal, then the pick or an error message
//! - `history_panel` - Numbered pick history, newest first
//! - `controls` - Pick / Load Samples / Reset buttons and the counts line
//! - `help_popup` - Help overlay with keybindings

mod controls;
mod editor_view;
mod help_popup;
mod history_panel;
mod result_panel;

// Re-export all render functions for use in ui.rs
pub use controls::{render_controls, render_status};
pub use editor_view::render_editor;
pub use help_popup::render_help_popup;
pub use history_panel::{history_height, render_history_panel};
pub use result_panel::{render_result_panel, result_height};

/// Wrap text to fit within width, preserving words where possible.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut result = vec![];

    for line in text.split('\n') {
        if line.is_empty() {
            result.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_char_count = 0;

        for word in line.split(' ') {
            let word_char_count = word.chars().count();

            if !current_line.is_empty() && current_char_count + 1 + word_char_count <= width {
                current_line.push(' ');
                current_line.push_str(word);
                current_char_count += 1 + word_char_count;
                continue;
            }

            if !current_line.is_empty() {
                result.push(std::mem::take(&mut current_line));
            }

            // Hard-split words longer than the line
            let mut remaining: Vec<char> = word.chars().collect();
            while remaining.len() > width {
                let rest = remaining.split_off(width);
                result.push(remaining.into_iter().collect());
                remaining = rest;
            }
            current_char_count = remaining.len();
            current_line = remaining.into_iter().collect();
        }

        if !current_line.is_empty() {
            result.push(current_line);
        }
    }

    if result.is_empty() {
        result.push(String::new());
    }

    result
}

/// Truncate to `max` chars, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let kept: String = text.chars().take(max - 1).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text() {
        assert_eq!(wrap_text("Tom Hanks", 20), vec!["Tom Hanks"]);
    }

    #[test]
    fn test_wrap_at_word_boundary() {
        assert_eq!(
            wrap_text("Leonardo DiCaprio rocks", 10),
            vec!["Leonardo", "DiCaprio", "rocks"]
        );
    }

    #[test]
    fn test_wrap_splits_long_word() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_zero_width() {
        assert_eq!(wrap_text("abc", 0), vec!["abc"]);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Scarlett Johansson", 8), "Scarlet…");
        assert_eq!(truncate("x", 0), "");
    }
}
