//! Item editor component.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, InputMode};
use crate::tui::theme::*;

const PLACEHOLDER: &str = "Enter items here, one per line";

/// Render the editor. Lines whose item was already picked are dimmed.
pub fn render_editor(frame: &mut Frame, area: Rect, app: &App) {
    let is_editing = app.input_mode == InputMode::Edit;
    let (cursor_line, cursor_col) = app.editor.cursor_line_col();
    let position = format!(" Ln {}/{} ", cursor_line + 1, app.editor.line_count());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(if is_editing { LOGO_LIGHT_BLUE } else { TEXT_DIM }))
        .title(Span::styled(" Items ", Style::new().fg(TEXT_WHITE).bold()))
        .title_bottom(Line::styled(position, Style::new().fg(TEXT_DIM)).right_aligned());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let height = inner.height as usize;
    let width = inner.width as usize;
    if height == 0 || width == 0 {
        return;
    }

    if app.editor.is_empty() {
        let placeholder = Paragraph::new(Line::styled(PLACEHOLDER, Style::new().fg(TEXT_DIM)));
        frame.render_widget(placeholder, inner);
        if is_editing {
            frame.set_cursor_position(Position::new(inner.x, inner.y));
        }
        return;
    }

    // Keep the cursor inside the viewport
    let top = (cursor_line + 1).saturating_sub(height);
    let left = (cursor_col + 1).saturating_sub(width);

    let lines: Vec<Line> = app
        .editor
        .text()
        .split('\n')
        .skip(top)
        .take(height)
        .map(|raw| {
            let visible: String = raw.chars().skip(left).take(width).collect();
            let item = raw.trim();
            let style = if !item.is_empty() && app.engine.is_picked(item) {
                Style::new().fg(TEXT_DIM).add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::new().fg(TEXT_WHITE)
            };
            Line::from(Span::styled(visible, style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);

    if is_editing {
        let x = inner.x + (cursor_col - left) as u16;
        let y = inner.y + (cursor_line - top) as u16;
        frame.set_cursor_position(Position::new(x, y));
    }
}
