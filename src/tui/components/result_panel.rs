//! Result panel: the flashing candidate during a reveal, then the pick.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Selection, Shown};
use crate::reveal::RevealPhase;
use crate::tui::theme::*;

use super::wrap_text;

/// Rows the panel needs for its current text at `width` (borders included).
pub fn result_height(app: &App, width: u16) -> u16 {
    let inner = width.saturating_sub(2) as usize;
    match app.displayed_text() {
        Some(text) => wrap_text(&text, inner).len() as u16 + 2,
        None if app.is_animating() => 3,
        None => 0,
    }
}

pub fn render_result_panel(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }

    let (title, text_style) = match (&app.selection, &app.shown) {
        (Selection::Animating { started, .. }, _) => {
            let title = match RevealPhase::at(started.elapsed()) {
                Some(phase) => format!(" Picking... ({}) ", phase.label()),
                None => " Picking... ".to_string(),
            };
            (title, Style::new().fg(TEXT_DIM))
        }
        (Selection::Idle, Some(Shown::Message(_))) => {
            (" Selected Item: ".to_string(), Style::new().fg(LOGO_CORAL))
        }
        (Selection::Idle, _) => (
            " Selected Item: ".to_string(),
            Style::new().fg(LOGO_GOLD).add_modifier(Modifier::BOLD),
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(LOGO_GOLD))
        .title(Span::styled(title, Style::new().fg(TEXT_WHITE).bold()))
        .style(Style::new().bg(PANEL_BG));
    let inner_width = block.inner(area).width as usize;

    let lines: Vec<Line> = app
        .displayed_text()
        .map(|text| wrap_text(&text, inner_width))
        .unwrap_or_default()
        .into_iter()
        .map(|l| Line::styled(l, text_style))
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
