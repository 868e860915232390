//! Pick history list, newest first.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, ClickRegion};
use crate::events::Action;
use crate::tui::theme::*;

use super::truncate;

const TITLE: &str = " Pick History (won't be picked again) ";
const MAX_VISIBLE_ROWS: usize = 8;

/// Rows the history panel wants, borders included. Zero hides it.
pub fn history_height(app: &App) -> u16 {
    let history = app.engine.history();
    if history.is_empty() || app.is_animating() {
        return 0;
    }
    (history.len().min(MAX_VISIBLE_ROWS) + 2) as u16
}

pub fn render_history_panel(frame: &mut Frame, area: Rect, app: &mut App) {
    if area.height < 3 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(TEXT_DIM))
        .title(Span::styled(TITLE, Style::new().fg(TEXT_WHITE).bold()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let history = app.engine.history();
    let total = history.len();
    let number_width = total.to_string().len();
    let rows = inner.height as usize;

    let lines: Vec<Line> = history
        .numbered()
        .skip(app.history_scroll)
        .take(rows)
        .map(|(n, entry)| {
            let number = format!("#{:>width$} ", n, width = number_width);
            let stamp = if app.show_timestamps {
                format!(" {}", entry.time_label())
            } else {
                String::new()
            };
            let room = (inner.width as usize)
                .saturating_sub(number.chars().count() + stamp.chars().count());
            Line::from(vec![
                Span::styled(number, Style::new().fg(LOGO_LIGHT_BLUE)),
                Span::styled(truncate(&entry.item, room), Style::new().fg(TEXT_WHITE)),
                Span::styled(stamp, Style::new().fg(TEXT_DIM)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);

    if total > rows {
        app.interactions.register_scroll(
            "history",
            ClickRegion::new(area.x, area.y, area.width, area.height),
            Action::ScrollHistoryUp(1),
            Action::ScrollHistoryDown(1),
        );
    }
}
