//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{App, ClickRegion};
use crate::events::Action;
use crate::tui::interaction::InteractiveRegion;
use crate::tui::theme::*;

const PICKING: &[(&str, &str)] = &[
    ("C-Enter ", "Pick a random item"),
    ("C-p / F5", "Pick (terminals without C-Enter)"),
    ("Esc     ", "Reset picks and history"),
    ("C-x     ", "Clear list and picks"),
    ("C-l / F2", "Load sample items"),
    ("C-y     ", "Copy the picked item"),
];

const EDITING: &[(&str, &str)] = &[
    ("Enter   ", "New line"),
    ("C-v     ", "Paste from clipboard"),
    ("C-a/C-e ", "Line start / end"),
    ("C-w/A-d ", "Delete word back / forward"),
    ("C-k/C-u ", "Kill to end / start of line"),
    ("PgUp/Dn ", "Scroll history"),
];

fn shortcut_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {} ", key), Style::new().fg(TEXT_WHITE)),
        Span::styled(desc, Style::new().fg(TEXT_DIM)),
    ])
}

/// Render the help popup with keyboard shortcuts.
pub fn render_help_popup(frame: &mut Frame, area: Rect, app: &mut App) {
    let popup_width = 50u16;
    let popup_height = (PICKING.len() + EDITING.len() + 10) as u16;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![
        Line::styled("Keyboard Shortcuts", Style::new().fg(TEXT_WHITE).bold()),
        Line::raw(""),
        Line::styled("Picking", Style::new().fg(LOGO_LIGHT_BLUE).bold()),
    ];
    lines.extend(PICKING.iter().map(|&(k, d)| shortcut_line(k, d)));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Editing", Style::new().fg(LOGO_MINT).bold()));
    lines.extend(EDITING.iter().map(|&(k, d)| shortcut_line(k, d)));
    lines.push(Line::raw(""));

    lines.push(shortcut_line("C-q     ", "Quit"));
    lines.push(Line::from(vec![
        Span::styled("Press ", Style::new().fg(TEXT_DIM)),
        Span::styled("F1", Style::new().fg(TEXT_WHITE)),
        Span::styled(" or ", Style::new().fg(TEXT_DIM)),
        Span::styled("Esc", Style::new().fg(TEXT_WHITE)),
        Span::styled(" to close", Style::new().fg(TEXT_DIM)),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(LOGO_LIGHT_BLUE))
        .style(Style::new().bg(Color::Black));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);

    // Swallow clicks on the popup, close on clicks anywhere else
    app.interactions.register(
        InteractiveRegion::clickable(
            "help_backdrop",
            ClickRegion::new(area.x, area.y, area.width, area.height),
            Action::CloseHelp,
        )
        .with_priority(10),
    );
    app.interactions.register(
        InteractiveRegion::clickable(
            "help_popup",
            ClickRegion::new(
                popup_area.x,
                popup_area.y,
                popup_area.width,
                popup_area.height,
            ),
            Action::None,
        )
        .with_priority(20),
    );
}
