//! Button row and the counts line beneath it.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, ClickRegion, Counts};
use crate::events::Action;
use crate::tui::theme::*;

const BUTTON_GAP: u16 = 2;

/// Render `[ Pick Random Item ]  [ Load Samples ]  [ Reset ]` and register
/// a click region per enabled button.
pub fn render_controls(frame: &mut Frame, area: Rect, app: &mut App) {
    if area.height == 0 {
        return;
    }

    let pick = app.pick_button();
    let animating = app.is_animating();

    let pick_style = if pick.is_enabled() {
        Style::new().fg(PANEL_BG).bg(LOGO_MINT).add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(TEXT_DIM).bg(PANEL_BG)
    };
    let side_style = if animating {
        Style::new().fg(TEXT_DIM).bg(PANEL_BG)
    } else {
        Style::new().fg(TEXT_WHITE).bg(PANEL_BG)
    };

    let buttons = [
        (
            format!(" {} ", pick.label()),
            pick_style,
            pick.is_enabled().then_some(("pick_button", Action::Pick)),
        ),
        (
            " Load Samples ".to_string(),
            side_style,
            (!animating).then_some(("samples_button", Action::LoadSamples)),
        ),
        (
            " Reset ".to_string(),
            side_style,
            (!animating).then_some(("reset_button", Action::Reset)),
        ),
    ];

    let mut spans: Vec<Span> = vec![];
    let mut x = area.x;
    for (label, style, click) in buttons {
        let width = label.chars().count() as u16;
        if x + width > area.x + area.width {
            break;
        }
        if let Some((id, action)) = click {
            app.interactions
                .register_click(id, ClickRegion::new(x, area.y, width, 1), action);
        }
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" ".repeat(BUTTON_GAP as usize)));
        x += width + BUTTON_GAP;
    }

    spans.push(Span::styled(pick.hint(), Style::new().fg(TEXT_DIM)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// "3 of 5 items remaining (2 picked)"; the parenthetical only once something is picked.
pub fn status_text(counts: Counts) -> String {
    let noun = if counts.total == 1 { "item" } else { "items" };
    let mut text = format!("{} of {} {} remaining", counts.available, counts.total, noun);
    if counts.picked > 0 {
        text.push_str(&format!(" ({} picked)", counts.picked));
    }
    text
}

/// Counts line, followed by the latest notice if any.
pub fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        status_text(app.counts()),
        Style::new().fg(TEXT_DIM),
    )];
    if let Some(notice) = &app.notice {
        spans.push(Span::styled(" • ", Style::new().fg(TEXT_DIM)));
        spans.push(Span::styled(notice.clone(), Style::new().fg(LOGO_GOLD)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        let counts = Counts {
            total: 5,
            available: 3,
            picked: 2,
        };
        assert_eq!(status_text(counts), "3 of 5 items remaining (2 picked)");
    }

    #[test]
    fn test_status_text_singular() {
        let counts = Counts {
            total: 1,
            available: 1,
            picked: 0,
        };
        assert_eq!(status_text(counts), "1 of 1 item remaining");
    }

    #[test]
    fn test_status_text_hides_zero_picked() {
        let counts = Counts {
            total: 5,
            available: 5,
            picked: 0,
        };
        assert_eq!(status_text(counts), "5 of 5 items remaining");
    }
}
