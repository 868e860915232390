use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::components::{
    history_height, render_controls, render_editor, render_help_popup, render_history_panel,
    render_result_panel, render_status, result_height,
};
use super::theme::*;
use crate::app::{App, InputMode};

const DESCRIPTION: &str =
    "Enter items one per line, then pick one at random. Picked items won't come up again.";
const PRIVACY_NOTE: &str = "Your data stays private - items are never saved or sent anywhere.";

pub fn render(frame: &mut Frame, app: &mut App) {
    app.interactions.clear();

    let area = frame.area();
    let result_rows = result_height(app, area.width);
    let history_rows = history_height(app);

    let layout = Layout::vertical([
        Constraint::Length(1),            // Logo
        Constraint::Length(1),            // Description
        Constraint::Length(1),            // Privacy note
        Constraint::Min(3),               // Editor
        Constraint::Length(1),            // Buttons
        Constraint::Length(1),            // Counts
        Constraint::Length(result_rows),  // Result
        Constraint::Length(history_rows), // History
        Constraint::Length(1),            // Hotkeys
    ])
    .split(area);

    render_logo(frame, layout[0]);
    frame.render_widget(
        Paragraph::new(Line::styled(DESCRIPTION, Style::new().fg(TEXT_WHITE))),
        layout[1],
    );
    frame.render_widget(
        Paragraph::new(Line::styled(PRIVACY_NOTE, Style::new().fg(TEXT_DIM).italic())),
        layout[2],
    );

    render_editor(frame, layout[3], app);
    render_controls(frame, layout[4], app);
    render_status(frame, layout[5], app);
    render_result_panel(frame, layout[6], app);
    if history_rows > 0 {
        render_history_panel(frame, layout[7], app);
    }
    render_hotkeys(frame, layout[8], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, area, app);
    }
}

fn render_logo(frame: &mut Frame, area: Rect) {
    let colors = [LOGO_CORAL, LOGO_GOLD, LOGO_LIGHT_BLUE, LOGO_MINT];
    let spans: Vec<Span> = "randpick"
        .chars()
        .enumerate()
        .map(|(i, c)| {
            Span::styled(
                c.to_string(),
                Style::new().fg(colors[i % colors.len()]).bold(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)).centered(), area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let key = |k: &'static str| Span::styled(k, Style::new().fg(TEXT_WHITE));
    let desc = |d: &'static str| Span::styled(d, Style::new().fg(TEXT_DIM));

    let hotkeys = match app.input_mode {
        InputMode::Edit => Line::from(vec![
            key("[C-Enter]"),
            desc(" pick • "),
            key("[Esc]"),
            desc(" reset • "),
            key("[C-l]"),
            desc(" samples • "),
            key("[C-y]"),
            desc(" copy • "),
            key("[F1]"),
            desc(" help • "),
            key("[C-q]"),
            desc(" quit"),
        ]),
        InputMode::Help => Line::from(vec![key("[Esc]"), desc(" close")]),
    };

    frame.render_widget(Paragraph::new(hotkeys), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::events::Action;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .chunks(80)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn seeded(text: &str) -> App {
        let config = Config {
            seed: Some(11),
            ..Config::default()
        };
        App::new(&config, Some(text.to_string()))
    }

    #[test]
    fn test_render_empty_app() {
        let mut app = App::default();
        let out = screen(&mut app);
        assert!(out.contains("randpick"));
        assert!(out.contains("Enter items here"));
        assert!(out.contains("0 of 0 items remaining"));
        assert!(!out.contains("picked)"));
        assert!(!out.contains("Pick History"));
    }

    #[test]
    fn test_render_registers_buttons() {
        let mut app = seeded("a\nb");
        screen(&mut app);
        // Pick, Load Samples and Reset
        assert_eq!(app.interactions.len(), 3);

        let mut empty = App::default();
        screen(&mut empty);
        // Pick is disabled without items
        assert_eq!(empty.interactions.len(), 2);
    }

    #[test]
    fn test_render_after_pick_shows_result_and_history() {
        let mut app = seeded("alpha\nbeta");
        app.dispatch(Action::Pick);
        let during = screen(&mut app);
        assert!(during.contains("Picking..."));
        assert!(!during.contains("Pick History"));

        app.selection = crate::app::Selection::Idle;
        let item = app.engine.history().latest().map(|e| e.item.clone()).unwrap();
        app.shown = Some(crate::app::Shown::Item(item.clone()));

        let after = screen(&mut app);
        assert!(after.contains("Selected Item:"));
        assert!(after.contains("Pick History (won't be picked again)"));
        assert!(after.contains(&format!("#1 {}", item)));
        assert!(after.contains("1 of 2 items remaining (1 picked)"));
    }

    #[test]
    fn test_render_error_message() {
        let mut app = seeded("");
        app.dispatch(Action::Pick);
        let out = screen(&mut app);
        assert!(out.contains("Please enter some items first!"));
        assert!(out.contains("Selected Item:"));
    }

    #[test]
    fn test_help_popup_captures_clicks() {
        let mut app = seeded("a");
        app.dispatch(Action::OpenHelp);
        let out = screen(&mut app);
        assert!(out.contains("Keyboard Shortcuts"));
        assert_eq!(app.interactions.handle_click(0, 0), Action::CloseHelp);
        assert_eq!(app.interactions.handle_click(40, 15), Action::None);
    }
}
