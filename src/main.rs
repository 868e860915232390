mod app;
mod cli;
mod clipboard;
mod config;
mod editor;
mod error;
mod events;
mod items;
mod log;
mod pick;
mod reveal;
mod tui;

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::prelude::*;

use app::App;
use cli::Cli;
use config::IDLE_INTERVAL_MS;
use events::EventHandler;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    let (config, initial_text) = Cli::parse().resolve()?;

    log::log(&format!(
        "Config: frame {}ms, seed {:?}",
        config.frame_interval().as_millis(),
        config.seed
    ));

    let mut terminal = tui::setup_terminal()?;
    let mut app = App::new(&config, initial_text);

    let result = run_app(&mut terminal, &mut app, config.frame_interval()).await;

    tui::restore_terminal();
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::log(&format!("Exited with error: {:#}", e));
    }
    result
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    frame_interval: Duration,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let idle_interval = Duration::from_millis(IDLE_INTERVAL_MS);

    loop {
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        if app.should_quit {
            log::log("=== randpick exiting ===");
            return Ok(());
        }

        // Frame rate only matters while a reveal is running
        let timeout = if app.is_animating() {
            frame_interval
        } else {
            idle_interval
        };

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        app.dispatch(action);
                    }
                    Some(Err(e)) => {
                        log::log(&format!("Terminal event error: {}", e));
                    }
                    None => app.should_quit = true,
                }
            }

            _ = tokio::time::sleep(timeout) => {}
        }

        app.tick(Instant::now());
    }
}
