//! Stepform TUI - a multi-step form wizard for the terminal
//!
//! Collects personal information and an address over a sequence of
//! validated steps, then shows a review of the submitted record.

mod app;
mod component;
mod config;
mod keymap;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use ui::terminal::TerminalSession;

fn main() -> Result<()> {
    init_logging();

    let config = match TuiConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("falling back to default config: {err:#}");
            TuiConfig::default()
        }
    };

    let mut app = App::new(config);
    let result = {
        let mut session = TerminalSession::enter()?;
        run_app(session.terminal_mut(), &mut app)
    };
    app.unmount();

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file; the terminal belongs to the UI
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stepform_tui=info"));

    let file = config::log_file_path().and_then(|path| {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        OpenOptions::new().create(true).append(true).open(path).ok()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match file {
        Some(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::sink))
            .init(),
    }
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.tick();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll faster while sliding or while a toast is counting down
        let poll_duration = if app.is_animating() || !app.toasts.is_empty() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
