//! Terminal setup and teardown

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode plus alternate screen for as long as the session lives.
///
/// Dropping the session restores the terminal, also on error paths.
pub struct TerminalSession {
    terminal: CrosstermTerminal,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        undo_on_err(execute!(stdout, EnterAlternateScreen), || {
            let _ = disable_raw_mode();
        })?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = undo_on_err(Terminal::new(backend), || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        })?;
        tracing::debug!("terminal session started");
        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut CrosstermTerminal {
        &mut self.terminal
    }
}

/// Run `undo` if a setup step failed, then hand the result back
fn undo_on_err<T, E>(result: Result<T, E>, undo: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        undo();
    }
    result
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            tracing::warn!("failed to disable raw mode: {err}");
        }
        if let Err(err) = execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            tracing::warn!("failed to leave alternate screen: {err}");
        }
        if let Err(err) = self.terminal.show_cursor() {
            tracing::warn!("failed to restore cursor: {err}");
        }
        tracing::debug!("terminal session restored");
    }
}
