//! Terminal UI for TikTakToe

mod app;
mod input;
mod ui;

pub use app::{App, AppAction};
pub use input::move_cursor;

use crate::config::Config;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tiktaktoe_core::GameSession;
use tracing::{debug, info, instrument, warn};

/// How long to wait for a key before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Restores the terminal when dropped, including on error paths.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Run the TUI until the player quits.
#[instrument(skip_all)]
pub async fn run_tui(config: &Config, session: GameSession) -> Result<()> {
    info!("Starting TikTakToe TUI");

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut app = App::new(session, config.computer_delay());

    loop {
        app.pump_events();
        terminal.draw(|f| ui::draw(f, &app))?;

        app.tick(Instant::now())?;

        // Keep the runtime responsive between key polls.
        tokio::task::yield_now().await;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code)? == AppAction::Quit
        {
            info!("User quit");
            break;
        }
    }

    Ok(())
}
