//! Application state and logic.

use super::input::move_cursor;
use anyhow::Result;
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};
use tiktaktoe_core::{Alert, Board, GameEvent, GameSession, Player, Position, TurnOutcome};
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
pub struct App {
    session: GameSession,
    events: mpsc::UnboundedReceiver<GameEvent>,
    cursor: Position,
    status_message: String,
    computer_delay: Duration,
    computer_due: Option<Instant>,
}

impl App {
    /// Creates a new application around `session`.
    ///
    /// The computer replies `computer_delay` after each human move.
    pub fn new(mut session: GameSession, computer_delay: Duration) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        session.subscribe(move |event: &GameEvent| {
            // The receiver lives as long as the app that owns the session.
            let _ = tx.send(event.clone());
        });

        Self {
            session,
            events,
            cursor: Position::Center,
            status_message: "Your turn. Arrows to move, Enter or 1-9 to play.".to_string(),
            computer_delay,
            computer_due: None,
        }
    }

    /// Gets the current board.
    pub fn board(&self) -> &Board {
        self.session.board()
    }

    /// Gets the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// End-of-game dialog to display, if any.
    pub fn alert(&self) -> Option<Alert> {
        self.session.alert()
    }

    /// Whether the computer's reply is scheduled.
    pub fn computer_pending(&self) -> bool {
        self.computer_due.is_some()
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Result<AppAction> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(AppAction::Quit),
            KeyCode::Char('r') => self.restart(),
            _ if self.alert().is_some() => {
                if matches!(key, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.restart();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor)?,
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(position) = Position::from_key(c) {
                    self.cursor = position;
                    self.play(position)?;
                }
            }
            other => self.cursor = move_cursor(self.cursor, other),
        }
        self.pump_events();
        Ok(AppAction::Continue)
    }

    /// Plays the computer's reply once its delay has elapsed.
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        if self.computer_due.is_some_and(|due| now >= due) {
            self.computer_due = None;
            self.session.play_computer_move()?;
            self.pump_events();
        }
        Ok(())
    }

    /// Applies every queued session event to the status line.
    pub fn pump_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
        }
    }

    fn play(&mut self, position: Position) -> Result<()> {
        if self.session.place_human_move(position.to_index())? == TurnOutcome::AwaitingComputer {
            self.computer_due = Some(Instant::now() + self.computer_delay);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::MovePlaced(mov) => {
                let label = Position::from_index(mov.index).map_or("?", |p| p.label());
                self.status_message = match mov.player {
                    Player::Human => format!("You played {}", label),
                    Player::Computer => format!("Computer played {}. Your turn.", label),
                };
            }
            GameEvent::InteractionChanged(false) => {
                self.status_message = "Computer is thinking...".to_string();
            }
            GameEvent::InteractionChanged(true) => {}
            GameEvent::GameOver { alert, .. } => {
                self.status_message = format!(
                    "{} {} Press Enter to {}, 'q' to quit.",
                    alert.title,
                    alert.message,
                    alert.button.to_lowercase()
                );
            }
            GameEvent::Reset => {
                self.status_message = "New game. Your turn.".to_string();
            }
        }
    }

    fn restart(&mut self) {
        debug!("Restarting game");
        self.computer_due = None;
        self.session.reset_game();
    }
}
