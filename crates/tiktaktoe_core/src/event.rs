//! Notifications a session sends to its observers.

use crate::alert::Alert;
use crate::types::{GameState, Move};

/// Something observable changed in a [`crate::GameSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was placed.
    MovePlaced(Move),
    /// The board started or stopped accepting human input.
    InteractionChanged(bool),
    /// The game reached a terminal state.
    GameOver {
        /// Final state.
        state: GameState,
        /// Dialog to show the player.
        alert: Alert,
    },
    /// The board was cleared for a new game.
    Reset,
}

/// Receives session events.
///
/// Implemented for any `FnMut(&GameEvent) + Send` closure, so a front end can
/// forward events into a channel without a wrapper type.
pub trait GameObserver: Send {
    /// Called after the session state has changed.
    fn notify(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent) + Send,
{
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}
