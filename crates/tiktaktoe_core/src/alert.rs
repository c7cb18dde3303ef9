//! End-of-game notifications shown to the player.

use crate::types::GameState;
use serde::Serialize;

/// Text for the dialog that ends a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Alert {
    /// Dialog title.
    pub title: &'static str,
    /// Dialog body.
    pub message: &'static str,
    /// Label of the button that starts the next game.
    pub button: &'static str,
}

impl Alert {
    /// Shown when the human completes a line.
    pub const HUMAN_WIN: Alert = Alert {
        title: "You Win!",
        message: "You beat the computer. Well done!",
        button: "Play again",
    };

    /// Shown when the computer completes a line.
    pub const COMPUTER_WIN: Alert = Alert {
        title: "You Lost!",
        message: "Better luck next time",
        button: "Play again",
    };

    /// Shown on a full board with no line.
    pub const DRAW: Alert = Alert {
        title: "Draw!",
        message: "It's a draw",
        button: "Try again",
    };

    /// Alert for a game state; `None` while the game is in progress.
    pub fn for_state(state: GameState) -> Option<Alert> {
        match state {
            GameState::InProgress => None,
            GameState::HumanWin => Some(Self::HUMAN_WIN),
            GameState::ComputerWin => Some(Self::COMPUTER_WIN),
            GameState::Draw => Some(Self::DRAW),
        }
    }
}
