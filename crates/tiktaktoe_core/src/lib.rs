//! Tic-tac-toe game logic: a human against a rule-based computer.
//!
//! # Architecture
//!
//! - **Board/Rules**: [`Board`], [`check_win`], [`check_draw`], [`outcome`]
//! - **Move Selector**: [`select_computer_move`] and the seedable
//!   [`ComputerPlayer`] (win, block, center, random)
//! - **Invariants & Contracts**: every move is checked against
//!   [`MoveContract`]
//! - **Session**: [`GameSession`], the state object a front end drives with
//!   [`GameSession::process_move`] and watches through [`GameObserver`]
//!
//! # Example
//!
//! ```
//! use tiktaktoe_core::{GameSession, GameState, TurnOutcome};
//!
//! let mut session = GameSession::seeded(42);
//! assert_eq!(session.process_move(0).unwrap(), TurnOutcome::InProgress);
//! // The computer answers a corner opening in the center.
//! assert!(session.board().is_occupied(4).unwrap());
//! assert_eq!(session.state(), GameState::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod alert;
mod error;
mod event;
mod game;
mod position;
mod selector;
mod session;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use alert::Alert;
pub use contracts::{Contract, MoveContract};
pub use error::EngineError;
pub use event::{GameEvent, GameObserver};
pub use game::Match;
pub use invariants::{Invariant, InvariantSet, InvariantViolation, MatchInvariants};
pub use position::Position;
pub use rules::{WIN_LINES, check_draw, check_win, outcome, winner};
pub use selector::{
    ComputerPlayer, Reason, find_completing_cell, select_computer_move, select_with_reason,
};
pub use session::{GameSession, TurnOutcome};
pub use types::{BOARD_SIZE, Board, CENTER, Cell, GameState, Move, Player};

/// Returns a fresh, empty board.
pub fn reset() -> Board {
    Board::new()
}
