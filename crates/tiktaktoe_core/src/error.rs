//! Errors raised by the game engine.
//!
//! None of these occur in normal play. Each one means a caller broke the
//! engine's contract: asked about a square that does not exist, played on a
//! taken square, or asked the computer to move on a full board.

use crate::types::Player;

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    /// Board index outside 0-8.
    #[display("Index {} is outside the board (must be 0-8)", _0)]
    InvalidIndex(#[error(not(source))] usize),

    /// The square at the index is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] usize),

    /// The move selector was asked to move on a full board.
    #[display("No empty square left to move to")]
    EmptyMoveSpace,

    /// The game has already reached a terminal state.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(#[error(not(source))] Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
