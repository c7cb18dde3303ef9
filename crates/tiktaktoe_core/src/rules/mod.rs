//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here stores state: the game
//! outcome is always recomputed from the squares.

pub mod draw;
pub mod win;

pub use draw::check_draw;
pub use win::{WIN_LINES, check_win, winner};

use crate::types::{Board, GameState};
use tracing::instrument;

/// Derives the game state from the board.
///
/// Wins are checked before the draw, so a full board that also contains a
/// line is reported as a win.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> GameState {
    if let Some(player) = winner(board) {
        GameState::won_by(player)
    } else if check_draw(board) {
        GameState::Draw
    } else {
        GameState::InProgress
    }
}
