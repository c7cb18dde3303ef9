//! Draw detection logic for tic-tac-toe.

use super::win::check_win;
use crate::types::{Board, Player};
use tracing::instrument;

/// Checks for a draw: every square occupied and no line for either player.
#[instrument(skip(board))]
pub fn check_draw(board: &Board) -> bool {
    board.is_full() && !check_win(board, Player::Human) && !check_win(board, Player::Computer)
}
