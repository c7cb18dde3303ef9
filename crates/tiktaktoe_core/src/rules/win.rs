//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Player};
use tracing::instrument;

/// Winning combinations: rows, then columns, then diagonals.
///
/// The order is fixed; the move selector scans lines in this order, which
/// keeps its choice deterministic when several lines qualify.
#[rustfmt::skip]
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Checks whether `player` holds all three squares of any win line.
#[instrument(skip(board))]
pub fn check_win(board: &Board, player: Player) -> bool {
    let mark = Cell::Occupied(player);
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&index| board.get(index) == Some(mark)))
}

/// Returns the player holding a complete line, if any.
///
/// The human is checked first.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::Human, Player::Computer]
        .into_iter()
        .find(|&player| check_win(board, player))
}
