//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::game::Match;
use crate::types::Board;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the history onto an empty board must never hit an occupied
/// square and must reproduce the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<Match> for MonotonicBoardInvariant {
    fn holds(game: &Match) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if reconstructed.apply_move(mov.index, mov.player).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
