//! History consistency invariant: the history explains the board.

use super::Invariant;
use crate::game::Match;
use crate::rules;
use crate::types::Board;

/// Invariant: one history entry per occupied square, and nothing was
/// played after the game ended.
pub struct HistoryConsistentInvariant;

impl Invariant<Match> for HistoryConsistentInvariant {
    fn holds(game: &Match) -> bool {
        if game.board().occupied_count() != game.history().len() {
            return false;
        }

        // Every prefix except the full history must be non-terminal.
        let mut replay = Board::new();
        let last = game.history().len();
        for (played, mov) in game.history().iter().enumerate() {
            if replay.apply_move(mov.index, mov.player).is_err() {
                return false;
            }
            if played + 1 < last && rules::outcome(&replay).is_terminal() {
                return false;
            }
        }
        true
    }

    fn description() -> &'static str {
        "History matches occupied squares and stops at the end of the game"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Move, Player};

    #[test]
    fn test_consistent_history_holds() {
        let mut game = Match::new();
        game.apply(Move::new(Player::Human, 0)).unwrap();
        game.apply(Move::new(Player::Computer, 4)).unwrap();
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_missing_history_violates() {
        let mut game = Match::new();
        game.apply(Move::new(Player::Human, 0)).unwrap();
        game.history.clear();
        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut game = Match::new();
        for (player, index) in [
            (Player::Human, 0),
            (Player::Computer, 3),
            (Player::Human, 1),
            (Player::Computer, 4),
            (Player::Human, 2),
            (Player::Computer, 5),
        ] {
            game.apply(Move::new(player, index)).unwrap();
        }
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
