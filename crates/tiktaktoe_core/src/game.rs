//! A single game's board together with the moves that produced it.

use crate::error::EngineError;
use crate::rules;
use crate::types::{Board, GameState, Move, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Board plus move history for one game.
///
/// `Match` is the unit the invariants and contracts reason about: the board
/// must always be the replay of `history`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
}

impl Match {
    /// Creates an empty match.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Game state derived from the board.
    pub fn state(&self) -> GameState {
        rules::outcome(&self.board)
    }

    /// Player whose turn it is. The human always opens.
    pub fn to_move(&self) -> Player {
        match self.history.last() {
            Some(last) => last.player.opponent(),
            None => Player::Human,
        }
    }

    /// Places a mark and records it (no turn or game-over checks).
    ///
    /// Use [`crate::contracts::MoveContract`] or [`crate::GameSession`] for
    /// validated play.
    #[instrument(skip(self))]
    pub(crate) fn apply(&mut self, mov: Move) -> Result<(), EngineError> {
        self.board.apply_move(mov.index, mov.player)?;
        self.history.push(mov);
        Ok(())
    }

    /// Clears board and history.
    pub fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_opens() {
        let mut game = Match::new();
        assert_eq!(game.to_move(), Player::Human);
        game.apply(Move::new(Player::Human, 4)).unwrap();
        assert_eq!(game.to_move(), Player::Computer);
    }

    #[test]
    fn test_serializes_history() {
        let mut game = Match::new();
        game.apply(Move::new(Player::Human, 2)).unwrap();

        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["history"][0]["player"], "Human");
        assert_eq!(json["history"][0]["index"], 2);

        let back: Match = serde_json::from_value(json).unwrap();
        assert_eq!(back, game);
    }

    #[test]
    fn test_reset_clears_history() {
        let mut game = Match::new();
        game.apply(Move::new(Player::Human, 0)).unwrap();
        game.reset();
        assert_eq!(game, Match::new());
    }
}
