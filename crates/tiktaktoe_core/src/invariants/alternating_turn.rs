//! Alternating turn invariant: human and computer take turns, human first.

use super::Invariant;
use crate::game::Match;
use crate::types::Player;

/// Invariant: moves alternate Human, Computer, Human, ...
pub struct AlternatingTurnInvariant;

impl Invariant<Match> for AlternatingTurnInvariant {
    fn holds(game: &Match) -> bool {
        let mut expected = Player::Human;
        for mov in game.history() {
            if mov.player != expected {
                return false;
            }
            expected = expected.opponent();
        }
        true
    }

    fn description() -> &'static str {
        "Players alternate turns, human first"
    }
}
