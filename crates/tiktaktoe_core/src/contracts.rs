//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} move {Q}.

use crate::error::EngineError;
use crate::game::Match;
use crate::invariants::{InvariantSet, MatchInvariants};
use crate::types::Move;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), EngineError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), EngineError>;
}

/// Precondition: the game has not ended.
pub struct GameInProgress;

impl GameInProgress {
    /// Fails with [`EngineError::GameOver`] on a terminal position.
    pub fn check(game: &Match) -> Result<(), EngineError> {
        if game.state().is_terminal() {
            Err(EngineError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target square exists and is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with `InvalidIndex` or `CellOccupied`.
    pub fn check(mov: &Move, game: &Match) -> Result<(), EngineError> {
        if game.board().is_occupied(mov.index)? {
            Err(EngineError::CellOccupied(mov.index))
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`EngineError::NotYourTurn`].
    pub fn check(mov: &Move, game: &Match) -> Result<(), EngineError> {
        if mov.player != game.to_move() {
            Err(EngineError::NotYourTurn(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Contract for move actions.
///
/// Preconditions: game in progress, square empty, player's turn.
/// Postconditions: every [`MatchInvariants`] member holds.
pub struct MoveContract;

impl Contract<Match, Move> for MoveContract {
    #[instrument(skip(game))]
    fn pre(game: &Match, action: &Move) -> Result<(), EngineError> {
        GameInProgress::check(game)?;
        SquareIsEmpty::check(action, game)?;
        PlayersTurn::check(action, game)?;
        Ok(())
    }

    fn post(_before: &Match, after: &Match) -> Result<(), EngineError> {
        MatchInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            EngineError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

impl MoveContract {
    /// Checks preconditions, applies the move, and (in debug builds) checks
    /// postconditions.
    ///
    /// # Errors
    ///
    /// Any precondition failure; the match is unchanged in that case.
    #[instrument(skip(game))]
    pub fn execute(game: &mut Match, action: Move) -> Result<(), EngineError> {
        Self::pre(game, &action)?;

        #[cfg(debug_assertions)]
        let before = game.clone();

        game.apply(action)?;

        #[cfg(debug_assertions)]
        Self::post(&before, game)?;

        Ok(())
    }
}
