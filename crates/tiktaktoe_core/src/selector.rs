//! Rule-based move selection for the computer opponent.
//!
//! Priority, first match wins:
//!
//! 1. complete a computer line,
//! 2. block a human line,
//! 3. take the center,
//! 4. pick any empty square at random.

use crate::error::EngineError;
use crate::rules::WIN_LINES;
use crate::types::{Board, CENTER, Cell, Player};
use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Which rule produced the computer's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Reason {
    /// Completes a computer line.
    #[display("win")]
    Win,
    /// Stops a human line.
    #[display("block")]
    Block,
    /// Takes the empty center.
    #[display("center")]
    Center,
    /// Uniform pick among empty squares.
    #[display("random")]
    Random,
}

/// Finds the empty square that would complete a line for `player`.
///
/// A line qualifies when `player` holds two of its squares and the third is
/// empty. Lines are scanned in [`WIN_LINES`] order and the first match wins.
pub fn find_completing_cell(board: &Board, player: Player) -> Option<usize> {
    let mark = Cell::Occupied(player);
    WIN_LINES.iter().find_map(|line| {
        let owned = line.iter().filter(|&&i| board.get(i) == Some(mark)).count();
        let mut empty = line.iter().filter(|&&i| board.get(i) == Some(Cell::Empty));
        match (owned, empty.next()) {
            (2, Some(&index)) => Some(index),
            _ => None,
        }
    })
}

/// Chooses the computer's move and the rule that chose it.
///
/// # Errors
///
/// Returns [`EngineError::EmptyMoveSpace`] if the board is full.
#[instrument(skip(board, rng))]
pub fn select_with_reason<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<(usize, Reason), EngineError> {
    let empty = board.empty_indices();
    if empty.is_empty() {
        return Err(EngineError::EmptyMoveSpace);
    }

    if let Some(index) = find_completing_cell(board, Player::Computer) {
        return Ok((index, Reason::Win));
    }
    if let Some(index) = find_completing_cell(board, Player::Human) {
        return Ok((index, Reason::Block));
    }
    if board.get(CENTER) == Some(Cell::Empty) {
        return Ok((CENTER, Reason::Center));
    }

    let index = *empty.choose(rng).ok_or(EngineError::EmptyMoveSpace)?;
    Ok((index, Reason::Random))
}

/// Chooses the computer's move.
///
/// # Errors
///
/// Returns [`EngineError::EmptyMoveSpace`] if the board is full.
pub fn select_computer_move<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<usize, EngineError> {
    select_with_reason(board, rng).map(|(index, _)| index)
}

/// The computer opponent: the selection rules plus its own random source.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    rng: ChaCha8Rng,
}

impl ComputerPlayer {
    /// Creates an opponent seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates an opponent whose random fallback is reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Picks a square for the computer on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyMoveSpace`] if the board is full.
    #[instrument(skip_all)]
    pub fn choose_move(&mut self, board: &Board) -> Result<usize, EngineError> {
        let (index, reason) = select_with_reason(board, &mut self.rng)?;
        debug!(index, %reason, "Computer chose square");
        Ok(index)
    }
}

impl Default for ComputerPlayer {
    fn default() -> Self {
        Self::new()
    }
}
