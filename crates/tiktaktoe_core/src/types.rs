//! Core domain types for tic-tac-toe.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// Index of the center square.
pub const CENTER: usize = 4;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// The person at the keyboard (always moves first).
    Human,
    /// The rule-based opponent.
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Mark drawn on the board for this player.
    pub fn mark(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Computer => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// A move: a player placing their mark at a board index.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_new::new,
)]
#[display("{player} -> {index}")]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The square (0-8) the player marks.
    pub index: usize,
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order, 0 at the top left and 8 at the
/// bottom right. An occupied square is only ever cleared by [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Builds a board from a row-major cell array.
    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Checks whether the square at `index` holds a mark.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidIndex`] if `index` is outside 0-8.
    pub fn is_occupied(&self, index: usize) -> Result<bool, EngineError> {
        self.get(index)
            .map(|cell| cell != Cell::Empty)
            .ok_or(EngineError::InvalidIndex(index))
    }

    /// Places `player`'s mark at `index`.
    ///
    /// The board is left untouched when the move is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidIndex`] for an index outside 0-8 and
    /// [`EngineError::CellOccupied`] when the square already holds a mark.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<(), EngineError> {
        if self.is_occupied(index)? {
            debug!(index, "Rejected move on occupied square");
            return Err(EngineError::CellOccupied(index));
        }
        self.cells[index] = Cell::Occupied(player);
        Ok(())
    }

    /// Clears every square.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; BOARD_SIZE];
    }

    /// Indices of all empty squares, in ascending order.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell != Cell::Empty).count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show the 1-9 key that plays them.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Occupied(player) => player.mark().to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Outcome of the game, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameState {
    /// No winner yet and squares remain.
    #[display("In progress")]
    InProgress,
    /// The human completed a line.
    #[display("Human wins")]
    HumanWin,
    /// The computer completed a line.
    #[display("Computer wins")]
    ComputerWin,
    /// Board full, nobody completed a line.
    #[display("Draw")]
    Draw,
}

impl GameState {
    /// Whether the game has ended.
    pub fn is_terminal(self) -> bool {
        self != GameState::InProgress
    }

    /// The terminal state in which `player` has won.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Human => GameState::HumanWin,
            Player::Computer => GameState::ComputerWin,
        }
    }
}
