//! Core domain types for the game engine.

use serde::{Deserialize, Serialize};

/// A player's mark. X is the human and always moves first; O is the AI.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// The human player's mark.
    #[display("X")]
    X,
    /// The AI opponent's mark.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Cell occupied by a player's mark.
    Occupied(Mark),
}

/// 3x3 board, cells in row-major order: index `i` is row `i / 3`,
/// column `i % 3`.
///
/// Boards are plain `Copy` values. Every move produces a successor board
/// through [`Board::with_mark`] instead of mutating in place, so earlier
/// snapshots stay valid on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at `pos`, or `None` if `pos` is out of range.
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Checks whether `pos` names an empty cell. Out-of-range positions
    /// are not empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Checks whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Returns the successor board with `mark` written at `pos`.
    ///
    /// Callers validate `pos` first; writing to an occupied cell is an
    /// upstream bug, not a state this type represents.
    pub fn with_mark(self, pos: usize, mark: Mark) -> Self {
        let mut cells = self.cells;
        cells[pos] = Cell::Occupied(mark);
        Self { cells }
    }

    /// Positions of all empty cells, in board order.
    pub fn empty_positions(&self) -> Vec<usize> {
        (0..9).filter(|&pos| self.is_empty(pos)).collect()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Compact single-line rendering for logs: rows joined by `/`,
    /// empty cells as `.` (for example `X.O/.X./..O`).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                f.write_str("/")?;
            }
            for col in 0..3 {
                let glyph = match self.cells[row * 3 + col] {
                    Cell::Empty => '.',
                    Cell::Occupied(Mark::X) => 'X',
                    Cell::Occupied(Mark::O) => 'O',
                };
                write!(f, "{glyph}")?;
            }
        }
        Ok(())
    }
}

/// Current status of the game, re-derived from the board after every move.
///
/// The explicit tagged status replaces any `finished`/`winner` flag pair:
/// a won game always names its winner, and a drawn game cannot carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    InProgress,
    /// The given mark completed a line.
    Won(Mark),
    /// The board filled with no line complete.
    Draw,
}

impl GameStatus {
    /// True once the game no longer accepts moves.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The finished-game outcome, if the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(mark) => Some(Outcome::Won(*mark)),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }
}

/// Outcome of a finished game, the unit the score tally counts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Outcome {
    /// The given mark completed a line.
    #[display("{_0} wins")]
    Won(Mark),
    /// Neither mark completed a line.
    #[display("draw")]
    Draw,
}
