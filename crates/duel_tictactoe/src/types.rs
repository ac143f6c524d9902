//! Core domain types for the duel.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::scorer::Heuristic;

/// One of the two competing heuristics' sides.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Mover {
    /// Mover A (plays `X`, moves first).
    A,
    /// Mover B (plays `O`, moves second).
    B,
}

impl Mover {
    /// Returns the other mover.
    pub fn opponent(self) -> Self {
        match self {
            Mover::A => Mover::B,
            Mover::B => Mover::A,
        }
    }

    /// Returns the wire value of this mover's mark (`1` for A, `-1` for B).
    pub fn cell_value(self) -> i8 {
        match self {
            Mover::A => 1,
            Mover::B => -1,
        }
    }

    /// Returns the line sum that means this mover holds all three cells.
    pub fn win_total(self) -> i8 {
        3 * self.cell_value()
    }

    /// Returns the heuristic this mover is bound to.
    pub fn heuristic(self) -> Heuristic {
        match self {
            Mover::A => Heuristic::CenterFirst,
            Mover::B => Heuristic::EdgeFirst,
        }
    }

    /// Returns the display symbol of this mover's mark.
    pub fn symbol(self) -> char {
        match self {
            Mover::A => 'X',
            Mover::B => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a mover's mark.
    Occupied(Mover),
}

impl Cell {
    /// Returns the wire value of this cell.
    pub fn to_wire(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(mover) => mover.cell_value(),
        }
    }

    /// Parses a wire value (`0`, `1` or `-1`).
    pub fn from_wire(value: i8) -> Option<Self> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Occupied(Mover::A)),
            -1 => Some(Cell::Occupied(Mover::B)),
            _ => None,
        }
    }

    /// Returns the character used to render this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(mover) => mover.symbol(),
        }
    }
}

/// Error converting a wire array into a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum WireError {
    /// A cell value other than `-1`, `0` or `1`.
    #[display("Invalid wire value {value} at cell {index}")]
    InvalidCell {
        /// Index of the offending cell.
        index: usize,
        /// The value found there.
        value: i8,
    },
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from its wire form (0 = empty, 1 = A, -1 = B).
    #[instrument]
    pub fn from_wire(values: [i8; 9]) -> Result<Self, WireError> {
        let mut board = Self::new();
        for (index, value) in values.into_iter().enumerate() {
            board.cells[index] =
                Cell::from_wire(value).ok_or(WireError::InvalidCell { index, value })?;
        }
        Ok(board)
    }

    /// Returns the wire form of the board.
    pub fn to_wire(&self) -> [i8; 9] {
        self.cells.map(Cell::to_wire)
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Places a mover's mark at the given index.
    ///
    /// Indices outside 0-8 are ignored.
    pub fn place(&mut self, index: usize, mover: Mover) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::Occupied(mover);
        }
    }

    /// Returns a copy of the board with the mover's mark at `index`.
    pub fn with_mark(&self, index: usize, mover: Mover) -> Self {
        let mut next = *self;
        next.place(index, mover);
        next
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Iterates over the indices of empty cells in increasing order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
