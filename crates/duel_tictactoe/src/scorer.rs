//! One-ply move scoring.
//!
//! Every empty cell is scored by a fixed ladder of tiers:
//!
//! 1. **Win** ([`WIN_SCORE`]) - the move completes a line for the mover.
//! 2. **Block** ([`BLOCK_SCORE`]) - the opponent would complete a line on
//!    this cell.
//! 3. **Position** - a bonus depending on the [`Heuristic`] and on whether
//!    the cell is the center, a corner or an edge.
//!
//! Occupied cells are [`CellScore::Illegal`]. There is no lookahead.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use crate::position::{CellKind, Position};
use crate::rules::completes_line;
use crate::{Board, Mover};

/// Score of a move that wins on the spot.
pub const WIN_SCORE: i32 = 100;

/// Score of a move that takes the opponent's winning cell.
pub const BLOCK_SCORE: i32 = 80;

/// Wire value standing in for [`CellScore::Illegal`].
pub const ILLEGAL_SENTINEL: i32 = -1000;

/// Positional preference of a mover.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Heuristic {
    /// Center 10, corners 5, edges 3.
    CenterFirst,
    /// Center 0, corners -2, edges 4.
    EdgeFirst,
}

impl Heuristic {
    /// Returns the positional bonus for a cell of the given kind.
    pub fn positional_bonus(self, kind: CellKind) -> i32 {
        match (self, kind) {
            (Heuristic::CenterFirst, CellKind::Center) => 10,
            (Heuristic::CenterFirst, CellKind::Corner) => 5,
            (Heuristic::CenterFirst, CellKind::Edge) => 3,
            (Heuristic::EdgeFirst, CellKind::Center) => 0,
            (Heuristic::EdgeFirst, CellKind::Corner) => -2,
            (Heuristic::EdgeFirst, CellKind::Edge) => 4,
        }
    }
}

/// Desirability of playing a cell.
///
/// `Illegal` orders below every `Legal` score, so a maximum over a
/// vector only lands on `Illegal` when nothing is legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellScore {
    /// The cell is occupied.
    Illegal,
    /// The cell is free; higher is better.
    Legal(i32),
}

impl CellScore {
    /// Returns the score if the cell is legal.
    pub fn value(self) -> Option<i32> {
        match self {
            CellScore::Illegal => None,
            CellScore::Legal(score) => Some(score),
        }
    }

    /// Returns true for [`CellScore::Legal`].
    pub fn is_legal(self) -> bool {
        matches!(self, CellScore::Legal(_))
    }

    /// Returns the wire value, mapping `Illegal` to [`ILLEGAL_SENTINEL`].
    pub fn to_wire(self) -> i32 {
        self.value().unwrap_or(ILLEGAL_SENTINEL)
    }
}

impl Ord for CellScore {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellScore::Illegal, CellScore::Illegal) => Ordering::Equal,
            (CellScore::Illegal, CellScore::Legal(_)) => Ordering::Less,
            (CellScore::Legal(_), CellScore::Illegal) => Ordering::Greater,
            (CellScore::Legal(a), CellScore::Legal(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for CellScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for CellScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellScore::Illegal => write!(f, "illegal"),
            CellScore::Legal(score) => write!(f, "{score}"),
        }
    }
}

/// Scores playing `index` for `mover` under `heuristic`.
///
/// Pure: the board is only read, the win check runs on a copy.
/// Indices outside 0-8 are illegal.
#[instrument(level = "trace", skip(board))]
pub fn score(board: &Board, index: usize, mover: Mover, heuristic: Heuristic) -> CellScore {
    let Some(position) = Position::from_index(index) else {
        return CellScore::Illegal;
    };
    if !board.is_empty(index) {
        return CellScore::Illegal;
    }

    let score = if completes_line(board, index, mover) {
        WIN_SCORE
    } else if completes_line(board, index, mover.opponent()) {
        BLOCK_SCORE
    } else {
        heuristic.positional_bonus(position.kind())
    };

    trace!(index, score, "Scored cell");
    CellScore::Legal(score)
}
