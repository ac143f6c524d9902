//! Win detection logic for tic-tac-toe.

use crate::{Board, Mover};
use strum::IntoEnumIterator;
use tracing::instrument;

/// The eight winning lines: rows, columns, diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Sums the wire values of a line.
fn line_sum(wire: &[i8; 9], line: &[usize; 3]) -> i8 {
    line.iter().map(|&index| wire[index]).sum()
}

/// Checks whether `mover` holds a complete line.
///
/// A line belongs to a mover when its wire values sum to the mover's
/// win total (+3 for A, -3 for B).
#[instrument(level = "trace", skip(board))]
pub fn has_won(board: &Board, mover: Mover) -> bool {
    let wire = board.to_wire();
    WIN_LINES
        .iter()
        .any(|line| line_sum(&wire, line) == mover.win_total())
}

/// Checks whether `mover` placing a mark at `index` would complete a line.
///
/// The board is not modified; an occupied `index` never completes a line.
#[instrument(level = "trace", skip(board))]
pub fn completes_line(board: &Board, index: usize, mover: Mover) -> bool {
    board.is_empty(index) && has_won(&board.with_mark(index, mover), mover)
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mover)` if a mover has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mover> {
    Mover::iter().find(|&mover| has_won(board, mover))
}
