//! Full-board detection.

use crate::{Board, Cell};
use tracing::instrument;

/// True once no cell is left to play.
///
/// The driver asks this only after the win check has failed, so a full
/// board reaching it ends the duel as a draw.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::{Duel, SequentialEvaluator};

    #[test]
    fn test_fresh_board_has_room() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_single_open_cell_keeps_board_open() {
        let board = Board::from_wire([1, -1, 1, -1, 1, 1, -1, 1, 0]).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_board_left_by_heuristic_duel_is_full_and_unwon() {
        let mut duel = Duel::new(SequentialEvaluator);
        duel.play().unwrap();
        let board = *duel.board();
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_full_board_may_still_carry_a_line() {
        // Filling the last cell can also complete a row; the win check runs first.
        let board = Board::from_wire([1, 1, 1, -1, -1, 1, 1, -1, -1]).unwrap();
        assert!(is_full(&board));
        assert!(check_winner(&board).is_some());
    }
}
