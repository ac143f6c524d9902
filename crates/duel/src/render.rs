//! Console rendering of turns and outcomes.

use std::io::{self, Write};

use duel_tictactoe::{Board, GameStatus, Turn};

/// Writes the move announcement followed by the board grid.
pub fn write_turn(out: &mut impl Write, turn: &Turn, board: &Board) -> io::Result<()> {
    writeln!(out, "{turn}")?;
    writeln!(out, "{board}")?;
    writeln!(out)
}

/// Writes the final line.
pub fn write_outcome(out: &mut impl Write, status: GameStatus) -> io::Result<()> {
    writeln!(out, "Outcome: {status}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_tictactoe::Mover;

    #[test]
    fn test_turn_block() {
        let board = Board::from_wire([0, 0, 0, 0, 1, 0, 0, 0, 0]).unwrap();
        let turn = Turn {
            number: 1,
            mover: Mover::A,
            index: 4,
            score: 10,
        };
        let mut out = Vec::new();
        write_turn(&mut out, &turn, &board).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Turn 1: mover A (X) plays cell 4 (Center) with score 10\n...\n.X.\n...\n\n"
        );
    }

    #[test]
    fn test_outcome_line() {
        let mut out = Vec::new();
        write_outcome(&mut out, GameStatus::Won(Mover::B)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Outcome: WinB\n");
    }
}
