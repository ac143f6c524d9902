//! Tic-tac-toe between two fixed one-ply heuristics.
//!
//! # Architecture
//!
//! - **Scorer**: pure per-cell score (win, block, positional bonus)
//! - **Evaluator**: scores all nine cells of a turn, on the rayon pool or
//!   sequentially
//! - **Driver**: the turn loop, from the empty board to a win or a draw
//!
//! # Example
//!
//! ```
//! use duel_tictactoe::{Duel, EvaluationMode, GameStatus};
//!
//! let mut duel = Duel::new(EvaluationMode::Parallel);
//! let outcome = duel.play().expect("a fresh game never stalls");
//! assert_ne!(outcome, GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod driver;
pub mod evaluator;
pub mod position;
pub mod record;
pub mod rules;
pub mod scorer;
mod types;

pub use driver::{Duel, DuelError, GameStatus, Turn};
pub use evaluator::{EvaluationMode, Evaluator, ParallelEvaluator, ScoreVector, SequentialEvaluator};
pub use position::{CellKind, Position};
pub use record::GameRecord;
pub use scorer::{BLOCK_SCORE, CellScore, Heuristic, ILLEGAL_SENTINEL, WIN_SCORE, score};
pub use types::{Board, Cell, Mover, WireError};
