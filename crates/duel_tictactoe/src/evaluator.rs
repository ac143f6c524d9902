//! Per-turn evaluation of all nine cells.
//!
//! Each cell is scored independently against the same board snapshot and
//! written to its own slot, so the parallel and sequential evaluators
//! produce identical vectors.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::scorer::{CellScore, Heuristic, score};
use crate::{Board, Mover};

/// Scores for all nine cells of one turn, indexed by cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreVector([CellScore; 9]);

impl ScoreVector {
    /// Wraps raw cell scores.
    pub fn new(scores: [CellScore; 9]) -> Self {
        Self(scores)
    }

    /// Returns the score of one cell.
    pub fn get(&self, index: usize) -> Option<CellScore> {
        self.0.get(index).copied()
    }

    /// Returns all scores.
    pub fn scores(&self) -> &[CellScore; 9] {
        &self.0
    }

    /// Returns the first cell holding the highest legal score.
    ///
    /// Cells are scanned in increasing index order and a later cell only
    /// replaces the current best when strictly greater, so ties go to the
    /// lowest index. `None` when every cell is illegal.
    pub fn best(&self) -> Option<(usize, i32)> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.value().map(|score| (index, score)))
            .fold(None, |best, (index, score)| match best {
                Some((_, best_score)) if best_score >= score => best,
                _ => Some((index, score)),
            })
    }

    /// Returns the wire form (illegal cells carry the sentinel).
    pub fn to_wire(&self) -> [i32; 9] {
        self.0.map(CellScore::to_wire)
    }
}

/// Produces the score vector for one turn.
pub trait Evaluator {
    /// Scores every cell of `board` for `mover` under `heuristic`.
    fn evaluate(&self, board: &Board, mover: Mover, heuristic: Heuristic) -> ScoreVector;
}

/// Scores the nine cells concurrently on the rayon pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelEvaluator;

impl Evaluator for ParallelEvaluator {
    #[instrument(skip(self, board))]
    fn evaluate(&self, board: &Board, mover: Mover, heuristic: Heuristic) -> ScoreVector {
        let mut slots = [CellScore::Illegal; 9];
        slots
            .par_iter_mut()
            .enumerate()
            .for_each(|(index, slot)| *slot = score(board, index, mover, heuristic));
        debug!(scores = ?slots, "Parallel evaluation complete");
        ScoreVector(slots)
    }
}

/// Scores the nine cells one after another.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialEvaluator;

impl Evaluator for SequentialEvaluator {
    #[instrument(skip(self, board))]
    fn evaluate(&self, board: &Board, mover: Mover, heuristic: Heuristic) -> ScoreVector {
        let slots: [CellScore; 9] =
            std::array::from_fn(|index| score(board, index, mover, heuristic));
        debug!(scores = ?slots, "Sequential evaluation complete");
        ScoreVector(slots)
    }
}

/// Which evaluator drives a game.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum EvaluationMode {
    /// One rayon task per cell.
    #[default]
    Parallel,
    /// Plain scan over the cells.
    Sequential,
}

impl Evaluator for EvaluationMode {
    fn evaluate(&self, board: &Board, mover: Mover, heuristic: Heuristic) -> ScoreVector {
        match self {
            EvaluationMode::Parallel => ParallelEvaluator.evaluate(board, mover, heuristic),
            EvaluationMode::Sequential => SequentialEvaluator.evaluate(board, mover, heuristic),
        }
    }
}
