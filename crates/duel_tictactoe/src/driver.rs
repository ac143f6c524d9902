//! The turn loop.
//!
//! [`Duel`] owns the board and alternates the movers. Each turn it asks
//! its [`Evaluator`] for the current mover's [`ScoreVector`], plays the
//! first highest-scoring cell and checks for a win, then for a full board.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

use crate::evaluator::{Evaluator, ScoreVector};
use crate::position::Position;
use crate::record::GameRecord;
use crate::rules::{check_winner, has_won, is_full};
use crate::{Board, Mover};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mover),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mover> {
        match self {
            GameStatus::Won(mover) => Some(mover),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "InProgress"),
            GameStatus::Won(mover) => write!(f, "Win{mover}"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// A move that was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    /// 1-based turn number.
    pub number: usize,
    /// Who moved.
    pub mover: Mover,
    /// Cell index (0-8) that was played.
    pub index: usize,
    /// Score the cell was chosen with.
    pub score: i32,
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Turn {}: mover {} ({}) plays cell {}",
            self.number,
            self.mover,
            self.mover.symbol(),
            self.index
        )?;
        if let Some(position) = Position::from_index(self.index) {
            write!(f, " ({position})")?;
        }
        write!(f, " with score {}", self.score)
    }
}

/// Error raised by the turn loop.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum DuelError {
    /// No legal cell could be chosen although the game was still running.
    #[display("Stalled: no legal move for mover {mover} at {file}:{line}\n{board}")]
    Stalled {
        /// Mover that had to move.
        mover: Mover,
        /// Board at the time of the stall.
        board: Board,
        /// Source file where the stall was detected.
        file: &'static str,
        /// Line number where the stall was detected.
        line: u32,
    },

    /// A turn was requested after the game ended.
    #[display("Game is already over ({status})")]
    GameOver {
        /// Terminal status of the game.
        status: GameStatus,
    },
}

impl DuelError {
    /// Creates a stall error with caller location tracking.
    #[track_caller]
    pub fn stalled(mover: Mover, board: Board) -> Self {
        let loc = std::panic::Location::caller();
        Self::Stalled {
            mover,
            board,
            file: loc.file(),
            line: loc.line(),
        }
    }
}

/// A game between the two heuristics.
#[derive(Debug, Clone)]
pub struct Duel<E> {
    board: Board,
    mover: Mover,
    status: GameStatus,
    history: Vec<Turn>,
    evaluator: E,
}

impl<E: Evaluator> Duel<E> {
    /// Creates a game on an empty board with mover A to play.
    #[instrument(skip(evaluator))]
    pub fn new(evaluator: E) -> Self {
        Self::from_board(Board::new(), Mover::A, evaluator)
    }

    /// Creates a game from an arbitrary position.
    ///
    /// The status is derived from the board, so a won or full board starts
    /// out terminal.
    #[instrument(skip(evaluator))]
    pub fn from_board(board: Board, mover: Mover, evaluator: E) -> Self {
        let status = match check_winner(&board) {
            Some(winner) => GameStatus::Won(winner),
            None if is_full(&board) => GameStatus::Draw,
            None => GameStatus::InProgress,
        };
        Self {
            board,
            mover,
            status,
            history: Vec::new(),
            evaluator,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mover to play next.
    pub fn mover(&self) -> Mover {
        self.mover
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the turns played so far.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Scores the board for the mover to play.
    pub fn evaluate(&self) -> ScoreVector {
        self.evaluator
            .evaluate(&self.board, self.mover, self.mover.heuristic())
    }

    /// Plays one turn.
    ///
    /// Nothing is applied when the game is over or no legal cell is found.
    #[instrument(skip(self), fields(mover = %self.mover, turn = self.history.len() + 1))]
    pub fn step(&mut self) -> Result<Turn, DuelError> {
        if self.status.is_terminal() {
            return Err(DuelError::GameOver {
                status: self.status,
            });
        }

        let scores = self.evaluate();
        let Some((index, score)) = scores.best() else {
            error!(board = %self.board, "No legal cell in score vector");
            return Err(DuelError::stalled(self.mover, self.board));
        };
        if !self.board.is_empty(index) {
            error!(index, board = %self.board, "Best cell is already occupied");
            return Err(DuelError::stalled(self.mover, self.board));
        }

        self.board.place(index, self.mover);
        let turn = Turn {
            number: self.history.len() + 1,
            mover: self.mover,
            index,
            score,
        };
        self.history.push(turn);
        debug!(index, score, "Move applied");

        if has_won(&self.board, self.mover) {
            self.status = GameStatus::Won(self.mover);
        } else if is_full(&self.board) {
            self.status = GameStatus::Draw;
        } else {
            self.mover = self.mover.opponent();
        }

        Ok(turn)
    }

    /// Plays until the game ends.
    pub fn play(&mut self) -> Result<GameStatus, DuelError> {
        self.play_with(|_, _| {})
    }

    /// Plays until the game ends, calling `on_turn` after every move with
    /// the turn and the resulting board.
    #[instrument(skip(self, on_turn))]
    pub fn play_with<F>(&mut self, mut on_turn: F) -> Result<GameStatus, DuelError>
    where
        F: FnMut(&Turn, &Board),
    {
        info!(mover = %self.mover, "Game started");
        while !self.status.is_terminal() {
            let turn = self.step()?;
            on_turn(&turn, &self.board);
        }
        info!(outcome = %self.status, turns = self.history.len(), "Game finished");
        Ok(self.status)
    }

    /// Snapshots the game into a serializable record.
    pub fn record(&self) -> GameRecord {
        GameRecord::new(self.history.clone(), self.board.to_wire(), self.status)
    }
}
