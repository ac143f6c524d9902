//! Serializable summary of a finished (or interrupted) game.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::driver::{GameStatus, Turn};

/// Turns played, the final board in wire form and the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameRecord {
    /// Turns in the order they were played.
    turns: Vec<Turn>,
    /// Final board (0 = empty, 1 = A, -1 = B).
    final_board: [i8; 9],
    /// Game status when the record was taken.
    outcome: GameStatus,
}

impl GameRecord {
    /// Creates a record.
    pub fn new(turns: Vec<Turn>, final_board: [i8; 9], outcome: GameStatus) -> Self {
        Self {
            turns,
            final_board,
            outcome,
        }
    }

    /// Renders the record as pretty-printed JSON.
    #[instrument(skip(self), fields(turns = self.turns.len()))]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a record from JSON.
    #[instrument(skip(json))]
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
