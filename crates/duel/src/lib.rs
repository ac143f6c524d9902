//! Duel - console runner for the heuristic tic-tac-toe duel.
//!
//! Plays a single game with [`duel_tictactoe`], printing every turn and the
//! outcome, and optionally saving the game record as JSON.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod render;

use std::io::Write;

use anyhow::{Context, Result};
use duel_tictactoe::{Duel, DuelError, GameStatus};
use tracing::{error, info, instrument};

pub use cli::Cli;

/// Plays one game as configured by `cli`, writing the transcript to `out`.
///
/// A stall is logged and returned as an error; win and draw are `Ok`.
#[instrument(skip(out))]
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<GameStatus> {
    info!(evaluation = %cli.evaluation, "Starting duel");

    let mut duel = Duel::new(cli.evaluation);
    while !duel.status().is_terminal() {
        let turn = match duel.step() {
            Ok(turn) => turn,
            Err(err @ DuelError::Stalled { .. }) => {
                error!(error = %err, "Game loop stalled");
                return Err(err).context("Game aborted without a legal move");
            }
            Err(err) => return Err(err.into()),
        };
        render::write_turn(out, &turn, duel.board()).context("Failed to write turn")?;
    }

    let outcome = duel.status();
    render::write_outcome(out, outcome).context("Failed to write outcome")?;

    if let Some(path) = &cli.record {
        let json = duel.record().to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write record to {}", path.display()))?;
        info!(path = %path.display(), "Game record written");
    }

    info!(%outcome, "Duel finished");
    Ok(outcome)
}
