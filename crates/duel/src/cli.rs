//! Command-line interface for duel.

use clap::Parser;
use duel_tictactoe::EvaluationMode;

/// Duel - two fixed tic-tac-toe heuristics play one game
#[derive(Parser, Debug)]
#[command(name = "duel")]
#[command(about = "Plays one tic-tac-toe game between two one-ply heuristics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// How the nine cells of a turn are scored (parallel or sequential)
    #[arg(long, default_value_t = EvaluationMode::Parallel)]
    pub evaluation: EvaluationMode,

    /// Write the game record as JSON to this path
    #[arg(long)]
    pub record: Option<std::path::PathBuf>,
}
