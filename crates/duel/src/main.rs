//! Duel - plays one tic-tac-toe game between two fixed heuristics.

use anyhow::Result;
use clap::Parser;
use duel::{Cli, run};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock())?;
    Ok(())
}

/// Logs go to stderr so stdout only carries the game.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,duel=info,duel_tictactoe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
