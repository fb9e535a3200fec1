//! Strictly 2048 - terminal front end
//!
//! Plays 2048 on stdout, one keystroke per move.

#![warn(missing_docs)]

mod cli;
mod config;
mod input;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::Config;
use input::TerminalInput;
use rand::SeedableRng;
use rand::rngs::StdRng;
use render::TextRenderer;
use std::io;
use strictly_2048::{GameSession, SessionOutcome};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?
        .with_overrides(cli.seed, cli.log_file);

    init_tracing(&config)?;
    run_game(&config)
}

/// Sends logs to the configured file so stdout stays clean for the board.
fn init_tracing(config: &Config) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Creating log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Plays one game until game over or quit.
#[instrument(skip(config), fields(seed = ?config.seed()))]
fn run_game(config: &Config) -> Result<()> {
    info!("Starting Strictly 2048");

    let rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };
    let mut session = GameSession::new(rng);
    let mut input = TerminalInput::new(*config.keys());
    let mut renderer = TextRenderer::new(io::stdout());

    let outcome = session
        .run(&mut input, &mut renderer)
        .context("Game session failed")?;

    let board = outcome.board();
    match outcome {
        SessionOutcome::GameOver(_) => info!(
            turns = session.turns(),
            highest_tile = board.highest_tile(),
            "Game over"
        ),
        SessionOutcome::Quit(_) => info!(
            turns = session.turns(),
            highest_tile = board.highest_tile(),
            "Player quit"
        ),
    }
    Ok(())
}
