//! tictactoe_engine - terminal tic-tac-toe with an optional CPU opponent.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_engine::{GameConfig, GameSession, GameState};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Tui { session } => tui::run_tui(session.apply(config)).await,
        Command::Play {
            session,
            moves,
            json,
        } => {
            let config = session.apply(config);
            initialize_tracing(config.log_filter());
            run_play(config, moves, json).await
        }
    }
}

/// Logs to stderr so stdout carries only the result.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Plays the given human moves, letting the CPU answer each one.
#[instrument(skip(config))]
async fn run_play(config: GameConfig, moves: Vec<usize>, json: bool) -> Result<()> {
    let session = GameSession::new(&config)?;
    info!(moves = moves.len(), "Starting scripted game");

    for index in moves {
        if let Err(e) = session.apply_move(index) {
            warn!(index, error = %e, "Skipping move");
            continue;
        }
        session.wait_for_cpu().await;
    }

    let state = session.snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        println!("{}", render_text(&state));
    }
    Ok(())
}

fn render_text(state: &GameState) -> String {
    let status = match state.outcome() {
        Some(outcome) => outcome.to_string(),
        None => format!("{} to move", state.turn()),
    };

    let mut text = format!("{}\n\n{}", state.board().display(), status);
    if !state.history().is_empty() {
        text.push_str("\n\nHistory:");
        for (i, outcome) in state.history().iter().enumerate() {
            text.push_str(&format!("\n  {}. {}", i + 1, outcome));
        }
    }
    text
}
