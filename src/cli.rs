//! Command-line interface for tictactoe_engine.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::{GameConfig, Symbol};

/// Tic-tac-toe against a friend or a random CPU
#[derive(Parser, Debug)]
#[command(name = "tictactoe_engine")]
#[command(about = "Tic-tac-toe with an optional random CPU opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Settings shared by every mode; each one overrides the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Play against the CPU
    #[arg(long)]
    pub cpu: bool,

    /// Your symbol (O or X)
    #[arg(short, long)]
    pub symbol: Option<Symbol>,

    /// CPU thinking delay in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for CPU move selection
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SessionArgs {
    /// Layers these flags over a loaded config.
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        if self.cpu {
            config = config.with_cpu_enabled(true);
        }
        if self.symbol.is_some() {
            config = config.with_player_symbol(self.symbol);
        }
        if let Some(ms) = self.delay_ms {
            config = config.with_cpu_delay_ms(ms);
        }
        if self.seed.is_some() {
            config = config.with_seed(self.seed);
        }
        config
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui {
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Apply a list of moves and print the result
    Play {
        #[command(flatten)]
        session: SessionArgs,

        /// Cell indices (0-8) for the human moves, comma separated
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}
