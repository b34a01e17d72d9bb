//! Game configuration loaded from TOML.

use crate::games::tictactoe::Symbol;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Session settings.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// How long the CPU "thinks" before its move lands, in milliseconds.
    #[serde(default = "default_cpu_delay_ms")]
    cpu_delay_ms: u64,

    /// Start with the CPU opponent enabled.
    #[serde(default)]
    cpu_enabled: bool,

    /// Symbol chosen for the human ahead of time.
    #[serde(default)]
    player_symbol: Option<Symbol>,

    /// Seed for CPU move selection; random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_cpu_delay_ms() -> u64 {
    300
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cpu_delay_ms: default_cpu_delay_ms(),
            cpu_enabled: false,
            player_symbol: None,
            seed: None,
            log_filter: default_log_filter(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            cpu_enabled = config.cpu_enabled,
            cpu_delay_ms = config.cpu_delay_ms,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// CPU delay as a [`Duration`].
    pub fn cpu_delay(&self) -> Duration {
        Duration::from_millis(self.cpu_delay_ms)
    }

    /// Overrides the CPU delay.
    pub fn with_cpu_delay_ms(mut self, ms: u64) -> Self {
        self.cpu_delay_ms = ms;
        self
    }

    /// Overrides whether the CPU plays.
    pub fn with_cpu_enabled(mut self, enabled: bool) -> Self {
        self.cpu_enabled = enabled;
        self
    }

    /// Overrides the human's symbol.
    pub fn with_player_symbol(mut self, symbol: Option<Symbol>) -> Self {
        self.player_symbol = symbol;
        self
    }

    /// Overrides the CPU seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
