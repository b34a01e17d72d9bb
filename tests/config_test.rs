//! Tests for TOML configuration loading.

use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;
use tictactoe_engine::{GameConfig, Symbol};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert_eq!(*config.cpu_delay_ms(), 300);
    assert_eq!(config.cpu_delay(), Duration::from_millis(300));
    assert!(!*config.cpu_enabled());
    assert_eq!(*config.player_symbol(), None);
    assert_eq!(*config.seed(), None);
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_full_file() {
    let file = write_config(
        r#"
cpu_delay_ms = 50
cpu_enabled = true
player_symbol = "X"
seed = 42
log_filter = "tictactoe_engine=debug"
"#,
    );

    let config = GameConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.cpu_delay_ms(), 50);
    assert!(*config.cpu_enabled());
    assert_eq!(*config.player_symbol(), Some(Symbol::X));
    assert_eq!(*config.seed(), Some(42));
    assert_eq!(config.log_filter(), "tictactoe_engine=debug");
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config("cpu_enabled = true\n");
    let config = GameConfig::from_file(file.path()).expect("valid config");
    assert!(*config.cpu_enabled());
    assert_eq!(*config.cpu_delay_ms(), 300);
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_empty_file_is_default() {
    let file = write_config("");
    let config = GameConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_parse_error() {
    let file = write_config("cpu_delay_ms = \"soon\"\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_unknown_symbol_rejected() {
    let file = write_config("player_symbol = \"Z\"\n");
    assert!(GameConfig::from_file(file.path()).is_err());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");

    assert!(GameConfig::from_file(&path).is_err());
    let config = GameConfig::load_or_default(&path).expect("defaults");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_builder_overrides() {
    let config = GameConfig::default()
        .with_cpu_delay_ms(0)
        .with_cpu_enabled(true)
        .with_player_symbol(Some(Symbol::O))
        .with_seed(Some(1));
    assert_eq!(config.cpu_delay(), Duration::ZERO);
    assert!(*config.cpu_enabled());
    assert_eq!(*config.player_symbol(), Some(Symbol::O));
    assert_eq!(*config.seed(), Some(1));
}
