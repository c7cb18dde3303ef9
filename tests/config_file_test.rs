//! Tests for loading configuration from disk.

use std::io::Write;
use std::time::Duration;
use tiktaktoe::{Config, new_session};
use tiktaktoe_core::TurnOutcome;

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_file_values() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "computer_delay_ms = 0").unwrap();
    writeln!(file, "seed = 42").unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.computer_delay(), Duration::ZERO);
    assert_eq!(config.seed(), &Some(42));
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(config.log_file().to_str(), Some("tiktaktoe.log"));
}

#[test]
fn test_malformed_file_reports_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "computer_delay_ms = \"soon\"").unwrap();

    let err = Config::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
    assert!(err.file.ends_with("config.rs"));
}

#[test]
fn test_seeded_sessions_replay_identically() {
    let config = Config::default().with_overrides(Some(2024), Some(0));
    let mut first = new_session(&config);
    let mut second = new_session(&config);

    // Center opening forces the random fallback on the computer's reply.
    assert_eq!(first.process_move(4), Ok(TurnOutcome::InProgress));
    assert_eq!(second.process_move(4), Ok(TurnOutcome::InProgress));
    assert_eq!(first.board(), second.board());
}
