//! TikTakToe front ends.
//!
//! The game rules and the computer opponent live in [`tiktaktoe_core`]; this
//! crate wires them to a terminal:
//!
//! - **TUI**: full-screen `ratatui` board with cursor navigation
//! - **Console**: line-based play on stdin/stdout
//! - **Config**: TOML settings with command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{Config, ConfigError};
pub use console::run_console;
pub use tui::{App, AppAction, run_tui};

use tiktaktoe_core::GameSession;

/// Builds a session from the config: seeded when a seed is set.
pub fn new_session(config: &Config) -> GameSession {
    match config.seed() {
        Some(seed) => GameSession::seeded(*seed),
        None => GameSession::new(),
    }
}
