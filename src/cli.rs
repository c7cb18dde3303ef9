//! Command-line interface for tiktaktoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// TikTakToe - play tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "tiktaktoe")]
#[command(about = "Tic-tac-toe against a rule-based computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Front end to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the TOML config file (ignored if missing)
    #[arg(short, long, global = true, default_value = "tiktaktoe.toml")]
    pub config: PathBuf,

    /// Seed for the computer's random moves
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Pause before the computer replies, in milliseconds
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,
}

/// Available front ends
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Full-screen terminal UI (arrow keys, Enter, 1-9)
    #[default]
    Tui,

    /// Line-based game on stdin/stdout
    Console,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["tiktaktoe"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::Tui);
        assert_eq!(cli.config, PathBuf::from("tiktaktoe.toml"));
    }

    #[test]
    fn test_console_with_overrides() {
        let cli = Cli::try_parse_from(["tiktaktoe", "console", "--seed", "9", "--delay-ms", "0"])
            .unwrap();
        assert_eq!(cli.command, Some(Command::Console));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.delay_ms, Some(0));
    }
}
