//! TikTakToe - play tic-tac-toe against the computer in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tiktaktoe::{Cli, Command, Config, new_session, run_console, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?.with_overrides(cli.seed, cli.delay_ms);

    match cli.command.unwrap_or_default() {
        Command::Tui => play_tui(config).await,
        Command::Console => play_console(config).await,
    }
}

/// Run the full-screen UI, logging to a file so the screen stays clean.
async fn play_tui(config: Config) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    log_startup(&config);
    run_tui(&config, new_session(&config)).await
}

/// Run the line-based game on stdin/stdout, logging to stderr.
async fn play_console(config: Config) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(std::io::stderr)
        .try_init();

    log_startup(&config);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    run_console(new_session(&config), config.computer_delay(), stdin, &mut stdout).await
}

fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

#[instrument(skip_all)]
fn log_startup(config: &Config) {
    info!(
        delay_ms = config.computer_delay_ms(),
        seed = ?config.seed(),
        "Starting TikTakToe"
    );
}
