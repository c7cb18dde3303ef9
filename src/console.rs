//! Line-based front end: one command per line on stdin.
//!
//! Commands are `1`-`9` to play a square, `r` to start over and `q` to quit.
//! After a game ends an empty line starts the next one.

use anyhow::Result;
use std::time::Duration;
use tiktaktoe_core::{GameSession, Position, TurnOutcome};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, instrument};

const PROMPT: &str = "Your move (1-9, r = restart, q = quit): ";

/// Plays games reading commands from `input` and writing the board to `output`.
#[instrument(skip_all)]
pub async fn run_console<R, W>(
    mut session: GameSession,
    computer_delay: Duration,
    input: R,
    output: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    write_board(&session, output).await?;
    output.write_all(PROMPT.as_bytes()).await?;
    output.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let command = line.trim();
        debug!(command, "Console command");

        match command {
            "q" | "quit" => break,
            "r" | "restart" => session.reset_game(),
            "" if session.alert().is_some() => session.reset_game(),
            _ => match parse_square(command) {
                Some(position) => play_turn(&mut session, position, computer_delay, output).await?,
                None => {
                    output.write_all(b"Enter a square from 1 to 9.\n").await?;
                }
            },
        }

        write_board(&session, output).await?;
        match session.alert() {
            Some(alert) => {
                let text = format!(
                    "{} {}\nPress Enter to {}, q to quit.\n",
                    alert.title,
                    alert.message,
                    alert.button.to_lowercase()
                );
                output.write_all(text.as_bytes()).await?;
            }
            None => output.write_all(PROMPT.as_bytes()).await?,
        }
        output.flush().await?;
    }

    output.write_all(b"Bye!\n").await?;
    output.flush().await?;
    Ok(())
}

fn parse_square(command: &str) -> Option<Position> {
    let mut chars = command.chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) => Position::from_key(key),
        _ => None,
    }
}

async fn play_turn<W>(
    session: &mut GameSession,
    position: Position,
    computer_delay: Duration,
    output: &mut W,
) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let index = position.to_index();
    match session.place_human_move(index)? {
        // After game over the alert prompt that follows says what to do.
        TurnOutcome::Ignored if session.alert().is_some() => {}
        TurnOutcome::Ignored => {
            if session.board().is_occupied(index)? {
                output.write_all(b"That square is taken.\n").await?;
            }
        }
        TurnOutcome::AwaitingComputer => {
            output.write_all(b"Computer is thinking...\n").await?;
            output.flush().await?;
            tokio::time::sleep(computer_delay).await;
            session.play_computer_move()?;
            if let Some(last) = session.history().last()
                && let Some(reply) = Position::from_index(last.index)
            {
                let text = format!("Computer played {}.\n", reply.label());
                output.write_all(text.as_bytes()).await?;
            }
        }
        TurnOutcome::InProgress | TurnOutcome::Finished(_) => {}
    }
    Ok(())
}

async fn write_board<W>(session: &GameSession, output: &mut W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let text = format!("\n{}\n\n", session.board().display());
    output.write_all(text.as_bytes()).await?;
    Ok(())
}
