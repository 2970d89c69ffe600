//! Headless play from a list of cell indices.

use anyhow::{Context, Result};
use std::io::Write;
use tictactoe_core::{GameState, Position};
use tracing::{info, instrument};

/// How the script output is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptFormat {
    /// A line per move, then the final board.
    #[default]
    Text,
    /// The final game state as JSON.
    Json,
}

/// Plays `moves` in order and writes a report to `out`.
///
/// A finished game is reset before the next index when `auto_reset` is
/// set, the same as acknowledging the end-of-game dialog. Otherwise the
/// remaining indices are ignored by the finished game. Fails on the first
/// index outside 0-8.
#[instrument(skip(out))]
pub fn run_script(
    moves: &[usize],
    auto_reset: bool,
    format: ScriptFormat,
    out: &mut impl Write,
) -> Result<GameState> {
    let mut game = GameState::new();
    let text = format == ScriptFormat::Text;

    for (n, &index) in moves.iter().enumerate() {
        if game.is_over() && auto_reset {
            game.reset();
            if text {
                writeln!(out, "-- new game --")?;
            }
        }

        let mover = game.current_player();
        let result = game
            .apply_move(index)
            .with_context(|| format!("Move #{} failed", n + 1))?;

        if text {
            match (result.accepted, Position::from_index(index)) {
                (true, Some(position)) => writeln!(out, "{} -> {}", mover, position)?,
                _ => writeln!(out, "{} ignored", index)?,
            }
            if result.outcome.is_terminal() {
                writeln!(out, "{}", result.outcome)?;
            }
        }
    }

    info!(moves = moves.len(), outcome = %game.outcome(), "Script finished");

    match format {
        ScriptFormat::Text => {
            writeln!(out, "{}", game.board().display())?;
            writeln!(out, "Result: {}", game.outcome())?;
        }
        ScriptFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &game)
                .context("Failed to serialize game state")?;
            writeln!(out)?;
        }
    }

    Ok(game)
}
