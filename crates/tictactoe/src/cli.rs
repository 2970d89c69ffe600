//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml", global = true)]
    pub config: PathBuf,

    /// Keep a finished board on screen until `r` is pressed
    #[arg(long, global = true)]
    pub manual_reset: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply a list of cell indices (0-8) without a UI
    Script {
        /// Print the final game state as JSON
        #[arg(long)]
        json: bool,

        /// Cell indices, space- or comma-separated
        #[arg(required = true, value_delimiter = ',')]
        moves: Vec<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert!(!cli.manual_reset);
    }

    #[test]
    fn test_script_moves() {
        let cli = Cli::try_parse_from(["tictactoe", "script", "0,4", "1", "--json"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Script {
                json: true,
                moves: vec![0, 4, 1],
            })
        );
    }

    #[test]
    fn test_script_requires_moves() {
        assert!(Cli::try_parse_from(["tictactoe", "script"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["tictactoe", "play", "--manual-reset", "-c", "x.toml"]).unwrap();
        assert_eq!(cli.command, Some(Command::Play));
        assert!(cli.manual_reset);
        assert_eq!(cli.config, PathBuf::from("x.toml"));
    }
}
