//! Game settings loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// User settings for the game.
///
/// Every field has a default, so a partial file (or no file) is fine.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Reset the board as soon as the win/draw dialog is acknowledged.
    ///
    /// When false, the finished board stays up until the player presses `r`.
    auto_reset: bool,

    /// File the terminal UI writes its logs to.
    log_file: PathBuf,

    /// `tracing` filter used when `RUST_LOG` is not set.
    log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_reset: true,
            log_file: PathBuf::from("tictactoe.log"),
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(auto_reset = settings.auto_reset, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path`, falling back to defaults when the file
    /// does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns these settings with `auto_reset` replaced.
    pub fn with_auto_reset(mut self, auto_reset: bool) -> Self {
        self.auto_reset = auto_reset;
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(*settings.auto_reset());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "auto_reset = false").unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert!(!*settings.auto_reset());
        assert_eq!(settings.log_file(), &PathBuf::from("tictactoe.log"));
        assert_eq!(settings.log_filter(), "info");
    }

    #[test]
    fn test_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "auto_reset = true\nlog_file = \"/tmp/ttt.log\"\nlog_filter = \"debug\""
        )
        .unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.log_file(), &PathBuf::from("/tmp/ttt.log"));
        assert_eq!(settings.log_filter(), "debug");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "auto_reset = \"sometimes\"").unwrap();

        let err = Settings::load(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_override_auto_reset() {
        let settings = Settings::default().with_auto_reset(false);
        assert!(!*settings.auto_reset());
    }
}
