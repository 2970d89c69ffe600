//! Tracing subscriber setup.

use crate::Settings;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// The configured log file. Used by the terminal UI, which owns stdout.
    File,
    /// Standard error.
    Stderr,
}

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins over the configured filter.
pub fn init_tracing(settings: &Settings, target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter()));

    match target {
        LogTarget::File => {
            let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
                format!("Failed to create log file {}", settings.log_file().display())
            })?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false)
                .try_init(); // Don't panic if already initialized
        }
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }

    Ok(())
}
