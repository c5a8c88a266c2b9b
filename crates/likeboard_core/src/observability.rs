//! Tracing subscriber initialization.

use likeboard_error::ConfigError;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for command-line use
    Stderr,
    /// Append to a file, keeping the terminal free for the dashboard
    File(PathBuf),
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init_tracing(default_level: &str, target: LogTarget) -> Result<(), ConfigError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match &target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| ConfigError::new(format!("Failed to install subscriber: {}", e)))?,
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ConfigError::new(format!("Failed to create log directory: {}", e))
                })?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ConfigError::new(format!("Failed to open log file: {}", e)))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .try_init()
                .map_err(|e| ConfigError::new(format!("Failed to install subscriber: {}", e)))?
        }
    }

    info!(log_target = ?target, "Tracing initialized");
    Ok(())
}
