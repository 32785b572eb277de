//! Logging setup
//!
//! Events are written to `expenses.log` in the base directory. The TUI owns
//! the terminal, so nothing is ever logged to stdout or stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};

/// Build the level filter: `RUST_LOG` wins over the configured level
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber, appending to the log file
pub fn init(paths: &ExpensePaths, default_level: &str) -> ExpenseResult<()> {
    init_with_filter(paths, build_filter(default_level))
}

/// Install the global subscriber with an explicit level filter
pub fn init_with_filter(paths: &ExpensePaths, filter: EnvFilter) -> ExpenseResult<()> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| ExpenseError::Io(format!("Failed to open log file: {}", e)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| ExpenseError::Config(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_to_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        // Independent of any RUST_LOG in the environment
        init_with_filter(&paths, EnvFilter::new("info")).unwrap();
        tracing::info!("logging initialized for test");

        let contents = std::fs::read_to_string(paths.log_file()).unwrap();
        assert!(contents.contains("logging initialized for test"));

        // A second subscriber cannot be installed
        assert!(init_with_filter(&paths, EnvFilter::new("info")).is_err());
    }
}
