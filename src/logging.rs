//! Tracing setup.
//!
//! The level filter comes from `RUST_LOG` (default `sales_view=info`). The TUI
//! owns the terminal, so interactive runs log to a file instead of stderr.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Env var naming the TUI log file.
pub const LOG_FILE_ENV: &str = "SALES_VIEW_LOG";
const DEFAULT_LOG_FILE: &str = "salesview.log";
const DEFAULT_FILTER: &str = "sales_view=info";

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

pub fn init(target: LogTarget) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
        LogTarget::File => {
            let path = std::env::var(LOG_FILE_ENV).unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(Path::new(&path))
                .map_err(|e| AppError::new(4, format!("Failed to open log file '{path}': {e}")))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
    };

    // A subscriber may already be installed (tests, embedding); keep it.
    if let Err(e) = result {
        tracing::debug!("tracing already initialized: {e}");
    }
    Ok(())
}
