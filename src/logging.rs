//! Tracing setup.
//!
//! The game owns the terminal in raw mode, so log lines never go to stdout or
//! stderr. Logging is enabled only when `BRICK_BUSTER_LOG_PATH` names a file;
//! records are appended there. `RUST_LOG` selects the filter (default `info`).

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

pub const LOG_PATH_VAR: &str = "BRICK_BUSTER_LOG_PATH";

/// Install the file subscriber if configured. Returns whether logging is on.
pub fn init() -> Result<bool> {
    let Some(path) = log_path_from(std::env::var(LOG_PATH_VAR).ok()) else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    Ok(true)
}

fn log_path_from(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}
