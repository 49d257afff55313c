//! Subscriber setup for the binary. The library itself only emits events.
//!
//! `RUST_LOG` overrides the level; `--debug` lowers the default to debug.

use crate::errors::{AppError, AppResult};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Append formatted events to `log_file`, creating it if needed.
pub fn init_file_logging(log_file: &Path, debug: bool) -> AppResult<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    if let Some(dir) = log_file.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Other(format!("logging setup failed: {}", e)))
}
