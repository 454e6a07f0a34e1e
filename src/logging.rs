//! File-backed tracing setup.
//!
//! The terminal belongs to the board while the app runs, so log output can
//! only go to a file. Without a configured file no subscriber is installed
//! and the `tracing` macros cost next to nothing.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::filter::{EnvFilter, ParseError};
use tracing_subscriber::fmt;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("cannot open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid log filter `{filter}`: {source}")]
    Filter {
        filter: String,
        #[source]
        source: ParseError,
    },
    #[error("a global logger is already installed")]
    AlreadyInstalled,
}

pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(level).map_err(|source| LoggingError::Filter {
        filter: level.to_string(),
        source,
    })
}

/// Installs the global subscriber. Returns `Ok(false)` when logging is off.
pub fn init_logging(log_file: Option<&Path>, level: &str) -> Result<bool, LoggingError> {
    let Some(path) = log_file else {
        return Ok(false);
    };

    let filter = build_filter(level)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;

    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInstalled)?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(true)
}
