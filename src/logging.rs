//! Tracing subscriber setup shared by both binaries.
//!
//! `FDF_LOG` holds an `EnvFilter` directive (default `info`). While the viewer
//! owns the alternate screen, anything written to stderr lands on top of the
//! picture, so `FDF_LOG_PATH` redirects logs to a file instead.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub const LOG_FILTER_VAR: &str = "FDF_LOG";
pub const LOG_PATH_VAR: &str = "FDF_LOG_PATH";

/// Install the global subscriber.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    let log_path = std::env::var(LOG_PATH_VAR)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time();

    match log_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("opening log file {}", path))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}
