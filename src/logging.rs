//! Tracing subscriber setup.
//!
//! The terminal client owns stdout/stderr, so it logs to a file under the
//! user's data directory. The server logs to stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.log_level.clone().unwrap_or_else(|| "info".to_string()))
    })
}

pub fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("movie_grid"))
}

/// Logs to `movie_grid.log`. Silently does nothing when the data directory
/// cannot be created, since the TUI works without logs.
pub fn init_file_logging(config: &Config) -> Option<PathBuf> {
    let dir = log_dir()?;
    std::fs::create_dir_all(&dir).ok()?;
    let path = dir.join("movie_grid.log");
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();

    Some(path)
}

pub fn init_stderr_logging(config: &Config) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}
