//! Tracing subscriber setup
//!
//! The TUI owns the terminal, so log output goes to a file in the user's
//! local data directory instead of stderr:
//! `~/.local/share/foodfinder/foodfinder.log` on Linux.
//!
//! # Level Resolution
//!
//! 1. `RUST_LOG`, if set
//! 2. `log_level` from the configuration
//! 3. Default: `"info"`
//!
//! Logging is optional. If the directory or file cannot be created, the
//! subscriber is simply not installed.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directory holding the log file
#[must_use]
pub fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("foodfinder"))
}

/// Build the filter from `RUST_LOG`, falling back to `level` and then `info`
#[must_use]
pub fn env_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.unwrap_or("info")))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to the log file
///
/// Returns the log file path when logging is active. Safe to call more than
/// once; only the first call takes effect.
pub fn init(level: Option<&str>) -> Option<PathBuf> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir).ok()?;

    let path = dir.join("foodfinder.log");
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_thread_names(true);

    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(layer)
        .try_init()
        .ok()?;

    tracing::debug!(path = %path.display(), "logging initialised");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_level_used_without_rust_log() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(env_filter(Some("debug")).to_string(), "debug");
        assert_eq!(env_filter(None).to_string(), "info");
    }

    #[test]
    fn test_log_dir_is_namespaced() {
        if let Some(dir) = log_dir() {
            assert!(dir.ends_with("foodfinder"));
        }
    }
}
