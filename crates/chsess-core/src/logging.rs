//! Tracing setup for the `chsess` binary.
//!
//! Events go to `$XDG_STATE_HOME/chsess/chsess.log`; when that file cannot be
//! opened the binary falls back to [`init_logging_stderr`]. `RUST_LOG`
//! overrides the default filter.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,chsess_core=debug";

/// Location of the log file under the XDG state directory.
pub fn log_file_path() -> Result<PathBuf> {
    let state_home = xdg::BaseDirectories::with_prefix("chsess")?.get_state_home();
    Ok(state_home.join("chsess").join("chsess.log"))
}

/// Filter from `directives`, or the default when absent or unparsable.
fn filter_from(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

fn env_filter() -> EnvFilter {
    filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok())
}

/// Installs a subscriber appending to [`log_file_path`] and returns that path.
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create log dir: {}", dir.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("init tracing subscriber: {e}"))?;

    tracing::info!("chsess logging initialized at {}", path.display());
    Ok(path)
}

/// Installs a stderr-only subscriber. No-op if one is already installed.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
