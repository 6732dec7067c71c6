//! tracing subscriber setup.
//!
//! `RUST_LOG` overrides the default filter in every mode.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Logs to stdout at `info`. Used by `serve`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339())
        .init();
}

/// Logs warnings to stderr, keeping stdout for command output.
pub fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(io::stderr)
        .init();
}

/// Logs to an append-only file so the TUI screen stays clean.
pub fn init_file_tracing(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
