use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use chrono::Local;
use tracing_subscriber::EnvFilter;

use crate::app_paths::AppPaths;

/// Env var controlling the log filter, e.g. `PHONE_CLI_LOG=debug`.
pub const LOG_ENV_VAR: &str = "PHONE_CLI_LOG";

/// Initialize tracing to a timestamped per-run log file.
///
/// Logs go to a file, never to stdout: stdout carries the interactive
/// prompt/response protocol and must stay clean. Returns the log path so the
/// caller can announce it on stderr.
pub fn init_file_logging() -> Result<PathBuf> {
    let log_dir = AppPaths::log_dir()?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = log_dir.join(format!("phone-cli_{}.log", timestamp));

    // "latest.log" always points at the current run
    let latest_path = log_dir.join("latest.log");

    #[cfg(unix)]
    {
        let _ = std::fs::remove_file(&latest_path);
        let _ = std::os::unix::fs::symlink(&log_path, &latest_path);
    }

    #[cfg(windows)]
    {
        // Symlinks need elevated rights on Windows; write a pointer file instead
        let pointer_content = format!("Current log file: {}\n", log_path.display());
        let _ = std::fs::write(&latest_path, pointer_content);
    }

    #[cfg(not(any(unix, windows)))]
    let _ = &latest_path;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(log_path)
}
