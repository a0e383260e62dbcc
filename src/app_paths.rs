use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Well-known per-user locations for phone-cli files.
pub struct AppPaths;

impl AppPaths {
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("phone-cli");

        fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn log_dir() -> Result<PathBuf> {
        let log_dir = dirs::data_dir()
            .context("Cannot determine data directory")?
            .join("phone-cli")
            .join("logs");

        fs::create_dir_all(&log_dir)?;
        Ok(log_dir)
    }
}
