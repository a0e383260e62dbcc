use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::app_paths::AppPaths;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Use colored output for help text
    pub use_color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Write a per-run debug log file under the data directory
    pub log_to_file: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { use_color: true }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self { log_to_file: true }
    }
}

impl Config {
    /// Load config from the default location, creating it on first run.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::config_file()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let contents = fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;

        Ok(())
    }

    /// Default config file with comments, for --generate-config.
    pub fn create_default_with_comments() -> String {
        r#"# phone-cli Configuration File
# Location: ~/.config/phone-cli/config.toml (Linux/macOS)
#           %APPDATA%\phone-cli\config.toml (Windows)

[display]
# Use colored output for help text
use_color = true

[behavior]
# Write a per-run debug log file under the data directory
# Tail the current run with: tail -f <data-dir>/phone-cli/logs/latest.log
log_to_file = true
"#
        .to_string()
    }
}
