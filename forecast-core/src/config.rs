use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::model::{Metric, TemperatureUnit};

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_city() -> String {
    "Austin".to_string()
}

/// Top-level configuration stored on disk.
///
/// Every field has a default, so a missing or partial config file still yields
/// a working setup. The base URLs exist so tests can point the clients at a
/// mock server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the geocoding search endpoint.
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,

    /// Base URL of the hourly forecast endpoint.
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,

    /// HTTP timeout in seconds for both clients.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// City shown on startup before the user types anything.
    #[serde(default = "default_city")]
    pub default_city: String,

    /// Metric selected on startup.
    #[serde(default)]
    pub default_metric: Metric,

    /// Temperature display unit selected on startup.
    #[serde(default)]
    pub default_unit: TemperatureUnit,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoding_base_url: default_geocoding_base_url(),
            forecast_base_url: default_forecast_base_url(),
            timeout_secs: default_timeout_secs(),
            default_city: default_city(),
            default_metric: Metric::default(),
            default_unit: TemperatureUnit::default(),
        }
    }
}

impl Config {
    /// Load config from disk, or return the defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, use defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast-viewer", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
