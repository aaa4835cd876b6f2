use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding users.json and profiles.json. Empty means the
    /// default data directory under the user's home.
    #[serde(default)]
    pub data_dir: String,
}

// Default value functions
fn default_base_url() -> String {
    "https://wger.de/api/v2".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_search_limit() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            search_limit: default_search_limit(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
        }
    }
}

impl Config {
    /// Get config directory path (~/.fitness-world/)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".fitness-world"))
    }

    /// Get config file path (~/.fitness-world/config.toml)
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let config_file = Self::config_file()?;

        if !config_file.exists() {
            tracing::info!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_file).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context("Failed to create config directory")?;

        let config_file = Self::config_file()?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_file, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Resolve the data directory holding the JSON stores.
    ///
    /// Precedence: FITNESS_WORLD_DATA_DIR env var (used by tests), then the
    /// configured directory, then ~/.fitness-world/data.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Ok(test_path) = std::env::var("FITNESS_WORLD_DATA_DIR") {
            return Ok(PathBuf::from(test_path));
        }

        if !self.storage.data_dir.is_empty() {
            return Ok(PathBuf::from(&self.storage.data_dir));
        }

        Ok(Self::config_dir()?.join("data"))
    }
}
