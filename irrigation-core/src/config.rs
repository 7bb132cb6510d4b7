use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{labels::Language, provider::openweather::DEFAULT_BASE_URL};

/// Environment variable that supplies the OpenWeather API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// OpenWeather connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProviderConfig {
    pub api_key: Option<String>,

    /// Override for the API host, mainly useful for testing.
    pub base_url: Option<String>,

    pub timeout_secs: Option<u64>,
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Display language, e.g. "english", "gujarati" or "hindi".
    pub language: Option<String>,

    /// Example TOML:
    /// [openweather]
    /// api_key = "..."
    /// timeout_secs = 10
    #[serde(default)]
    pub openweather: ProviderConfig,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "irrigation-advisory", "irrigation-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.openweather.api_key = Some(api_key);
    }

    /// API key from the environment, falling back to the config file.
    pub fn api_key(&self) -> Option<String> {
        self.api_key_with_env(std::env::var(API_KEY_ENV).ok())
    }

    fn api_key_with_env(&self, env_key: Option<String>) -> Option<String> {
        env_key
            .or_else(|| self.openweather.api_key.clone())
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }

    pub fn is_api_key_configured(&self) -> bool {
        self.api_key().is_some()
    }

    pub fn language(&self) -> Result<Language> {
        match &self.language {
            Some(s) => s.parse(),
            None => Ok(Language::default()),
        }
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = Some(language.as_str().to_string());
    }

    pub fn base_url(&self) -> &str {
        self.openweather.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Upper bound on a single weather fetch.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.openweather.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
