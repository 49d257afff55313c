use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default)]
    pub default_chat_gpt: bool,
    #[serde(default)]
    pub default_welcome_meme: Option<String>,
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

fn default_log_file() -> String {
    Config::config_dir()
        .join("gymchat-store.log")
        .to_string_lossy()
        .to_string()
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            log_file: default_log_file(),
            default_chat_gpt: false,
            default_welcome_meme: None,
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

/// The subset of configuration the storage layer consumes.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub default_chat_gpt: bool,
    pub default_welcome_meme: Option<String>,
    pub busy_timeout_ms: u64,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            default_chat_gpt: false,
            default_welcome_meme: None,
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl From<&Config> for StoreOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            default_chat_gpt: cfg.default_chat_gpt,
            default_welcome_meme: cfg.default_welcome_meme.clone(),
            busy_timeout_ms: cfg.busy_timeout_ms,
        }
    }
}

impl Config {
    /// Platform configuration directory, falling back to the working directory.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gymchat-store")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("gymchat-store.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("gymchat-store.sqlite")
    }

    /// Load `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions::from(self)
    }
}
