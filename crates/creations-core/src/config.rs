//! Application configuration, loaded from `config.toml`.

use crate::storage::{FileStorage, StorageResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "CREATIONS_CONFIG";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Storage directory. Defaults to the platform data directory.
    pub data_dir: Option<PathBuf>,
    /// Artificial delay before suggestions arrive.
    pub suggestion_latency_ms: u64,
    pub identity: IdentityConfig,
}

/// Hosted identity service settings. Both must be set to use it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub url: Option<String>,
    pub anon_key: Option<String>,
}

impl IdentityConfig {
    /// URL and key, when both are configured and non-blank.
    pub fn endpoint(&self) -> Option<(&str, &str)> {
        let url = self.url.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let key = self.anon_key.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some((url, key))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            suggestion_latency_ms: crate::suggest::DEFAULT_LATENCY.as_millis() as u64,
            identity: IdentityConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from `$CREATIONS_CONFIG` or the default location.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => match default_path() {
                Some(path) => Self::load_from(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn suggestion_latency(&self) -> Duration {
        Duration::from_millis(self.suggestion_latency_ms)
    }

    /// Open file storage in the configured directory.
    pub fn storage(&self) -> StorageResult<FileStorage> {
        match &self.data_dir {
            Some(dir) => FileStorage::new(dir.clone()),
            None => FileStorage::default_location(),
        }
    }
}

/// `<config dir>/creations/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("creations").join("config.toml"))
}
