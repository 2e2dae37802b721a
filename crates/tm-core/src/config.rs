//! Configuration types and loading

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Upstream dataset the remote source reads by default
pub const DEFAULT_PLAYERS_URL: &str =
    "https://raw.githubusercontent.com/erxnkosx/Project-Webontwikkeling/main/src/data/players.json";
pub const DEFAULT_CLUBS_URL: &str =
    "https://raw.githubusercontent.com/erxnkosx/Project-Webontwikkeling/main/src/data/clubs.json";

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Where the catalog is loaded from
    pub data: DataConfig,

    /// Remote fetch settings
    pub remote: RemoteConfig,
}

/// Which catalog source backs the cache
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DataSourceKind {
    /// Local JSON files (read/write)
    #[default]
    File,
    /// JSON fetched over HTTP (read-only)
    Remote,
}

impl DataSourceKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "file" | "local" => Some(Self::File),
            "remote" | "http" => Some(Self::Remote),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Remote => "remote",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    pub source: DataSourceKind,
    pub players_path: PathBuf,
    pub clubs_path: PathBuf,
    /// Directory with seed `players.json` / `clubs.json`
    pub seed_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteConfig {
    pub players_url: String,
    pub clubs_url: String,
    pub timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: DataConfig {
                source: DataSourceKind::File,
                players_path: PathBuf::from("data/players.json"),
                clubs_path: PathBuf::from("data/clubs.json"),
                seed_dir: None,
            },
            remote: RemoteConfig {
                players_url: DEFAULT_PLAYERS_URL.to_string(),
                clubs_url: DEFAULT_CLUBS_URL.to_string(),
                timeout_seconds: 30,
            },
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(source) = lookup("TM_DATA_SOURCE") {
            config.data.source =
                DataSourceKind::from_str(&source).ok_or_else(|| ConfigError::InvalidValue {
                    key: "TM_DATA_SOURCE".to_string(),
                    message: format!("expected `file` or `remote`, got `{}`", source),
                })?;
        }

        // Local files
        if let Some(path) = lookup("TM_PLAYERS_PATH") {
            config.data.players_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("TM_CLUBS_PATH") {
            config.data.clubs_path = PathBuf::from(path);
        }
        if let Some(dir) = lookup("TM_SEED_DIR") {
            config.data.seed_dir = Some(PathBuf::from(dir));
        }

        // Remote
        if let Some(url) = lookup("TM_PLAYERS_URL") {
            config.remote.players_url = url;
        }
        if let Some(url) = lookup("TM_CLUBS_URL") {
            config.remote.clubs_url = url;
        }
        if let Some(timeout) = lookup("TM_HTTP_TIMEOUT_SECONDS") {
            config.remote.timeout_seconds = timeout.parse().unwrap_or(30);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the values that can only be wrong at runtime
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data.source == DataSourceKind::Remote {
            parse_http_url("TM_PLAYERS_URL", &self.remote.players_url)?;
            parse_http_url("TM_CLUBS_URL", &self.remote.clubs_url)?;
        }
        Ok(())
    }
}

fn parse_http_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("unsupported scheme `{}`", other),
        }),
    }
}
