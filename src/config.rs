use crate::error::{config_error, TallyResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Optional configuration file, read after the environment
pub const CONFIG_FILE: &str = "config/shift_tally.toml";

/// Default directory for the file-backed store
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default Redis connection URL
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

/// Default display locale
pub const DEFAULT_LOCALE: &str = "en";

/// Which key-value store holds the daily record history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Nothing survives the process
    Memory,
    /// One JSON file per key under the data directory
    File,
    /// A Redis server
    Redis,
}

impl FromStr for StorageBackend {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            "redis" => Ok(StorageBackend::Redis),
            other => Err(config_error(&format!("Unknown storage backend: {}", other))),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StorageBackend::Memory => "memory",
            StorageBackend::File => "file",
            StorageBackend::Redis => "redis",
        };
        f.write_str(name)
    }
}

/// Values that may be set in the configuration file
#[derive(Debug, Clone, Default, Deserialize)]
struct FileConfig {
    storage_backend: Option<String>,
    data_dir: Option<PathBuf>,
    redis_url: Option<String>,
    locale: Option<String>,
}

/// Main configuration structure for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where the history is persisted
    pub storage_backend: StorageBackend,
    /// Directory used by the file backend
    pub data_dir: PathBuf,
    /// Connection URL used by the Redis backend
    pub redis_url: String,
    /// Display locale (`en` or `ja`)
    pub locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::File,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            redis_url: DEFAULT_REDIS_URL.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> TallyResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let file_config = Self::read_file_config(Path::new(CONFIG_FILE))?;
        Self::resolve(|name| env::var(name).ok(), file_config)
    }

    /// Read the optional configuration file; a missing file yields defaults
    fn read_file_config(path: &Path) -> TallyResult<FileConfig> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str::<FileConfig>(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Merge environment lookups over file values over defaults
    fn resolve<F>(lookup: F, file_config: FileConfig) -> TallyResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let storage_backend = match lookup("STORAGE_BACKEND").or(file_config.storage_backend) {
            Some(name) => name.parse()?,
            None => defaults.storage_backend,
        };

        let data_dir = lookup("DATA_DIR")
            .map(PathBuf::from)
            .or(file_config.data_dir)
            .unwrap_or(defaults.data_dir);

        let redis_url = lookup("REDIS_URL")
            .or(file_config.redis_url)
            .unwrap_or(defaults.redis_url);

        let locale = lookup("APP_LOCALE")
            .or(file_config.locale)
            .unwrap_or(defaults.locale);

        Ok(Config {
            storage_backend,
            data_dir,
            redis_url,
            locale,
        })
    }
}
