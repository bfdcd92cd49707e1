use crate::config::{Config, StorageBackend};
use crate::error::{storage_error, TallyResult};
use redis::{Client as RedisClient, Commands};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info};

/// Store keys
pub mod keys {
    /// Serialized array of the saved daily records
    pub const DAILY_RECORDS: &str = "dailyRecords";
}

/// Flat string key-value storage holding the persisted history
pub trait KeyValueStore {
    /// Read a value; `None` when the key is absent
    fn get(&mut self, key: &str) -> TallyResult<Option<String>>;

    /// Overwrite a value
    fn set(&mut self, key: &str, value: &str) -> TallyResult<()>;

    /// Short name for log lines
    fn name(&self) -> &'static str;
}

/// Open the store selected by the configuration
pub fn open_store(config: &Config) -> TallyResult<Box<dyn KeyValueStore>> {
    info!("Using {} storage backend", config.storage_backend);

    let store: Box<dyn KeyValueStore> = match config.storage_backend {
        StorageBackend::Memory => Box::new(InMemoryStore::new()),
        StorageBackend::File => Box::new(FileStore::new(config.data_dir.clone())),
        StorageBackend::Redis => Box::new(RedisStore::new(&config.redis_url)?),
    };

    Ok(store)
}

/// In-memory implementation of the store (for testing and throwaway sessions)
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    data: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&mut self, key: &str) -> TallyResult<Option<String>> {
        Ok(self.data.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> TallyResult<()> {
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// One `<key>.json` file per key inside a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&mut self, key: &str) -> TallyResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No stored value at {}", path.display());
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> TallyResult<()> {
        // Create data directory if it doesn't exist
        fs::create_dir_all(&self.dir)?;

        // Write to a sibling file first so a failed write leaves the old value intact
        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

/// Redis-backed store
pub struct RedisStore {
    client: RedisClient,
    connection: Option<redis::Connection>,
}

impl RedisStore {
    /// Create a client; the connection is opened on first use
    pub fn new(redis_url: &str) -> TallyResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = RedisClient::open(redis_url)
            .map_err(|e| storage_error(&format!("Failed to create Redis client: {}", e)))?;

        Ok(Self {
            client,
            connection: None,
        })
    }

    /// Get a Redis connection from the client
    fn connection(&mut self) -> TallyResult<&mut redis::Connection> {
        if self.connection.is_none() {
            let conn = self
                .client
                .get_connection()
                .map_err(|e| storage_error(&format!("Failed to connect to Redis: {}", e)))?;
            self.connection = Some(conn);
        }

        self.connection
            .as_mut()
            .ok_or_else(|| storage_error("Redis connection unavailable"))
    }
}

impl KeyValueStore for RedisStore {
    fn get(&mut self, key: &str) -> TallyResult<Option<String>> {
        let conn = self.connection()?;
        let value: Option<String> = conn.get(key)?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> TallyResult<()> {
        let conn = self.connection()?;
        conn.set::<_, _, ()>(key, value)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("shift_tally_{}_{}", name, std::process::id()))
    }

    #[test]
    fn test_in_memory_store() {
        let mut store = InMemoryStore::new();
        assert_eq!(store.get(keys::DAILY_RECORDS).unwrap(), None);

        store.set(keys::DAILY_RECORDS, "[]").unwrap();
        assert_eq!(store.get(keys::DAILY_RECORDS).unwrap().as_deref(), Some("[]"));

        // Last write wins
        store.set(keys::DAILY_RECORDS, "[1]").unwrap();
        assert_eq!(store.get(keys::DAILY_RECORDS).unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_file_store_creates_directory() {
        let dir = scratch_dir("file_store");
        let _ = fs::remove_dir_all(&dir);

        let mut store = FileStore::new(dir.join("nested"));
        assert_eq!(store.get("missing").unwrap(), None);

        store.set(keys::DAILY_RECORDS, r#"[{"a":1}]"#).unwrap();
        assert!(dir.join("nested").join("dailyRecords.json").exists());
        assert_eq!(
            store.get(keys::DAILY_RECORDS).unwrap().as_deref(),
            Some(r#"[{"a":1}]"#)
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_open_memory_store() {
        let config = Config {
            storage_backend: StorageBackend::Memory,
            ..Config::default()
        };
        let store = open_store(&config).unwrap();
        assert_eq!(store.name(), "memory");
    }

    #[test]
    fn test_redis_store_rejects_bad_url() {
        assert!(RedisStore::new("not a url").is_err());
    }
}
