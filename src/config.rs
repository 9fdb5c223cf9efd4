use log::debug;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::storage::{HistoryStore, JsonFileStore, MemoryStore, SqliteStore, StorageError};

pub const STORE_PATH_VAR: &str = "NIGHT_THIRD_STORE";
pub const BACKEND_VAR: &str = "NIGHT_THIRD_BACKEND";
pub const DEFAULT_STORE_PATH: &str = "night_third_history.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown storage backend {0:?}, expected json, sqlite or memory")]
    UnknownBackend(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Json,
    Sqlite,
    Memory,
}

impl Backend {
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }

    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("sqlite") | Some("sqlite3") | Some("db") => Self::Sqlite,
            _ => Self::Json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store_path: PathBuf,
    pub backend: Backend,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var(STORE_PATH_VAR).ok(), env::var(BACKEND_VAR).ok())
    }

    fn from_vars(store_path: Option<String>, backend: Option<String>) -> Result<Self, ConfigError> {
        let store_path = PathBuf::from(store_path.unwrap_or_else(|| DEFAULT_STORE_PATH.to_string()));
        let backend = match backend {
            Some(name) => Backend::parse(&name)?,
            None => Backend::for_path(&store_path),
        };
        debug!("history store: {:?} at {}", backend, store_path.display());
        Ok(Self {
            store_path,
            backend,
        })
    }

    /// Whether a store was already written. Memory stores never outlive the process.
    pub fn store_exists(&self) -> bool {
        match self.backend {
            Backend::Json | Backend::Sqlite => self.store_path.exists(),
            Backend::Memory => false,
        }
    }

    pub fn open_store(&self) -> Result<Box<dyn HistoryStore>, StorageError> {
        Ok(match self.backend {
            Backend::Json => Box::new(JsonFileStore::new(&self.store_path)),
            Backend::Sqlite => Box::new(SqliteStore::open(&self.store_path)?),
            Backend::Memory => Box::new(MemoryStore::new()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config.store_path, PathBuf::from(DEFAULT_STORE_PATH));
        assert_eq!(config.backend, Backend::Json);
    }

    #[test]
    fn test_backend_from_extension() {
        let config = Config::from_vars(Some("/tmp/history.sqlite".to_string()), None).unwrap();
        assert_eq!(config.backend, Backend::Sqlite);
        assert_eq!(Backend::for_path(Path::new("h.db")), Backend::Sqlite);
        assert_eq!(Backend::for_path(Path::new("h")), Backend::Json);
    }

    #[test]
    fn test_explicit_backend_wins() {
        let config =
            Config::from_vars(Some("history.db".to_string()), Some("Memory".to_string())).unwrap();
        assert_eq!(config.backend, Backend::Memory);
        assert!(config.open_store().unwrap().read().unwrap().is_empty());
    }

    #[test]
    fn test_store_exists_does_not_create_database() {
        let path =
            std::env::temp_dir().join(format!("night-third-{}.sqlite", uuid::Uuid::new_v4()));
        let config = Config::from_vars(Some(path.display().to_string()), None).unwrap();
        assert!(!config.store_exists());
        assert!(!path.exists());

        config.open_store().unwrap();
        assert!(config.store_exists());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_unknown_backend() {
        let err = Config::from_vars(None, Some("redis".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownBackend(name) if name == "redis"));
    }
}
