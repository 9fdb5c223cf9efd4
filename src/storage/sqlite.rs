use rusqlite::{Connection, OptionalExtension};
use std::path::Path;

use super::{decode, encode, HistoryStore, StorageError, STORAGE_KEY};
use crate::model::History;

/// Key-value table holding serialized values, one row per key.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        Self::from_connection(Connection::open(path)?)
    }

    pub fn from_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn get(&self, key: &str) -> rusqlite::Result<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
    }

    fn set(&self, key: &str, value: &str) -> rusqlite::Result<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }
}

impl HistoryStore for SqliteStore {
    fn read(&self) -> Result<History, StorageError> {
        match self.get(STORAGE_KEY)? {
            Some(raw) => decode(&raw),
            None => Ok(History::new()),
        }
    }

    fn write(&mut self, history: &History) -> Result<(), StorageError> {
        self.set(STORAGE_KEY, &encode(history)?)?;
        Ok(())
    }
}
