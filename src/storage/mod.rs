//! Persistence for the recent calculations history.
//!
//! Every backend stores the history as the same JSON array, so a history
//! can move between backends without conversion.

pub mod error;
pub mod json_file;
pub mod memory;
pub mod sqlite;

pub use error::StorageError;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::model::History;

/// Key under which key-value backends keep the serialized history.
pub const STORAGE_KEY: &str = "lastCalculations";

pub trait HistoryStore {
    /// Returns the stored history, or an empty one when nothing was stored yet.
    fn read(&self) -> Result<History, StorageError>;
    /// Replaces the stored history.
    fn write(&mut self, history: &History) -> Result<(), StorageError>;
}

impl<S: HistoryStore + ?Sized> HistoryStore for Box<S> {
    fn read(&self) -> Result<History, StorageError> {
        (**self).read()
    }

    fn write(&mut self, history: &History) -> Result<(), StorageError> {
        (**self).write(history)
    }
}

pub(crate) fn decode(raw: &str) -> Result<History, StorageError> {
    if raw.trim().is_empty() {
        return Ok(History::new());
    }
    Ok(serde_json::from_str(raw)?)
}

pub(crate) fn encode(history: &History) -> Result<String, StorageError> {
    Ok(serde_json::to_string(history)?)
}
