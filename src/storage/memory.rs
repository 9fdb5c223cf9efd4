use super::{decode, encode, HistoryStore, StorageError};
use crate::model::History;

/// Keeps the serialized history in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from already serialized text, as if left by an earlier session.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl HistoryStore for MemoryStore {
    fn read(&self) -> Result<History, StorageError> {
        match &self.raw {
            Some(raw) => decode(raw),
            None => Ok(History::new()),
        }
    }

    fn write(&mut self, history: &History) -> Result<(), StorageError> {
        self.raw = Some(encode(history)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CalculationRecord, TimeOfDay};
    use chrono::NaiveDate;

    #[test]
    fn test_empty_store_reads_empty_history() {
        let store = MemoryStore::new();
        assert!(store.read().unwrap().is_empty());
        assert!(MemoryStore::with_raw("   ").read().unwrap().is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let mut history = History::new();
        history.insert(CalculationRecord::new(
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            TimeOfDay::new(19, 15).unwrap(),
            TimeOfDay::new(4, 45).unwrap(),
            TimeOfDay::new(22, 25).unwrap(),
        ));
        let mut store = MemoryStore::new();
        store.write(&history).unwrap();
        assert_eq!(store.read().unwrap(), history);
        assert!(store.raw().unwrap().contains("\"firstThird\":\"22:25\""));
    }

    #[test]
    fn test_corrupt_payload_is_an_error() {
        let store = MemoryStore::with_raw("{not json");
        assert!(matches!(store.read(), Err(StorageError::Json(_))));
    }
}
