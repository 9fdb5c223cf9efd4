use serde::{Deserialize, Serialize};

use super::CalculationRecord;

/// Number of calculations kept in the recent history.
pub const HISTORY_CAPACITY: usize = 5;

/// Recent calculations, most recent first, never longer than [`HISTORY_CAPACITY`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CalculationRecord>", into = "Vec<CalculationRecord>")]
pub struct History {
    records: Vec<CalculationRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first [`HISTORY_CAPACITY`] records, which are the most recent.
    pub fn from_records(mut records: Vec<CalculationRecord>) -> Self {
        records.truncate(HISTORY_CAPACITY);
        Self { records }
    }

    pub fn insert(&mut self, record: CalculationRecord) {
        self.records.insert(0, record);
        self.records.truncate(HISTORY_CAPACITY);
    }

    pub fn records(&self) -> &[CalculationRecord] {
        &self.records
    }

    pub fn latest(&self) -> Option<&CalculationRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CalculationRecord> {
        self.records.iter()
    }
}

impl From<Vec<CalculationRecord>> for History {
    fn from(records: Vec<CalculationRecord>) -> Self {
        Self::from_records(records)
    }
}

impl From<History> for Vec<CalculationRecord> {
    fn from(history: History) -> Self {
        history.records
    }
}
