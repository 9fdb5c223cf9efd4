//! Compute the first third of the night from Maghreb and Fajr times and keep a
//! short history of recent calculations.
//!
//! ```
//! use night_third::{compute_first_third, TimeOfDay};
//!
//! let maghreb: TimeOfDay = "18:00".parse().unwrap();
//! let fajr: TimeOfDay = "05:00".parse().unwrap();
//! assert_eq!(compute_first_third(maghreb, fajr).to_string(), "21:40");
//! ```

pub mod calculator;
pub mod config;
pub mod export;
pub mod model;
pub mod share;
pub mod storage;

pub use calculator::*;
pub use export::{Export, ExportError, ExportFormat};
pub use model::{CalculationRecord, History, TimeOfDay, TimeOfDayError, HISTORY_CAPACITY};
pub use share::*;
pub use storage::{HistoryStore, StorageError};
