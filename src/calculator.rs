//! First third of the night.
//!
//! The night runs from Maghreb to the following Fajr. Both times are anchored
//! to a fixed reference date; when Fajr falls earlier in the day than Maghreb
//! it is moved to the next day. A third of the night length, floored to whole
//! minutes, is added to Maghreb.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use log::{debug, info, warn};

use crate::model::{CalculationRecord, History, TimeOfDay};
use crate::storage::HistoryStore;

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn anchor(date: NaiveDate, time: TimeOfDay) -> NaiveDateTime {
    date.and_time(time.to_naive_time())
}

/// Time between Maghreb and Fajr. Zero when both are equal.
pub fn night_duration(sunset: TimeOfDay, dawn: TimeOfDay) -> Duration {
    let day = reference_date();
    let start = anchor(day, sunset);
    let mut end = anchor(day, dawn);
    if end < start {
        end = anchor(day + Duration::days(1), dawn);
    }
    end - start
}

pub fn compute_first_third(sunset: TimeOfDay, dawn: TimeOfDay) -> TimeOfDay {
    let third = Duration::minutes(night_duration(sunset, dawn).num_minutes() / 3);
    let first_third = anchor(reference_date(), sunset) + third;
    TimeOfDay::from(first_third.time())
}

/// Returns `history` with a new record for `today` in front, capped to the
/// history capacity. The input is left untouched.
pub fn record_calculation(
    history: &History,
    sunset: TimeOfDay,
    dawn: TimeOfDay,
    first_third: TimeOfDay,
    today: NaiveDate,
) -> History {
    let mut updated = history.clone();
    updated.insert(CalculationRecord::new(today, sunset, dawn, first_third));
    updated
}

/// A calculator session: the history loaded from `store` plus the store it is
/// written back to after every calculation.
pub struct NightThirdCalculator<S: HistoryStore> {
    store: S,
    history: History,
}

impl<S: HistoryStore> NightThirdCalculator<S> {
    pub fn open(store: S) -> Self {
        let history = match store.read() {
            Ok(history) => {
                debug!("loaded {} previous calculations", history.len());
                history
            }
            Err(e) => {
                warn!("ignoring unreadable calculation history: {}", e);
                History::new()
            }
        };
        Self { store, history }
    }

    /// Computes and records the first third. Nothing happens when either time
    /// is missing.
    pub fn calculate(
        &mut self,
        sunset: Option<TimeOfDay>,
        dawn: Option<TimeOfDay>,
        today: NaiveDate,
    ) -> Option<CalculationRecord> {
        let (sunset, dawn) = match (sunset, dawn) {
            (Some(sunset), Some(dawn)) => (sunset, dawn),
            _ => {
                debug!("maghreb or fajr missing, skipping calculation");
                return None;
            }
        };

        let first_third = compute_first_third(sunset, dawn);
        info!(
            "first third of the night for maghreb {} / fajr {}: {}",
            sunset, dawn, first_third
        );

        self.history = record_calculation(&self.history, sunset, dawn, first_third, today);
        if let Err(e) = self.store.write(&self.history) {
            warn!("could not persist calculation history: {}", e);
        }
        self.history.latest().cloned()
    }

    pub fn calculate_today(
        &mut self,
        sunset: Option<TimeOfDay>,
        dawn: Option<TimeOfDay>,
    ) -> Option<CalculationRecord> {
        self.calculate(sunset, dawn, Local::now().date_naive())
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn latest(&self) -> Option<&CalculationRecord> {
        self.history.latest()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
