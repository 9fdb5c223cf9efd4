use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::TimeOfDay;

/// One computed first third, as shown in the recent calculations list.
///
/// Field names on the wire follow the layout the web widget kept in local
/// storage, so histories written by either side stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRecord {
    #[serde(rename = "date", with = "request_date")]
    request_date: NaiveDate,
    #[serde(rename = "maghreb")]
    sunset: TimeOfDay,
    #[serde(rename = "fajr")]
    dawn: TimeOfDay,
    #[serde(rename = "firstThird")]
    first_third: TimeOfDay,
}

impl CalculationRecord {
    pub fn new(
        request_date: NaiveDate,
        sunset: TimeOfDay,
        dawn: TimeOfDay,
        first_third: TimeOfDay,
    ) -> Self {
        Self {
            request_date,
            sunset,
            dawn,
            first_third,
        }
    }

    pub fn request_date(&self) -> NaiveDate {
        self.request_date
    }

    pub fn sunset(&self) -> TimeOfDay {
        self.sunset
    }

    pub fn dawn(&self) -> TimeOfDay {
        self.dawn
    }

    pub fn first_third(&self) -> TimeOfDay {
        self.first_third
    }
}

pub(crate) mod request_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";
    const ISO_FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DISPLAY_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, DISPLAY_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(&raw, ISO_FORMAT))
            .map_err(|_| serde::de::Error::custom(format!("invalid calculation date {:?}", raw)))
    }
}
