use std::fmt::Write;

use super::{Export, ExportError};
use crate::model::{calculation::request_date::DISPLAY_FORMAT, CalculationRecord};

const CSV_HEADER: [&str; 4] = ["date", "maghreb", "fajr", "firstThird"];

impl Export for [CalculationRecord] {
    fn to_csv(&self) -> Result<String, ExportError> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(vec![]);
        wtr.write_record(CSV_HEADER)?;
        for record in self {
            wtr.serialize(record)?;
        }
        Ok(String::from_utf8(wtr.into_inner()?)?)
    }

    fn to_md(&self) -> Result<String, ExportError> {
        let mut buffer = String::new();

        writeln!(buffer, "| Date | Maghreb | Fajr | First third |")?;
        writeln!(buffer, "|------|---------|------|-------------|")?;

        for record in self {
            writeln!(
                buffer,
                "| {} | {} | {} | {} |",
                record.request_date().format(DISPLAY_FORMAT),
                record.sunset(),
                record.dawn(),
                record.first_third()
            )?;
        }
        Ok(buffer)
    }

    fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string(self).map_err(ExportError::JsonToString)
    }
}
