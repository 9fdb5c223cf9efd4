use chrono::NaiveDate;
use night_third::storage::MemoryStore;
use night_third::{Export, NightThirdCalculator, TimeOfDay};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut calculator = NightThirdCalculator::open(MemoryStore::new());
    let nights = [("18:00", "05:00"), ("19:15", "04:45"), ("20:00", "20:00")];

    for (day, (maghreb, fajr)) in (1..).zip(nights) {
        let sunset: TimeOfDay = maghreb.parse()?;
        let dawn: TimeOfDay = fajr.parse()?;
        let date = NaiveDate::from_ymd_opt(2026, 10, day).ok_or("bad date")?;
        if let Some(record) = calculator.calculate(Some(sunset), Some(dawn), date) {
            println!("{} -> {}: {}", maghreb, fajr, record.first_third());
        }
    }

    print!("{}", calculator.history().records().to_md()?);
    Ok(())
}
