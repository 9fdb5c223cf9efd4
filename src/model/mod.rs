pub mod calculation;
pub mod history;
pub mod time_of_day;

pub use calculation::*;
pub use history::*;
pub use time_of_day::*;
