mod classify;
mod dates;
mod error;
mod types;

pub use classify::{classify_date, SourceIndex};
pub use dates::{enumerate_year, format_date, is_weekend, parse_year, weekday_name};
pub use error::YearError;
pub use types::{
    HolidayCalendar, HolidaySummary, OutputBundle, Region, ResultDay, SourceDay, Year,
};
