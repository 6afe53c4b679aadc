use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Weekday};

use super::error::YearError;
use super::types::{Region, Year};

/// Parses the caller-supplied year string.
pub fn parse_year(input: &str) -> Result<Year, YearError> {
    if input.trim().is_empty() {
        return Err(YearError::Empty);
    }

    let label = input.trim();
    let value: i32 = label
        .parse()
        .map_err(|_| YearError::NotANumber(input.to_string()))?;

    let first_day = NaiveDate::from_ymd_opt(value, 1, 1).ok_or(YearError::OutOfRange(value))?;
    let last_day = NaiveDate::from_ymd_opt(value, 12, 31).ok_or(YearError::OutOfRange(value))?;

    Ok(Year::new(label, value, first_day, last_day))
}

/// Returns local midnight of every date of `year`, January 1st through
/// December 31st, in ascending order.
///
/// The day count comes from subtracting the two boundary instants, so leap
/// years yield 366 entries without special casing.
pub fn enumerate_year(
    year: &Year,
    region: &Region,
) -> Result<Vec<DateTime<FixedOffset>>, YearError> {
    let out_of_range = || YearError::OutOfRange(year.value());
    let start = region.midnight(year.first_day()).ok_or_else(out_of_range)?;
    let end = region.midnight(year.last_day()).ok_or_else(out_of_range)?;

    let span = (end - start).num_days();

    Ok((0..=span)
        .map(|offset| start + Duration::days(offset))
        .collect())
}

/// Formats a date as `YYYY-MM-DD` in its own offset.
pub fn format_date(date: &DateTime<FixedOffset>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn is_weekend(date: &DateTime<FixedOffset>) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
