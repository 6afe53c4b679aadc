use std::collections::HashMap;

use chrono::{DateTime, Datelike, FixedOffset};

use super::dates::{format_date, is_weekend, weekday_name};
use super::types::{HolidayCalendar, HolidaySummary, OutputBundle, ResultDay, SourceDay};

/// Lookup of upstream records by date string.
#[derive(Debug, Clone, Default)]
pub struct SourceIndex {
    days: HashMap<String, SourceDay>,
}

impl SourceIndex {
    /// Builds the index. A later record for the same date replaces an
    /// earlier one.
    pub fn from_days(days: impl IntoIterator<Item = SourceDay>) -> Self {
        let days = days
            .into_iter()
            .map(|day| (day.date.clone(), day))
            .collect();
        Self { days }
    }

    pub fn get(&self, date: &str) -> Option<&SourceDay> {
        self.days.get(date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl From<HolidayCalendar> for SourceIndex {
    fn from(calendar: HolidayCalendar) -> Self {
        Self::from_days(calendar.days)
    }
}

/// Classifies one date.
///
/// Weekends are holidays by default; an upstream record for the date always
/// wins, which is how substitute workdays and weekday holidays are expressed.
pub fn classify_date(date: &DateTime<FixedOffset>, index: &SourceIndex) -> ResultDay {
    let day = format_date(date);
    let holiday = index
        .get(&day)
        .map_or_else(|| is_weekend(date), |source| source.is_off_day);

    ResultDay {
        day,
        holiday,
        weekday: weekday_name(date.weekday()).to_string(),
    }
}

impl OutputBundle {
    /// Assembles the bundle from per-day results already in calendar order.
    pub fn from_days(days: Vec<ResultDay>) -> Self {
        let (mut holidays, mut workdays): (Vec<String>, Vec<String>) = (Vec::new(), Vec::new());

        for result in &days {
            if result.holiday {
                holidays.push(result.day.clone());
            } else {
                workdays.push(result.day.clone());
            }
        }

        holidays.sort();
        workdays.sort();

        Self {
            days,
            holidays,
            workdays,
        }
    }

    pub fn summary(&self) -> HolidaySummary {
        HolidaySummary {
            holidays: self.holidays.clone(),
        }
    }
}
