use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Offset of the Asia/Shanghai region. China has not observed DST since 1991.
const SHANGHAI_OFFSET: FixedOffset = match FixedOffset::east_opt(8 * 3600) {
    Some(offset) => offset,
    None => panic!("UTC+8 is out of the fixed offset range"),
};

/// One record of the upstream holiday calendar.
///
/// A record may mark a weekday as a day off or a weekend day as a
/// substitute workday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDay {
    #[serde(default)]
    pub name: String,
    /// Date in `YYYY-MM-DD` form.
    pub date: String,
    pub is_off_day: bool,
}

impl SourceDay {
    /// Creates a new record for the given date.
    pub fn new(name: impl Into<String>, date: impl Into<String>, is_off_day: bool) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            is_off_day,
        }
    }
}

/// The payload published for a single year.
///
/// Only `days` is read; any other top level field is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    pub days: Vec<SourceDay>,
}

/// Classification of a single calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultDay {
    /// Date in `YYYY-MM-DD` form.
    pub day: String,
    pub holiday: bool,
    /// English weekday name, e.g. `Monday`.
    pub weekday: String,
}

/// The full-year artifact written to `<year>.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputBundle {
    /// One entry per calendar date, in calendar order.
    pub days: Vec<ResultDay>,
    pub holidays: Vec<String>,
    pub workdays: Vec<String>,
}

/// The holiday-only artifact written to `<year>-holidays.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySummary {
    pub holidays: Vec<String>,
}

/// A validated target year.
///
/// Keeps the string exactly as the caller supplied it, since it is reused
/// verbatim for the remote URL and the output file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Year {
    label: String,
    value: i32,
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl Year {
    pub(crate) fn new(
        label: impl Into<String>,
        value: i32,
        first_day: NaiveDate,
        last_day: NaiveDate,
    ) -> Self {
        Self {
            label: label.into(),
            value,
            first_day,
            last_day,
        }
    }

    /// The year as supplied by the caller.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// January 1st of the year.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// December 31st of the year.
    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }
}

/// The time reference used to build and format every date of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    offset: FixedOffset,
}

impl Region {
    /// UTC+08:00, the offset the upstream calendar is published for.
    pub fn shanghai() -> Self {
        Self {
            offset: SHANGHAI_OFFSET,
        }
    }

    /// Local midnight of `date` in this region.
    pub fn midnight(&self, date: NaiveDate) -> Option<DateTime<FixedOffset>> {
        date.and_time(NaiveTime::MIN)
            .and_local_timezone(self.offset)
            .single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_day_deserializes_camel_case() {
        let json = r#"{"name":"春节","date":"2024-02-10","isOffDay":true}"#;
        let day: SourceDay = serde_json::from_str(json).unwrap();

        assert_eq!(day, SourceDay::new("春节", "2024-02-10", true));
    }

    #[test]
    fn test_source_day_name_is_optional() {
        let json = r#"{"date":"2024-02-18","isOffDay":false}"#;
        let day: SourceDay = serde_json::from_str(json).unwrap();

        assert!(day.name.is_empty());
        assert!(!day.is_off_day);
    }

    #[test]
    fn test_holiday_calendar_ignores_unknown_fields() {
        let json = r#"{
            "$schema": "https://example.com/schema.json",
            "year": 2024,
            "papers": ["http://www.gov.cn/"],
            "days": [{"name":"元旦","date":"2024-01-01","isOffDay":true}]
        }"#;
        let calendar: HolidayCalendar = serde_json::from_str(json).unwrap();

        assert_eq!(calendar.days.len(), 1);
        assert_eq!(calendar.days[0].date, "2024-01-01");
    }

    #[test]
    fn test_holiday_calendar_requires_days() {
        let result: Result<HolidayCalendar, _> = serde_json::from_str(r#"{"year":2024}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_bundle_field_order() {
        let bundle = OutputBundle {
            days: vec![ResultDay {
                day: "2024-01-06".to_string(),
                holiday: true,
                weekday: "Saturday".to_string(),
            }],
            holidays: vec!["2024-01-06".to_string()],
            workdays: vec![],
        };

        assert_eq!(
            serde_json::to_string(&bundle).unwrap(),
            r#"{"days":[{"day":"2024-01-06","holiday":true,"weekday":"Saturday"}],"holidays":["2024-01-06"],"workdays":[]}"#
        );
    }

    #[test]
    fn test_region_midnight_keeps_local_date() {
        let region = Region::shanghai();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let midnight = region.midnight(date).unwrap();

        assert_eq!(midnight.date_naive(), date);
        assert_eq!(midnight.offset().local_minus_utc(), 8 * 3600);
        assert_eq!(midnight.to_rfc3339(), "2024-01-01T00:00:00+08:00");
    }
}
