//! Output formatting functions.

pub mod json;
pub mod pretty;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::sync::SyncReport;

/// Format a run report for output.
pub fn format_report(report: &SyncReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_json(report),
        OutputFormat::Pretty => Ok(pretty::format_report(report)),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::writer::OutputPaths;

    #[test]
    fn test_format_report_as_json() {
        let report = SyncReport {
            year: "2023".to_string(),
            days: 365,
            holidays: 105,
            workdays: 260,
            paths: OutputPaths {
                days: PathBuf::from("data/2023.json"),
                holidays: PathBuf::from("data/2023-holidays.json"),
            },
        };

        let output = format_report(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["year"], "2023");
        assert_eq!(value["days"], 365);
        assert_eq!(value["paths"]["holidays"], "data/2023-holidays.json");
    }
}
