//! Pretty output formatting.

use crate::sync::SyncReport;

/// Format a run report for display.
pub fn format_report(report: &SyncReport) -> String {
    let mut output = format!("YEAR {}\n", report.year);
    output.push_str(&"-".repeat(40));
    output.push_str(&format!(
        "\n  Days: {}\n  Holidays: {}\n  Workdays: {}",
        report.days, report.holidays, report.workdays
    ));
    output.push_str(&format!(
        "\n  Written: {}\n  Written: {}",
        report.paths.days.display(),
        report.paths.holidays.display()
    ));
    output
}
