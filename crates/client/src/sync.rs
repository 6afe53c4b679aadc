//! The end-to-end run: fetch, classify, write.

use std::path::PathBuf;
use std::sync::Arc;

use holidaysync_core::calendar::{enumerate_year, parse_year, OutputBundle, Region, SourceIndex};
use serde::Serialize;

use crate::client::HolidayClient;
use crate::error::Result;
use crate::pool::classify_year;
use crate::writer::{write_outputs, OutputPaths};

/// Where the holiday-cn project publishes its yearly calendars.
pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/NateScarlet/holiday-cn/master";

/// Directory the result files land in, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "./data";

pub const DEFAULT_CONCURRENCY: u16 = 10;

/// Inputs of a sync run.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub year: String,
    pub base_url: String,
    pub output_dir: PathBuf,
    pub concurrency: usize,
}

impl SyncOptions {
    /// Options with every default filled in.
    pub fn new(year: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            concurrency: usize::from(DEFAULT_CONCURRENCY),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub year: String,
    pub days: usize,
    pub holidays: usize,
    pub workdays: usize,
    pub paths: OutputPaths,
}

/// Runs the whole pipeline for one year.
///
/// Nothing touches the disk until the calendar has been fetched, decoded
/// and classified.
pub async fn sync_year(options: &SyncOptions) -> Result<SyncReport> {
    let year = parse_year(&options.year)?;
    let region = Region::shanghai();

    let client = HolidayClient::new(options.base_url.as_str());
    let calendar = client.fetch_calendar(&year).await?;
    let index = Arc::new(SourceIndex::from(calendar));
    tracing::debug!(records = index.len(), "indexed calendar records");

    let dates = enumerate_year(&year, &region)?;
    let days = classify_year(&dates, index, options.concurrency).await?;
    let bundle = OutputBundle::from_days(days);

    let paths = write_outputs(&options.output_dir, &year, &bundle).await?;

    Ok(SyncReport {
        year: year.label().to_string(),
        days: bundle.days.len(),
        holidays: bundle.holidays.len(),
        workdays: bundle.workdays.len(),
        paths,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use holidaysync_core::calendar::YearError;

    #[test]
    fn test_options_builder() {
        let options = SyncOptions::new("2024")
            .with_base_url("http://localhost:3000")
            .with_output_dir("/tmp/out")
            .with_concurrency(4);

        assert_eq!(options.year, "2024");
        assert_eq!(options.base_url, "http://localhost:3000");
        assert_eq!(options.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(options.concurrency, 4);
    }

    #[tokio::test]
    async fn test_empty_year_fails_before_fetch() {
        let dir = tempfile::tempdir().unwrap();
        // Nothing listens on port 9; reaching the network would fail differently.
        let options = SyncOptions::new("")
            .with_base_url("http://127.0.0.1:9")
            .with_output_dir(dir.path());

        let result = sync_year(&options).await;

        assert!(matches!(
            result,
            Err(ClientError::InvalidYear(YearError::Empty))
        ));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_non_numeric_year_fails_before_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let options = SyncOptions::new("next")
            .with_base_url("http://127.0.0.1:9")
            .with_output_dir(dir.path());

        let result = sync_year(&options).await;

        assert!(matches!(
            result,
            Err(ClientError::InvalidYear(YearError::NotANumber(_)))
        ));
    }
}
