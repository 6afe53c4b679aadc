//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::sync::{SyncOptions, DEFAULT_BASE_URL, DEFAULT_CONCURRENCY, DEFAULT_OUTPUT_DIR};

/// Builds yearly holiday and workday lists from the holiday-cn calendar.
#[derive(Debug, Parser)]
#[command(name = "holidaysync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Year to process, e.g. 2024.
    #[arg(long, default_value = "")]
    pub year: String,

    /// Base URL the `<year>.json` calendar is fetched from.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory the result files are written to.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Maximum number of dates classified at once.
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: u16,

    /// Summary output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress the summary.
    #[arg(long)]
    pub quiet: bool,
}

impl Cli {
    /// Options for a sync run.
    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            year: self.year.clone(),
            base_url: self.base_url.clone(),
            output_dir: self.output_dir.clone(),
            concurrency: usize::from(self.concurrency),
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}
