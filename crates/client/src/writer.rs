//! Writes the result files.

use std::path::{Path, PathBuf};

use holidaysync_core::calendar::{OutputBundle, Year};
use serde::Serialize;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::error::Result;

/// Permission bits of the written files.
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Locations of the two result files of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputPaths {
    /// `<dir>/<year>.json`
    pub days: PathBuf,
    /// `<dir>/<year>-holidays.json`
    pub holidays: PathBuf,
}

impl OutputPaths {
    pub fn new(dir: &Path, year: &Year) -> Self {
        Self {
            days: dir.join(format!("{}.json", year.label())),
            holidays: dir.join(format!("{}-holidays.json", year.label())),
        }
    }
}

/// Writes the full bundle, then the holiday-only summary.
///
/// The files are written one after the other; if the second write fails
/// the first file stays on disk.
pub async fn write_outputs(dir: &Path, year: &Year, bundle: &OutputBundle) -> Result<OutputPaths> {
    let paths = OutputPaths::new(dir, year);
    fs::create_dir_all(dir).await?;

    write_json(&paths.days, bundle).await?;
    tracing::info!(path = %paths.days.display(), "wrote days");

    write_json(&paths.holidays, &bundle.summary()).await?;
    tracing::info!(path = %paths.holidays.display(), "wrote holidays");

    Ok(paths)
}

async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let contents = serde_json::to_vec(value)?;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(FILE_MODE);

    let mut file = options.open(path).await?;
    file.write_all(&contents).await?;
    file.flush().await?;
    Ok(())
}
