//! CSV output for the finished report.
//!
//! Rows are written in ranked order to a `.tmp` sibling, then renamed
//! over the target path so readers never observe a half-written file.

use std::ffi::OsString;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

/// Public column names the report is read by. Every field is already a
/// display string by the time a row is built, missing values included.
pub const REPORT_COLUMNS: [&str; 11] = [
    "IMDb_ID",
    "Title",
    "Year",
    "Genre",
    "IMDb_Rating",
    "Votes",
    "Director",
    "Main_Actors",
    "Runtime",
    "Plot",
    "Poster_URL",
];

/// One finished line of the report
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportRow {
    #[serde(rename = "IMDb_ID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "IMDb_Rating")]
    pub imdb_rating: String,
    #[serde(rename = "Votes")]
    pub votes: String,
    #[serde(rename = "Director")]
    pub director: String,
    #[serde(rename = "Main_Actors")]
    pub main_actors: String,
    #[serde(rename = "Runtime")]
    pub runtime: String,
    #[serde(rename = "Plot")]
    pub plot: String,
    #[serde(rename = "Poster_URL")]
    pub poster_url: String,
}

/// Write the report to `path` atomically.
///
/// The header row is always written, so an empty run still produces a
/// well-formed single-line CSV.
pub fn write_report(path: &Path, rows: &[ReportRow]) -> Result<()> {
    let mut tmp = OsString::from(path.as_os_str());
    tmp.push(".tmp");
    let tmp = Path::new(&tmp);

    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(tmp)
            .with_context(|| format!("failed to create {}", tmp.display()))?;
        writer
            .write_record(REPORT_COLUMNS)
            .context("failed to write CSV header")?;
        for row in rows {
            writer.serialize(row).context("failed to write CSV row")?;
        }
        writer.flush().context("failed to flush CSV output")?;
    }

    fs::rename(tmp, path)
        .with_context(|| format!("failed to move report into place at {}", path.display()))?;
    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
