//! Fetching and decompressing the five IMDb tables.
//!
//! The tables ship as gzipped TSV from datasets.imdbws.com. A source
//! can also be a path to an already-downloaded `.tsv.gz` file, which
//! keeps repeat runs off the network. All five downloads run
//! concurrently; parsing then runs on the rayon pool, one table per
//! join arm.
//!
//! Any failure here is fatal: the pipeline needs all five relations
//! before the first stage can run.

use crate::error::{DatasetError, Result};
use crate::parser;
use crate::types::Datasets;
use flate2::read::GzDecoder;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

pub const BASICS_URL: &str = "https://datasets.imdbws.com/title.basics.tsv.gz";
pub const RATINGS_URL: &str = "https://datasets.imdbws.com/title.ratings.tsv.gz";
pub const CREW_URL: &str = "https://datasets.imdbws.com/title.crew.tsv.gz";
pub const NAMES_URL: &str = "https://datasets.imdbws.com/name.basics.tsv.gz";
pub const PRINCIPALS_URL: &str = "https://datasets.imdbws.com/title.principals.tsv.gz";

const TABLE_FILES: [&str; 5] = [
    "title.basics.tsv.gz",
    "title.ratings.tsv.gz",
    "title.crew.tsv.gz",
    "name.basics.tsv.gz",
    "title.principals.tsv.gz",
];

/// The five source locations of one run.
///
/// A location is either an `http(s)://` URL or a filesystem path.
#[derive(Debug, Clone)]
pub struct DatasetSources {
    pub basics: String,
    pub ratings: String,
    pub crew: String,
    pub names: String,
    pub principals: String,
}

impl Default for DatasetSources {
    /// The official IMDb dataset URLs
    fn default() -> Self {
        Self {
            basics: BASICS_URL.to_string(),
            ratings: RATINGS_URL.to_string(),
            crew: CREW_URL.to_string(),
            names: NAMES_URL.to_string(),
            principals: PRINCIPALS_URL.to_string(),
        }
    }
}

impl DatasetSources {
    /// Point all five sources at `.tsv.gz` files under a local directory
    pub fn local_dir(dir: &Path) -> Self {
        let path = |file: &str| dir.join(file).to_string_lossy().into_owned();
        Self {
            basics: path(TABLE_FILES[0]),
            ratings: path(TABLE_FILES[1]),
            crew: path(TABLE_FILES[2]),
            names: path(TABLE_FILES[3]),
            principals: path(TABLE_FILES[4]),
        }
    }
}

/// Fetch, decompress, and parse all five tables.
///
/// Downloads run concurrently; parsing fans out over the rayon pool
/// once everything is in memory.
pub async fn load(sources: &DatasetSources) -> Result<Datasets> {
    let client = reqwest::Client::new();

    info!("Fetching IMDb datasets (basics, ratings, crew, names, principals)");
    let (basics, ratings, crew, names, principals) = tokio::try_join!(
        fetch_lines(&client, &sources.basics),
        fetch_lines(&client, &sources.ratings),
        fetch_lines(&client, &sources.crew),
        fetch_lines(&client, &sources.names),
        fetch_lines(&client, &sources.principals),
    )?;
    info!("All five tables fetched, parsing");

    let ((basics, ratings), (crew, (names, principals))) = rayon::join(
        || {
            rayon::join(
                || parser::parse_title_basics(&basics),
                || parser::parse_title_ratings(&ratings),
            )
        },
        || {
            rayon::join(
                || parser::parse_title_crew(&crew),
                || {
                    rayon::join(
                        || parser::parse_name_basics(&names),
                        || parser::parse_title_principals(&principals),
                    )
                },
            )
        },
    );

    let data = Datasets {
        basics: basics?,
        ratings: ratings?,
        crew: crew?,
        names: names?,
        principals: principals?,
    };
    let (b, r, c, n, p) = data.counts();
    info!("Loaded {b} titles, {r} ratings, {c} crew rows, {n} names, {p} principals");
    Ok(data)
}

/// Fetch one gzipped table and return its decompressed lines
async fn fetch_lines(client: &reqwest::Client, source: &str) -> Result<Vec<String>> {
    let bytes = if source.starts_with("http://") || source.starts_with("https://") {
        let transport = |e: reqwest::Error| DatasetError::Transport {
            url: source.to_string(),
            source: e,
        };
        let response = client
            .get(source)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(transport)?;
        response.bytes().await.map_err(transport)?.to_vec()
    } else {
        tokio::fs::read(source).await?
    };
    gunzip_lines(&bytes)
}

fn gunzip_lines(bytes: &[u8]) -> Result<Vec<String>> {
    let reader = BufReader::new(GzDecoder::new(bytes));
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    Ok(lines)
}
