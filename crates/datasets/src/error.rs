//! Error types for the datasets crate.
//!
//! Every error here is fatal to the run: the report cannot be built
//! unless all five tables load completely (spurious per-row tolerance
//! lives in the pipeline stages instead, where a bad value degrades to
//! a sentinel rather than an error).

use thiserror::Error;

/// Errors that can occur while fetching or parsing the IMDb tables
#[derive(Error, Debug)]
pub enum DatasetError {
    /// A dataset source could not be reached or returned a bad status
    #[error("Failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// I/O error while reading or decompressing a table
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A table arrived without the expected header row
    #[error("{file} is empty (no header row)")]
    EmptyTable { file: String },

    /// The header row lacks a column the pipeline needs
    #[error("{file} is missing required column '{column}'")]
    MissingColumn { file: String, column: String },

    /// A data row couldn't be parsed
    ///
    /// This variant stores context about where the error occurred
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DatasetError>;
