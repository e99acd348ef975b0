//! # Datasets Crate
//!
//! This crate handles loading the five IMDb bulk tables into typed
//! in-memory relations.
//!
//! ## Main Components
//!
//! - **types**: Record types for the five tables (all fields raw text)
//! - **parser**: Header-driven TSV parsing
//! - **fetch**: HTTP download + gunzip of the official datasets
//! - **index**: Person-id lookup index built from `name.basics`
//! - **error**: Error types for dataset loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use datasets::{DatasetSources, NameIndex, fetch};
//!
//! let sources = DatasetSources::default();
//! let data = fetch::load(&sources).await?;
//! let names = NameIndex::from_records(&data.names);
//!
//! println!("loaded {} titles", data.basics.len());
//! ```
//!
//! Everything in here treats IMDb's `\N` missing-value token as an
//! opaque piece of text: interpretation is the pipeline's job.

// Public modules
pub mod error;
pub mod fetch;
pub mod index;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DatasetError, Result};
pub use fetch::DatasetSources;
pub use index::NameIndex;
pub use types::{
    // Type aliases and tokens
    TitleId,
    NameId,
    MISSING,
    NOT_AVAILABLE,
    is_missing,
    // Table records
    TitleBasics,
    TitleRating,
    TitleCrew,
    NameBasics,
    TitlePrincipal,
    Datasets,
};
