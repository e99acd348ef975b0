//! Core record types for the five IMDb bulk tables.
//!
//! Every field is kept as the raw text the table shipped, because IMDb
//! encodes absent values as the reserved token `\N` rather than an
//! empty field. Numeric interpretation happens in the pipeline stages,
//! where each stage knows the right fallback for an unparsable value.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up title ids with person ids

/// Stable IMDb title identifier (`tt0111161`)
pub type TitleId = String;

/// Stable IMDb person identifier (`nm0000209`)
pub type NameId = String;

/// The reserved missing-value token used throughout the IMDb tables.
///
/// This is two literal characters, backslash + N. It is not equivalent
/// to an empty field and must survive loading verbatim.
pub const MISSING: &str = "\\N";

/// Sentinel used for anything the pipeline cannot resolve or parse
pub const NOT_AVAILABLE: &str = "N/A";

/// Returns true if a raw field holds the IMDb missing-value token
pub fn is_missing(field: &str) -> bool {
    field == MISSING
}

// =============================================================================
// Table Records
// =============================================================================

/// One row of `title.basics.tsv` (the columns this pipeline uses)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleBasics {
    pub tconst: TitleId,
    /// Category such as "movie", "short", "tvSeries"
    pub title_type: String,
    pub primary_title: String,
    /// Release year as text, possibly `\N`
    pub start_year: String,
    /// Comma-separated genre list, possibly `\N`
    pub genres: String,
    /// Runtime in minutes as text, possibly `\N`
    pub runtime_minutes: String,
}

/// One row of `title.ratings.tsv` (at most one per title)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleRating {
    pub tconst: TitleId,
    pub average_rating: String,
    pub num_votes: String,
}

/// One row of `title.crew.tsv` (at most one per title)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleCrew {
    pub tconst: TitleId,
    /// Comma-encoded list of director NameIds, possibly `\N`
    pub directors: String,
}

/// One row of `name.basics.tsv`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameBasics {
    pub nconst: NameId,
    pub primary_name: String,
}

/// One row of `title.principals.tsv` (many per title)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitlePrincipal {
    pub tconst: TitleId,
    /// Display order within the title, as text
    pub ordering: String,
    pub nconst: NameId,
    /// Credit category: actor, actress, director, writer, ...
    pub category: String,
}

// =============================================================================
// Datasets - the five relations of one run
// =============================================================================

/// All five tables of a single run, loaded once and never mutated.
///
/// Stages borrow the relations they need; nothing here is shared
/// mutable state.
#[derive(Debug, Default)]
pub struct Datasets {
    pub basics: Vec<TitleBasics>,
    pub ratings: Vec<TitleRating>,
    pub crew: Vec<TitleCrew>,
    pub names: Vec<NameBasics>,
    pub principals: Vec<TitlePrincipal>,
}

impl Datasets {
    /// Row counts per table, for logging and validation
    pub fn counts(&self) -> (usize, usize, usize, usize, usize) {
        (
            self.basics.len(),
            self.ratings.len(),
            self.crew.len(),
            self.names.len(),
            self.principals.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_is_two_characters() {
        assert_eq!(MISSING.len(), 2);
        assert!(is_missing("\\N"));
        assert!(!is_missing(""));
        assert!(!is_missing("N"));
    }

    #[test]
    fn counts_of_empty_datasets() {
        let data = Datasets::default();
        assert_eq!(data.counts(), (0, 0, 0, 0, 0));
    }
}
