//! Resolving director names for the ranked set.
//!
//! Left join: a ranked movie with no crew row, or whose directors
//! field is empty or the `\N` token, gets the `N/A` sentinel. The
//! output is a column aligned with the ranked sequence, so ordering
//! and cardinality are preserved by construction.

use crate::ranker::RankedMovie;
use datasets::{NOT_AVAILABLE, NameIndex, TitleCrew, is_missing};
use std::collections::HashMap;

/// Resolve the director column for the ranked movies, in ranked order.
///
/// Each comma-encoded id in a movie's directors field resolves through
/// the name index; ids with no known name become `N/A` individually,
/// so a field of N unresolvable ids renders as N sentinels joined with
/// `", "`.
pub fn resolve_directors(
    ranked: &[RankedMovie],
    crew: &[TitleCrew],
    names: &NameIndex,
) -> Vec<String> {
    let crew_by_id: HashMap<&str, &str> = crew
        .iter()
        .map(|record| (record.tconst.as_str(), record.directors.as_str()))
        .collect();

    ranked
        .iter()
        .map(|movie| match crew_by_id.get(movie.tconst.as_str()) {
            Some(field) if !field.is_empty() && !is_missing(field) => field
                .split(',')
                .map(|id| names.resolve(id))
                .collect::<Vec<_>>()
                .join(", "),
            _ => NOT_AVAILABLE.to_string(),
        })
        .collect()
}
