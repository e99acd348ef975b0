//! Selecting the main actors for each ranked movie.
//!
//! ## Algorithm
//! 1. Restrict principals to rows whose tconst is in the ranked set
//! 2. Partition into "preferred" (category actor/actress) and "all"
//! 3. Group preferred rows by title, sort by billing order (missing
//!    orderings last), take the top N, resolve names
//! 4. Titles with zero preferred rows fall back to the same procedure
//!    over every category they do have
//! 5. Titles with no principal rows at all resolve to `N/A` at
//!    attachment time
//!
//! The fallback is all-or-nothing on purpose: a title with a single
//! actor row is not padded out of other categories.
//!
//! Results are keyed by title id, not position, so group order never
//! matters; [`main_actors_for`] does the id-keyed attachment.

use crate::ranker::RankedMovie;
use datasets::{NOT_AVAILABLE, NameIndex, TitleId, TitlePrincipal, is_missing};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// How many actors each movie's Main_Actors field lists
pub const DEFAULT_TOP_ACTORS: usize = 3;

const PREFERRED_CATEGORIES: [&str; 2] = ["actor", "actress"];

/// Billing-order sort key; missing or unparsable orderings sort last
fn ordering_key(raw: &str) -> u32 {
    raw.parse().unwrap_or(u32::MAX)
}

/// Sort a title's rows by billing order, take the first `top_n`
/// resolvable person ids, and render the joined name list.
fn billed_names(mut rows: Vec<&TitlePrincipal>, names: &NameIndex, top_n: usize) -> String {
    // Stable sort: rows with equal (or missing) ordering keep file order.
    rows.sort_by_key(|row| ordering_key(&row.ordering));
    let resolved: Vec<&str> = rows
        .iter()
        .filter(|row| !is_missing(&row.nconst))
        .take(top_n)
        .map(|row| names.resolve(&row.nconst))
        .collect();
    if resolved.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        resolved.join(", ")
    }
}

/// Compute the Main_Actors text for every ranked movie that has
/// principal rows. Lookups into the result should go through
/// [`main_actors_for`], which supplies the sentinel for absent ids.
pub fn resolve_main_actors(
    ranked: &[RankedMovie],
    principals: &[TitlePrincipal],
    names: &NameIndex,
    top_n: usize,
) -> HashMap<TitleId, String> {
    let ranked_ids: HashSet<&str> = ranked.iter().map(|movie| movie.tconst.as_str()).collect();

    let mut preferred_groups: HashMap<&str, Vec<&TitlePrincipal>> = HashMap::new();
    let mut all_groups: HashMap<&str, Vec<&TitlePrincipal>> = HashMap::new();
    for row in principals {
        if !ranked_ids.contains(row.tconst.as_str()) {
            continue;
        }
        all_groups.entry(row.tconst.as_str()).or_default().push(row);
        if PREFERRED_CATEGORIES.contains(&row.category.as_str()) {
            preferred_groups
                .entry(row.tconst.as_str())
                .or_default()
                .push(row);
        }
    }
    debug!(
        "{} titles with actor/actress credits, {} with any credits",
        preferred_groups.len(),
        all_groups.len()
    );

    let mut main_actors: HashMap<TitleId, String> = HashMap::with_capacity(all_groups.len());
    for (tconst, group) in preferred_groups {
        main_actors.insert(tconst.to_string(), billed_names(group, names, top_n));
    }
    // Fallback fires only for titles with zero actor/actress rows.
    for (tconst, group) in all_groups {
        if main_actors.contains_key(tconst) {
            continue;
        }
        main_actors.insert(tconst.to_string(), billed_names(group, names, top_n));
    }
    main_actors
}

/// Id-keyed attachment with the `N/A` sentinel for unknown titles
pub fn main_actors_for<'a>(main_actors: &'a HashMap<TitleId, String>, tconst: &str) -> &'a str {
    main_actors
        .get(tconst)
        .map(String::as_str)
        .unwrap_or(NOT_AVAILABLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use datasets::NameBasics;

    fn movie(tconst: &str) -> RankedMovie {
        RankedMovie {
            tconst: tconst.to_string(),
            primary_title: "T".to_string(),
            start_year: "2000".to_string(),
            genres: "Drama".to_string(),
            runtime_minutes: "100".to_string(),
            average_rating: "8.0".to_string(),
            num_votes: "100".to_string(),
        }
    }

    fn principal(tconst: &str, ordering: &str, nconst: &str, category: &str) -> TitlePrincipal {
        TitlePrincipal {
            tconst: tconst.to_string(),
            ordering: ordering.to_string(),
            nconst: nconst.to_string(),
            category: category.to_string(),
        }
    }

    fn names(pairs: &[(&str, &str)]) -> NameIndex {
        let records: Vec<NameBasics> = pairs
            .iter()
            .map(|(id, name)| NameBasics {
                nconst: id.to_string(),
                primary_name: name.to_string(),
            })
            .collect();
        NameIndex::from_records(&records)
    }

    #[test]
    fn takes_top_n_by_billing_order_with_missing_last() {
        // Orderings [3, 1, \N, 2, 0]: the top three must be 0, 1, 2.
        let principals = vec![
            principal("tt1", "3", "nm3", "actor"),
            principal("tt1", "1", "nm1", "actress"),
            principal("tt1", "\\N", "nm9", "actor"),
            principal("tt1", "2", "nm2", "actor"),
            principal("tt1", "0", "nm0", "actress"),
        ];
        let index = names(&[
            ("nm0", "Zeroth"),
            ("nm1", "First"),
            ("nm2", "Second"),
            ("nm3", "Third"),
            ("nm9", "Unordered"),
        ]);
        let result = resolve_main_actors(&[movie("tt1")], &principals, &index, 3);
        assert_eq!(result["tt1"], "Zeroth, First, Second");
    }

    #[test]
    fn fallback_covers_titles_with_no_actor_rows() {
        let principals = vec![
            principal("tt1", "1", "nm1", "director"),
            principal("tt1", "2", "nm2", "writer"),
        ];
        let index = names(&[("nm1", "Director Person"), ("nm2", "Writer Person")]);
        let result = resolve_main_actors(&[movie("tt1")], &principals, &index, 3);
        // Fewer than top_n rows: never padded.
        assert_eq!(result["tt1"], "Director Person, Writer Person");
    }

    #[test]
    fn fallback_does_not_pad_a_short_preferred_group() {
        let principals = vec![
            principal("tt1", "1", "nm1", "actor"),
            principal("tt1", "2", "nm2", "writer"),
            principal("tt1", "3", "nm3", "writer"),
        ];
        let index = names(&[("nm1", "Lone Actor"), ("nm2", "W2"), ("nm3", "W3")]);
        let result = resolve_main_actors(&[movie("tt1")], &principals, &index, 3);
        assert_eq!(result["tt1"], "Lone Actor");
    }

    #[test]
    fn unresolvable_person_ids_become_sentinels() {
        let principals = vec![
            principal("tt1", "1", "nm1", "actor"),
            principal("tt1", "2", "nm404", "actress"),
        ];
        let index = names(&[("nm1", "Known")]);
        let result = resolve_main_actors(&[movie("tt1")], &principals, &index, 3);
        assert_eq!(result["tt1"], "Known, N/A");
    }

    #[test]
    fn principals_outside_the_ranked_set_are_ignored() {
        let principals = vec![principal("tt999", "1", "nm1", "actor")];
        let index = names(&[("nm1", "Elsewhere")]);
        let result = resolve_main_actors(&[movie("tt1")], &principals, &index, 3);
        assert!(result.is_empty());
    }

    #[test]
    fn attachment_defaults_to_sentinel() {
        let result = HashMap::new();
        assert_eq!(main_actors_for(&result, "tt1"), "N/A");
    }

    #[test]
    fn missing_token_person_ids_are_skipped_not_counted() {
        let principals = vec![
            principal("tt1", "0", "\\N", "actor"),
            principal("tt1", "1", "nm1", "actor"),
        ];
        let index = names(&[("nm1", "Real Person")]);
        let result = resolve_main_actors(&[movie("tt1")], &principals, &index, 1);
        assert_eq!(result["tt1"], "Real Person");
    }
}
