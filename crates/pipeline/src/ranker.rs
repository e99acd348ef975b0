//! Building the ranked Top 250 from basics + ratings.
//!
//! ## Algorithm
//! 1. Keep only rows whose titleType is "movie"
//! 2. Inner-join with the ratings table on tconst (unrated titles drop)
//! 3. Sort by averageRating descending, then numVotes descending
//! 4. Truncate to the limit
//!
//! Rating and vote counts stay raw text on the output records; numeric
//! parsing happens only for the sort keys, and anything unparsable
//! sinks to the lowest possible rank instead of erroring.

use datasets::{TitleBasics, TitleId, TitleRating};
use std::collections::HashMap;
use tracing::debug;

/// How many titles the report keeps
pub const DEFAULT_LIMIT: usize = 250;

const TARGET_TITLE_TYPE: &str = "movie";

/// One qualifying title with its rating, in final rank order.
///
/// The sequence produced by [`rank_top_movies`] is the positional
/// truth for every later stage: left joins downstream must neither
/// reorder nor duplicate it.
#[derive(Debug, Clone)]
pub struct RankedMovie {
    pub tconst: TitleId,
    pub primary_title: String,
    pub start_year: String,
    pub genres: String,
    pub runtime_minutes: String,
    pub average_rating: String,
    pub num_votes: String,
}

/// Sort key for a raw averageRating; unparsable or NaN sinks to the bottom
fn rating_key(raw: &str) -> f64 {
    match raw.parse::<f64>() {
        Ok(value) if !value.is_nan() => value,
        _ => f64::NEG_INFINITY,
    }
}

/// Sort key for a raw numVotes; unparsable counts as zero votes
fn votes_key(raw: &str) -> u64 {
    raw.parse().unwrap_or(0)
}

/// Filter, join, rank, and truncate.
///
/// Returns at most `limit` movies; fewer if fewer qualify. Ties beyond
/// (rating, votes) keep their input order.
pub fn rank_top_movies(
    basics: &[TitleBasics],
    ratings: &[TitleRating],
    limit: usize,
) -> Vec<RankedMovie> {
    let ratings_by_id: HashMap<&str, &TitleRating> = ratings
        .iter()
        .map(|rating| (rating.tconst.as_str(), rating))
        .collect();

    let mut merged: Vec<(f64, u64, RankedMovie)> = basics
        .iter()
        .filter(|basic| basic.title_type == TARGET_TITLE_TYPE)
        .filter_map(|basic| {
            // Inner join: a movie without a rating row is dropped.
            let rating = ratings_by_id.get(basic.tconst.as_str())?;
            Some((
                rating_key(&rating.average_rating),
                votes_key(&rating.num_votes),
                RankedMovie {
                    tconst: basic.tconst.clone(),
                    primary_title: basic.primary_title.clone(),
                    start_year: basic.start_year.clone(),
                    genres: basic.genres.clone(),
                    runtime_minutes: basic.runtime_minutes.clone(),
                    average_rating: rating.average_rating.clone(),
                    num_votes: rating.num_votes.clone(),
                },
            ))
        })
        .collect();
    debug!("{} movies qualified after filter + ratings join", merged.len());

    // Stable sort: equal (rating, votes) pairs keep input order.
    merged.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| b.1.cmp(&a.1)));
    merged.truncate(limit);
    merged.into_iter().map(|(_, _, movie)| movie).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic(tconst: &str, title_type: &str, title: &str) -> TitleBasics {
        TitleBasics {
            tconst: tconst.to_string(),
            title_type: title_type.to_string(),
            primary_title: title.to_string(),
            start_year: "1994".to_string(),
            genres: "Drama".to_string(),
            runtime_minutes: "142".to_string(),
        }
    }

    fn rating(tconst: &str, average: &str, votes: &str) -> TitleRating {
        TitleRating {
            tconst: tconst.to_string(),
            average_rating: average.to_string(),
            num_votes: votes.to_string(),
        }
    }

    #[test]
    fn filters_to_movies_only() {
        let basics = vec![
            basic("tt1", "movie", "A Movie"),
            basic("tt2", "tvSeries", "A Series"),
            basic("tt3", "short", "A Short"),
        ];
        let ratings = vec![
            rating("tt1", "8.0", "100"),
            rating("tt2", "9.5", "900"),
            rating("tt3", "9.9", "999"),
        ];
        let ranked = rank_top_movies(&basics, &ratings, 250);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].tconst, "tt1");
    }

    #[test]
    fn unrated_movies_are_dropped() {
        let basics = vec![basic("tt1", "movie", "Rated"), basic("tt2", "movie", "Unrated")];
        let ratings = vec![rating("tt1", "7.1", "50")];
        let ranked = rank_top_movies(&basics, &ratings, 250);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].tconst, "tt1");
    }

    #[test]
    fn sorts_by_rating_then_votes_descending() {
        let basics = vec![
            basic("tt1", "movie", "Good"),
            basic("tt2", "movie", "Best"),
            basic("tt3", "movie", "Popular Good"),
        ];
        let ratings = vec![
            rating("tt1", "8.5", "100"),
            rating("tt2", "9.0", "10"),
            rating("tt3", "8.5", "5000"),
        ];
        let ranked = rank_top_movies(&basics, &ratings, 250);
        let order: Vec<&str> = ranked.iter().map(|m| m.tconst.as_str()).collect();
        assert_eq!(order, ["tt2", "tt3", "tt1"]);

        // The sort law from the output side: adjacent pairs never ascend.
        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let (ra, rb) = (rating_key(&a.average_rating), rating_key(&b.average_rating));
            assert!(ra > rb || (ra == rb && votes_key(&a.num_votes) >= votes_key(&b.num_votes)));
        }
    }

    #[test]
    fn missing_rating_token_sorts_last_not_errors() {
        let basics = vec![basic("tt1", "movie", "Unknown"), basic("tt2", "movie", "Known")];
        let ratings = vec![rating("tt1", "\\N", "\\N"), rating("tt2", "1.0", "1")];
        let ranked = rank_top_movies(&basics, &ratings, 250);
        assert_eq!(ranked[0].tconst, "tt2");
        assert_eq!(ranked[1].tconst, "tt1");
        // The raw token is preserved for display.
        assert_eq!(ranked[1].average_rating, "\\N");
    }

    #[test]
    fn truncates_to_limit() {
        let basics: Vec<_> = (0..300)
            .map(|i| basic(&format!("tt{i}"), "movie", "M"))
            .collect();
        let ratings: Vec<_> = (0..300)
            .map(|i| rating(&format!("tt{i}"), "5.0", &i.to_string()))
            .collect();
        let ranked = rank_top_movies(&basics, &ratings, 250);
        assert_eq!(ranked.len(), 250);
        // Highest vote count wins the tie at equal rating.
        assert_eq!(ranked[0].tconst, "tt299");
    }

    #[test]
    fn fewer_qualifying_rows_than_limit_yields_all_of_them() {
        let basics = vec![basic("tt1", "movie", "Only")];
        let ratings = vec![rating("tt1", "6.0", "10")];
        let ranked = rank_top_movies(&basics, &ratings, 250);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn full_ties_keep_input_order() {
        let basics = vec![
            basic("tt1", "movie", "First"),
            basic("tt2", "movie", "Second"),
        ];
        let ratings = vec![rating("tt1", "8.0", "100"), rating("tt2", "8.0", "100")];
        let ranked = rank_top_movies(&basics, &ratings, 250);
        let order: Vec<&str> = ranked.iter().map(|m| m.tconst.as_str()).collect();
        assert_eq!(order, ["tt1", "tt2"]);
    }
}
