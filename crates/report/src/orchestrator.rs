//! # Report Orchestrator
//!
//! This module coordinates the entire report pipeline:
//! 1. Rank the top movies (filter + ratings join + sort + truncate)
//! 2. Build the person-name index
//! 3. Resolve directors (left join onto the ranked order)
//! 4. Resolve main actors (grouped top-N with category fallback)
//! 5. Enrich every title with Plot/Poster from OMDb, sequentially
//! 6. Assemble the final rows in ranked order
//!
//! Strictly batch: no stage starts before the previous stage's output
//! is fully materialized, and every stage returns a fresh structure.

use std::time::{Duration, Instant};

use datasets::{Datasets, NameIndex};
use omdb_client::{DEFAULT_DELAY, MetadataSource, enrich_all};
use pipeline::{
    DEFAULT_LIMIT, DEFAULT_TOP_ACTORS, format_runtime, main_actors_for, rank_top_movies,
    resolve_directors, resolve_main_actors,
};
use tracing::info;

use crate::writer::ReportRow;

/// Tunable knobs of one report run
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// How many ranked titles to keep
    pub limit: usize,
    /// How many actors per Main_Actors field
    pub top_actors: usize,
    /// Pause after each enrichment call
    pub delay: Duration,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            top_actors: DEFAULT_TOP_ACTORS,
            delay: DEFAULT_DELAY,
        }
    }
}

/// Run every stage over loaded datasets and return the final rows.
///
/// Generic over the enrichment source so tests can stub OMDb. Stage
/// failures don't exist by construction: everything past the loader
/// degrades bad values to sentinels, so this only suspends for the
/// enrichment calls.
pub async fn build_report<S: MetadataSource>(
    data: &Datasets,
    enricher: &S,
    options: &ReportOptions,
) -> Vec<ReportRow> {
    let start_time = Instant::now();

    let ranked = rank_top_movies(&data.basics, &data.ratings, options.limit);
    info!("Ranked top movies (rows = {})", ranked.len());

    let names = NameIndex::from_records(&data.names);
    info!("Built name index ({} people)", names.len());

    let directors = resolve_directors(&ranked, &data.crew, &names);
    info!("Resolved directors for {} titles", directors.len());

    let main_actors = resolve_main_actors(&ranked, &data.principals, &names, options.top_actors);
    info!("Resolved main actors for {} titles", main_actors.len());

    let ids: Vec<String> = ranked.iter().map(|movie| movie.tconst.clone()).collect();
    info!("Fetching Plot and Poster_URL for {} titles", ids.len());
    let enrichments = enrich_all(enricher, &ids, options.delay).await;

    let rows: Vec<ReportRow> = ranked
        .into_iter()
        .zip(directors)
        .zip(enrichments)
        .map(|((movie, director), enrichment)| {
            let runtime = format_runtime(&movie.runtime_minutes);
            let actors = main_actors_for(&main_actors, &movie.tconst).to_string();
            ReportRow {
                imdb_id: movie.tconst,
                title: movie.primary_title,
                year: movie.start_year,
                genre: movie.genres,
                imdb_rating: movie.average_rating,
                votes: movie.num_votes,
                director,
                main_actors: actors,
                runtime,
                plot: enrichment.plot,
                poster_url: enrichment.poster_url,
            }
        })
        .collect();

    info!(
        "Report assembled: {} rows in {:.2?}",
        rows.len(),
        start_time.elapsed()
    );
    rows
}
