//! Benchmarks for the ranking stage
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic basics/ratings pair sized like a small slice of
//! the real dataset so the join + sort cost is visible.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use datasets::{TitleBasics, TitleRating};
use pipeline::rank_top_movies;

fn synthetic_tables(titles: usize) -> (Vec<TitleBasics>, Vec<TitleRating>) {
    let basics = (0..titles)
        .map(|i| TitleBasics {
            tconst: format!("tt{i:07}"),
            title_type: if i % 4 == 0 { "movie" } else { "tvEpisode" }.to_string(),
            primary_title: format!("Title {i}"),
            start_year: "1994".to_string(),
            genres: "Drama".to_string(),
            runtime_minutes: "120".to_string(),
        })
        .collect();
    let ratings = (0..titles)
        .step_by(2)
        .map(|i| TitleRating {
            tconst: format!("tt{i:07}"),
            average_rating: format!("{:.1}", 1.0 + (i % 90) as f64 / 10.0),
            num_votes: ((i * 37) % 100_000).to_string(),
        })
        .collect();
    (basics, ratings)
}

fn bench_rank_top_movies(c: &mut Criterion) {
    let (basics, ratings) = synthetic_tables(100_000);

    c.bench_function("rank_top_movies_100k", |b| {
        b.iter(|| {
            let ranked = rank_top_movies(black_box(&basics), black_box(&ratings), 250);
            black_box(ranked)
        })
    });
}

criterion_group!(benches, bench_rank_top_movies);
criterion_main!(benches);
