//! Pure transformation stages of the Top 250 pipeline.
//!
//! This crate provides:
//! - **ranker**: filter + ratings join + rank + truncate
//! - **directors**: left-joined director name resolution
//! - **cast**: grouped top-N actor selection with category fallback
//! - **runtime**: runtime display formatting
//!
//! ## Architecture
//! Each stage is a pure function: immutable input relations in, a new
//! structure out. The ranked sequence from the ranker is the
//! positional truth; the resolvers either return a column aligned with
//! it (directors) or an id-keyed map attached per row (cast), and no
//! stage may reorder or duplicate it.
//!
//! Anything a stage cannot parse or resolve degrades to the `N/A`
//! sentinel (or a lowest-possible sort key); stages never fail.

pub mod cast;
pub mod directors;
pub mod ranker;
pub mod runtime;

// Re-export main types
pub use cast::{DEFAULT_TOP_ACTORS, main_actors_for, resolve_main_actors};
pub use directors::resolve_directors;
pub use ranker::{DEFAULT_LIMIT, RankedMovie, rank_top_movies};
pub use runtime::format_runtime;
