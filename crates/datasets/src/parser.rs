//! Parsers for the IMDb tab-separated tables.
//!
//! Each table starts with a fixed header row. Columns are resolved by
//! name from that header instead of by position, so a reordered or
//! truncated upstream schema fails loudly at load time rather than
//! silently misaligning fields further down the pipeline.
//!
//! Values are kept as raw text, `\N` included. The only things that
//! can fail here are structural: a missing header, a missing column,
//! or a row whose field count disagrees with the header.

use crate::error::{DatasetError, Result};
use crate::types::*;

/// Header of one table, mapping column names to field positions
struct Header<'a> {
    file: &'a str,
    columns: Vec<&'a str>,
}

impl<'a> Header<'a> {
    fn parse(file: &'a str, lines: &'a [String]) -> Result<Self> {
        let first = lines.first().ok_or_else(|| DatasetError::EmptyTable {
            file: file.to_string(),
        })?;
        Ok(Self {
            file,
            columns: first.split('\t').collect(),
        })
    }

    /// Position of a required column, by name
    fn index_of(&self, column: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| *c == column)
            .ok_or_else(|| DatasetError::MissingColumn {
                file: self.file.to_string(),
                column: column.to_string(),
            })
    }

    /// Split one data row, insisting on the header's field count.
    ///
    /// `line_no` is 1-based and includes the header line, matching what
    /// a user sees when inspecting the raw file.
    fn split_row(&self, line: &'a str, line_no: usize) -> Result<Vec<&'a str>> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != self.columns.len() {
            return Err(DatasetError::ParseError {
                file: self.file.to_string(),
                line: line_no,
                reason: format!(
                    "expected {} fields but found {}",
                    self.columns.len(),
                    fields.len()
                ),
            });
        }
        Ok(fields)
    }
}

/// Iterate the data rows of a table, applying `build` to each
fn parse_table<'a, T>(
    file: &'a str,
    lines: &'a [String],
    columns: &[&str],
    mut build: impl FnMut(&[&'a str]) -> T,
) -> Result<Vec<T>> {
    let header = Header::parse(file, lines)?;
    let positions: Vec<usize> = columns
        .iter()
        .map(|c| header.index_of(c))
        .collect::<Result<_>>()?;

    let mut records = Vec::with_capacity(lines.len().saturating_sub(1));
    for (idx, line) in lines.iter().enumerate().skip(1) {
        if line.is_empty() {
            continue;
        }
        let fields = header.split_row(line, idx + 1)?;
        let selected: Vec<&str> = positions.iter().map(|&p| fields[p]).collect();
        records.push(build(&selected));
    }
    Ok(records)
}

/// Parse `title.basics.tsv`
pub fn parse_title_basics(lines: &[String]) -> Result<Vec<TitleBasics>> {
    parse_table(
        "title.basics.tsv",
        lines,
        &[
            "tconst",
            "titleType",
            "primaryTitle",
            "startYear",
            "genres",
            "runtimeMinutes",
        ],
        |f| TitleBasics {
            tconst: f[0].to_string(),
            title_type: f[1].to_string(),
            primary_title: f[2].to_string(),
            start_year: f[3].to_string(),
            genres: f[4].to_string(),
            runtime_minutes: f[5].to_string(),
        },
    )
}

/// Parse `title.ratings.tsv`
pub fn parse_title_ratings(lines: &[String]) -> Result<Vec<TitleRating>> {
    parse_table(
        "title.ratings.tsv",
        lines,
        &["tconst", "averageRating", "numVotes"],
        |f| TitleRating {
            tconst: f[0].to_string(),
            average_rating: f[1].to_string(),
            num_votes: f[2].to_string(),
        },
    )
}

/// Parse `title.crew.tsv`
pub fn parse_title_crew(lines: &[String]) -> Result<Vec<TitleCrew>> {
    parse_table("title.crew.tsv", lines, &["tconst", "directors"], |f| {
        TitleCrew {
            tconst: f[0].to_string(),
            directors: f[1].to_string(),
        }
    })
}

/// Parse `name.basics.tsv`
pub fn parse_name_basics(lines: &[String]) -> Result<Vec<NameBasics>> {
    parse_table(
        "name.basics.tsv",
        lines,
        &["nconst", "primaryName"],
        |f| NameBasics {
            nconst: f[0].to_string(),
            primary_name: f[1].to_string(),
        },
    )
}

/// Parse `title.principals.tsv`
pub fn parse_title_principals(lines: &[String]) -> Result<Vec<TitlePrincipal>> {
    parse_table(
        "title.principals.tsv",
        lines,
        &["tconst", "ordering", "nconst", "category"],
        |f| TitlePrincipal {
            tconst: f[0].to_string(),
            ordering: f[1].to_string(),
            nconst: f[2].to_string(),
            category: f[3].to_string(),
        },
    )
}
