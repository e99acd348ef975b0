//! Lookup index over the names table.
//!
//! The pipeline resolves person ids to display names constantly
//! (directors and cast both go through it), so the `name.basics` rows
//! are folded once into a HashMap instead of being scanned per lookup.

use crate::types::{NOT_AVAILABLE, NameBasics, NameId, is_missing};
use std::collections::HashMap;

/// Maps a person id (`nconst`) to the person's display name.
#[derive(Debug, Default)]
pub struct NameIndex {
    names: HashMap<NameId, String>,
}

impl NameIndex {
    /// Build the index from the parsed names table.
    ///
    /// Duplicate ids are last-write-wins (the source data is expected
    /// unique). Rows whose name is the `\N` token are skipped so an
    /// id with no usable name resolves to the sentinel instead of
    /// leaking the raw token into the report.
    pub fn from_records(records: &[NameBasics]) -> Self {
        let mut names = HashMap::with_capacity(records.len());
        for record in records {
            if is_missing(&record.primary_name) {
                continue;
            }
            names.insert(record.nconst.clone(), record.primary_name.clone());
        }
        Self { names }
    }

    /// Display name for a person id, if known
    pub fn display_name(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Display name for a person id, falling back to the `N/A` sentinel
    pub fn resolve(&self, id: &str) -> &str {
        self.display_name(id).unwrap_or(NOT_AVAILABLE)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
