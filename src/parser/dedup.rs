use std::collections::HashMap;

use super::normalize::normalize_title;

/// Deduplication identity: normalized title plus year.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovieKey {
    pub title: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRecord {
    pub display_title: String,
    pub year: String,
}

/// Per-document accumulator; one record survives per key. Records stay in
/// first-seen order.
#[derive(Debug, Default)]
pub struct MovieSet {
    index: HashMap<MovieKey, usize>,
    records: Vec<MovieRecord>,
}

impl MovieSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cleaned entry. On a key collision the longer title replaces the
    /// stored one; ties keep whichever arrived first.
    pub fn insert(&mut self, title: &str, year: &str) {
        let key = MovieKey {
            title: normalize_title(title),
            year: year.to_string(),
        };

        match self.index.get(&key) {
            Some(&slot) => {
                let existing = &mut self.records[slot];
                if title.chars().count() > existing.display_title.chars().count() {
                    existing.display_title = title.to_string();
                }
            }
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(MovieRecord {
                    display_title: title.to_string(),
                    year: year.to_string(),
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<MovieRecord> {
        self.records
    }
}

// ── Tests ──
