//! Core domain types for the movie dataset.
//!
//! This module defines the row and table types shared by every other crate:
//! a `MovieRecord` is one parsed CSV row, a `MovieDataset` is the full
//! in-memory table plus its header. The dataset is loaded once per process,
//! wrapped in an `Arc`, and never mutated afterwards, so concurrent sessions
//! can read it without locking.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// =============================================================================
// Column names
// =============================================================================

/// The columns the engine understands, in display-priority order.
///
/// Any other column present in the source file is carried through unchanged
/// in `MovieRecord::extra` and rendered after these.
pub const PRIORITY_COLUMNS: [&str; 8] = [
    "title",
    "year",
    "genre",
    "avg_vote",
    "votes",
    "language",
    "duration",
    "actors",
];

// =============================================================================
// MovieRecord
// =============================================================================

/// One row of the movie dataset.
///
/// Multi-valued fields (`genre`, `language`, `actors`) are kept as the
/// source's comma-delimited strings; filters match on them by substring.
/// `year` is parsed eagerly but the raw text is preserved, because a row
/// with a non-numeric year is still a valid row for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    /// Parsed release year; `None` when the source value is not an integer.
    pub year: Option<i32>,
    /// The year column exactly as it appeared in the source.
    pub year_raw: String,
    pub genre: Option<String>,
    /// Average rating in [0.0, 10.0].
    pub avg_vote: f64,
    pub votes: u64,
    pub language: Option<String>,
    /// Runtime in minutes, when the source provides one.
    pub duration: Option<u32>,
    pub actors: Option<String>,
    /// Additional columns passed through unchanged, in source column order.
    pub extra: Vec<(String, String)>,
}

impl MovieRecord {
    /// Display value for a named column.
    ///
    /// Returns `None` only for columns this record has never seen; a known
    /// column with a blank value yields an empty string, so the grid always
    /// gets a cell.
    pub fn field(&self, column: &str) -> Option<Cow<'_, str>> {
        fn opt_str(v: &Option<String>) -> Cow<'_, str> {
            match v {
                Some(s) => Cow::Borrowed(s.as_str()),
                None => Cow::Borrowed(""),
            }
        }
        match column {
            "title" => Some(Cow::Borrowed(self.title.as_str())),
            "year" => Some(Cow::Borrowed(self.year_raw.as_str())),
            "genre" => Some(opt_str(&self.genre)),
            "avg_vote" => Some(Cow::Owned(format!("{:.1}", self.avg_vote))),
            "votes" => Some(Cow::Owned(self.votes.to_string())),
            "language" => Some(opt_str(&self.language)),
            "duration" => Some(Cow::Owned(
                self.duration.map(|d| d.to_string()).unwrap_or_default(),
            )),
            "actors" => Some(opt_str(&self.actors)),
            other => self
                .extra
                .iter()
                .find(|(name, _)| name == other)
                .map(|(_, value)| Cow::Borrowed(value.as_str())),
        }
    }
}

// =============================================================================
// MovieDataset
// =============================================================================

/// The full in-memory table of movie rows available for querying.
///
/// `columns` preserves the source header order so presentation code can
/// reproduce the original layout before projection reorders it.
#[derive(Debug, Clone, Default)]
pub struct MovieDataset {
    pub columns: Vec<String>,
    pub records: Vec<MovieRecord>,
}

impl MovieDataset {
    /// Creates an empty dataset. Valid input to the engine; queries over it
    /// yield empty results.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get a record by its position in the dataset.
    pub fn get(&self, row: usize) -> Option<&MovieRecord> {
        self.records.get(row)
    }
}
