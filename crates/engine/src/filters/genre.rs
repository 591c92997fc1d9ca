//! Filter on a single genre tag.
//!
//! The genre column is a comma-delimited string and the match is a
//! case-sensitive substring test against that string, not exact tag
//! membership. A filter of "Act" therefore matches a row tagged "Action".
//! This reproduces the matching behavior the dashboard has always had.

use crate::traits::RowFilter;
use anyhow::Result;
use data_loader::MovieDataset;

/// Keeps rows whose genre field contains the requested tag.
///
/// Rows with no genre value never match while this filter is active.
pub struct GenreFilter {
    tag: String,
}

impl GenreFilter {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

impl RowFilter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply(&self, rows: Vec<usize>, dataset: &MovieDataset) -> Result<Vec<usize>> {
        Ok(rows
            .into_iter()
            .filter(|&row| {
                dataset.get(row).is_some_and(|record| {
                    record
                        .genre
                        .as_deref()
                        .is_some_and(|genres| genres.contains(&self.tag))
                })
            })
            .collect())
    }
}
