//! Filter on an actor-name substring.

use crate::traits::RowFilter;
use anyhow::Result;
use data_loader::MovieDataset;

/// Keeps rows whose actors field contains the requested substring,
/// ignoring case.
pub struct ActorFilter {
    needle_lower: String,
}

impl ActorFilter {
    pub fn new(needle: impl Into<String>) -> Self {
        Self {
            needle_lower: needle.into().to_lowercase(),
        }
    }
}

impl RowFilter for ActorFilter {
    fn name(&self) -> &str {
        "ActorFilter"
    }

    fn apply(&self, rows: Vec<usize>, dataset: &MovieDataset) -> Result<Vec<usize>> {
        Ok(rows
            .into_iter()
            .filter(|&row| {
                dataset.get(row).is_some_and(|record| {
                    record
                        .actors
                        .as_deref()
                        .is_some_and(|actors| {
                            actors.to_lowercase().contains(&self.needle_lower)
                        })
                })
            })
            .collect())
    }
}
