//! Filter on minimum vote count.

use crate::traits::RowFilter;
use anyhow::Result;
use data_loader::MovieDataset;

/// Keeps rows with at least the requested number of votes.
pub struct MinVotesFilter {
    min_votes: u64,
}

impl MinVotesFilter {
    pub fn new(min_votes: u64) -> Self {
        Self { min_votes }
    }
}

impl RowFilter for MinVotesFilter {
    fn name(&self) -> &str {
        "MinVotesFilter"
    }

    fn apply(&self, rows: Vec<usize>, dataset: &MovieDataset) -> Result<Vec<usize>> {
        Ok(rows
            .into_iter()
            .filter(|&row| {
                dataset
                    .get(row)
                    .is_some_and(|record| record.votes >= self.min_votes)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{base_record, dataset_of};

    #[test]
    fn test_min_votes_filter() {
        let mut low = base_record("Obscure");
        low.votes = 40;
        let mut high = base_record("Popular");
        high.votes = 50_000;
        let dataset = dataset_of(vec![low, high]);

        let filter = MinVotesFilter::new(1000);
        let rows = filter.apply(vec![0, 1], &dataset).unwrap();

        assert_eq!(rows, vec![1]);
    }

    #[test]
    fn test_zero_votes_floor_keeps_everything() {
        let mut record = base_record("Unrated");
        record.votes = 0;
        let dataset = dataset_of(vec![record]);

        let filter = MinVotesFilter::new(0);
        let rows = filter.apply(vec![0], &dataset).unwrap();

        assert_eq!(rows, vec![0]);
    }
}
