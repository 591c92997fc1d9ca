//! Filter on minimum release year.
//!
//! A row whose year column did not coerce to an integer at load time has
//! `year == None` and always fails this step. That is a per-row exclusion,
//! not an error; the query as a whole still succeeds.

use crate::traits::RowFilter;
use anyhow::Result;
use data_loader::MovieDataset;

/// Keeps rows released in or after the requested year.
pub struct MinYearFilter {
    min_year: i32,
}

impl MinYearFilter {
    pub fn new(min_year: i32) -> Self {
        Self { min_year }
    }
}

impl RowFilter for MinYearFilter {
    fn name(&self) -> &str {
        "MinYearFilter"
    }

    fn apply(&self, rows: Vec<usize>, dataset: &MovieDataset) -> Result<Vec<usize>> {
        Ok(rows
            .into_iter()
            .filter(|&row| {
                dataset.get(row).is_some_and(|record| {
                    record.year.is_some_and(|year| year >= self.min_year)
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{base_record, dataset_of};

    fn with_year(title: &str, raw: &str) -> data_loader::MovieRecord {
        let mut record = base_record(title);
        record.year = raw.parse().ok();
        record.year_raw = raw.to_string();
        record
    }

    #[test]
    fn test_min_year_filter() {
        let dataset = dataset_of(vec![
            with_year("Old", "1980"),
            with_year("Boundary", "1995"),
            with_year("New", "2010"),
        ]);

        let filter = MinYearFilter::new(1995);
        let rows = filter.apply(vec![0, 1, 2], &dataset).unwrap();

        assert_eq!(rows, vec![1, 2]);
    }

    #[test]
    fn test_unparseable_year_is_excluded_without_error() {
        let dataset = dataset_of(vec![
            with_year("Unknown Year", "unknown"),
            with_year("Known Year", "2000"),
        ]);

        let filter = MinYearFilter::new(1995);
        let rows = filter.apply(vec![0, 1], &dataset).unwrap();

        assert_eq!(rows, vec![1]);
    }
}
