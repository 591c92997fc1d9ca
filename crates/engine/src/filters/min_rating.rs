//! Filter on minimum average rating.

use crate::traits::RowFilter;
use anyhow::Result;
use data_loader::MovieDataset;

/// Keeps rows whose `avg_vote` meets the requested floor.
pub struct MinRatingFilter {
    min_rating: f64,
}

impl MinRatingFilter {
    /// # Arguments
    /// * `min_rating` - Minimum average rating in [0.0, 10.0]
    pub fn new(min_rating: f64) -> Self {
        Self { min_rating }
    }
}

impl RowFilter for MinRatingFilter {
    fn name(&self) -> &str {
        "MinRatingFilter"
    }

    fn apply(&self, rows: Vec<usize>, dataset: &MovieDataset) -> Result<Vec<usize>> {
        Ok(rows
            .into_iter()
            .filter(|&row| {
                dataset
                    .get(row)
                    .is_some_and(|record| record.avg_vote >= self.min_rating)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::dataset_with_ratings;

    #[test]
    fn test_min_rating_filter() {
        let dataset = dataset_with_ratings(&[5.0, 8.0, 9.0]);

        let filter = MinRatingFilter::new(7.5);
        let rows = filter.apply(vec![0, 1, 2], &dataset).unwrap();

        assert_eq!(rows, vec![1, 2]);
    }

    #[test]
    fn test_zero_floor_keeps_everything() {
        let dataset = dataset_with_ratings(&[0.0, 3.3, 10.0]);

        let filter = MinRatingFilter::new(0.0);
        let rows = filter.apply(vec![0, 1, 2], &dataset).unwrap();

        assert_eq!(rows, vec![0, 1, 2]);
    }

    #[test]
    fn test_boundary_value_is_kept() {
        let dataset = dataset_with_ratings(&[7.5]);

        let filter = MinRatingFilter::new(7.5);
        let rows = filter.apply(vec![0], &dataset).unwrap();

        assert_eq!(rows, vec![0]);
    }
}
