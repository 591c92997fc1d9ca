//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern. The filters run
//! in sequence; order does not change the final matching set, only how
//! quickly it narrows.

use crate::criteria::FilterCriteria;
use crate::filters::{
    ActorFilter, GenreFilter, LanguageFilter, MinRatingFilter, MinVotesFilter, MinYearFilter,
};
use crate::traits::RowFilter;
use anyhow::Result;
use data_loader::MovieDataset;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(MinRatingFilter::new(7.5))
///     .add_filter(MinVotesFilter::new(1000));
///
/// let rows = pipeline.apply((0..dataset.len()).collect(), &dataset)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn RowFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the standard pipeline for a set of criteria.
    ///
    /// The threshold filters always run; the tag and substring filters are
    /// added only when the corresponding criterion is active, so inactive
    /// filters pass every row through by construction.
    pub fn for_criteria(criteria: &FilterCriteria) -> Self {
        let mut pipeline = Self::new()
            .add_filter(MinRatingFilter::new(criteria.min_rating))
            .add_filter(MinVotesFilter::new(criteria.min_votes));

        if let Some(tag) = criteria.genre_filter() {
            pipeline = pipeline.add_filter(GenreFilter::new(tag));
        }
        pipeline = pipeline.add_filter(MinYearFilter::new(criteria.min_year));
        if let Some(tag) = criteria.language_filter() {
            pipeline = pipeline.add_filter(LanguageFilter::new(tag));
        }
        if let Some(needle) = criteria.actor_filter() {
            pipeline = pipeline.add_filter(ActorFilter::new(needle));
        }

        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl RowFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the rows.
    ///
    /// # Arguments
    /// * `rows` - Indices into `dataset` to start from
    /// * `dataset` - The shared movie table
    ///
    /// # Returns
    /// * `Ok(Vec<usize>)` - The surviving rows after all filters
    /// * `Err` - If any filter fails
    pub fn apply(&self, rows: Vec<usize>, dataset: &MovieDataset) -> Result<Vec<usize>> {
        let mut current = rows;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, dataset)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{base_record, dataset_of};

    #[test]
    fn test_empty_pipeline_passes_everything() {
        let dataset = dataset_of(vec![base_record("A"), base_record("B")]);

        let pipeline = FilterPipeline::new();
        let rows = pipeline.apply(vec![0, 1], &dataset).unwrap();

        assert_eq!(rows, vec![0, 1]);
    }

    #[test]
    fn test_filters_narrow_in_sequence() {
        let mut low_rating = base_record("Low Rating");
        low_rating.avg_vote = 4.0;
        let mut low_votes = base_record("Low Votes");
        low_votes.votes = 5;
        let keeper = base_record("Keeper");
        let dataset = dataset_of(vec![low_rating, low_votes, keeper]);

        let pipeline = FilterPipeline::new()
            .add_filter(crate::filters::MinRatingFilter::new(5.0))
            .add_filter(crate::filters::MinVotesFilter::new(100));

        let rows = pipeline.apply(vec![0, 1, 2], &dataset).unwrap();

        assert_eq!(rows, vec![2]);
    }

    #[test]
    fn test_for_criteria_skips_inactive_tag_filters() {
        // Default criteria activate no tag filters, so a record with no
        // genre, language, or actors still passes.
        let mut bare = base_record("Bare");
        bare.genre = None;
        bare.language = None;
        bare.actors = None;
        let dataset = dataset_of(vec![bare]);

        let criteria = FilterCriteria::default();
        let pipeline = FilterPipeline::for_criteria(&criteria);
        let rows = pipeline.apply(vec![0], &dataset).unwrap();

        assert_eq!(rows, vec![0]);
    }

    #[test]
    fn test_for_criteria_applies_active_tag_filters() {
        let drama = base_record("Drama Movie");
        let mut horror = base_record("Horror Movie");
        horror.genre = Some("Horror".to_string());
        let dataset = dataset_of(vec![drama, horror]);

        let criteria = FilterCriteria::builder().genre("Drama").build().unwrap();
        let pipeline = FilterPipeline::for_criteria(&criteria);
        let rows = pipeline.apply(vec![0, 1], &dataset).unwrap();

        assert_eq!(rows, vec![0]);
    }
}
