//! # Movie Query Engine
//!
//! The stateless query path: narrow the dataset through the filter
//! pipeline, bound the result by uniform random sampling, and sort by
//! title. Guarantees on the output:
//!
//! 1. cardinality <= `sample_cap`
//! 2. every row satisfies all active predicates
//! 3. rows are sorted by title ascending, ties broken by original
//!    dataset order
//! 4. the same dataset, criteria, and seed reproduce the same result

use crate::criteria::FilterCriteria;
use crate::filter_pipeline::FilterPipeline;
use crate::projection::project_columns;
use crate::result::ResultSet;
use anyhow::{Result, ensure};
use data_loader::{MovieDataset, MovieRecord};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

/// Entry point for filtering the in-memory dataset.
pub struct QueryEngine;

impl QueryEngine {
    /// Default bound on result cardinality, matching the grid page size.
    pub const DEFAULT_SAMPLE_CAP: usize = 100;

    /// The full matching set, before sampling, in dataset order.
    ///
    /// Used by the monotonicity-sensitive callers (stats, tests) that need
    /// the unbounded cardinality.
    pub fn matching_rows(
        dataset: &MovieDataset,
        criteria: &FilterCriteria,
    ) -> Result<Vec<usize>> {
        let pipeline = FilterPipeline::for_criteria(criteria);
        pipeline.apply((0..dataset.len()).collect(), dataset)
    }

    /// Execute one query.
    ///
    /// # Arguments
    /// * `dataset` - The shared movie table; empty is valid
    /// * `criteria` - Validated filter criteria
    /// * `sample_cap` - Maximum rows to return; must be positive
    /// * `seed` - Sampling seed; `None` draws a fresh one from the OS
    ///
    /// # Returns
    /// A `ResultSet` in the dataset's original column order; callers apply
    /// the display projection separately.
    pub fn query(
        dataset: &MovieDataset,
        criteria: &FilterCriteria,
        sample_cap: usize,
        seed: Option<u64>,
    ) -> Result<ResultSet> {
        ensure!(sample_cap > 0, "sample_cap must be positive");

        let mut rows = Self::matching_rows(dataset, criteria)?;
        debug!("{} of {} rows match", rows.len(), dataset.len());

        if rows.len() > sample_cap {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let picked = rand::seq::index::sample(&mut rng, rows.len(), sample_cap);
            let mut sampled: Vec<usize> = picked.iter().map(|i| rows[i]).collect();
            // Restore dataset order so the stable title sort below keeps
            // original order as the tie-break.
            sampled.sort_unstable();
            debug!("Sampled {} of {} matching rows", sampled.len(), rows.len());
            rows = sampled;
        }

        let mut records: Vec<MovieRecord> = rows
            .into_iter()
            .map(|row| dataset.records[row].clone())
            .collect();
        records.sort_by(|a, b| a.title.cmp(&b.title));

        Ok(ResultSet {
            columns: dataset.columns.clone(),
            rows: records,
        })
    }

    /// Execute one query and apply the display projection.
    pub fn query_projected(
        dataset: &MovieDataset,
        criteria: &FilterCriteria,
        sample_cap: usize,
        seed: Option<u64>,
    ) -> Result<ResultSet> {
        Self::query(dataset, criteria, sample_cap, seed).map(|mut result| {
            result.columns = project_columns(&result.columns);
            result
        })
    }
}
