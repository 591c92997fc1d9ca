//! Provider that filters the in-memory dataset with the query engine.

use crate::{DataProvider, ProviderError};
use async_trait::async_trait;
use data_loader::MovieDataset;
use engine::{project_columns, FilterCriteria, QueryEngine, ResultSet};
use std::sync::Arc;
use tracing::debug;

/// Implements the full query contract over a shared `MovieDataset`.
///
/// Filtering is synchronous CPU work, so it runs on the blocking pool to
/// keep the async executor responsive while large datasets are scanned.
#[derive(Clone)]
pub struct LocalFilterProvider {
    dataset: Arc<MovieDataset>,
}

impl LocalFilterProvider {
    pub fn new(dataset: Arc<MovieDataset>) -> Self {
        Self { dataset }
    }

    /// Number of rows available for querying.
    pub fn dataset_len(&self) -> usize {
        self.dataset.len()
    }
}

#[async_trait]
impl DataProvider for LocalFilterProvider {
    fn name(&self) -> &str {
        "LocalFilterProvider"
    }

    async fn fetch(
        &self,
        criteria: &FilterCriteria,
        sample_cap: usize,
        seed: Option<u64>,
    ) -> Result<ResultSet, ProviderError> {
        debug!(
            "Local query over {} rows (cap: {})",
            self.dataset.len(),
            sample_cap
        );

        let dataset = self.dataset.clone();
        let criteria = criteria.clone();
        let result = tokio::task::spawn_blocking(move || {
            QueryEngine::query_projected(&dataset, &criteria, sample_cap, seed)
        })
        .await
        .map_err(|e| ProviderError::QueryFailed(format!("query task failed: {e}")))?
        .map_err(|e| ProviderError::QueryFailed(e.to_string()))?;

        Ok(result)
    }

    fn columns(&self) -> Vec<String> {
        project_columns(&self.dataset.columns)
    }
}
