//! Provider that delegates filtering to the remote analysis service.
//!
//! In this mode the service performs the actual filtering; local work
//! degrades to coercing the returned rows and ordering columns for
//! display. No local predicates, no local sampling, no local sort: the
//! grid shows whatever the service returned.

use crate::{DataProvider, ProviderError};
use analysis_client::{AnalysisClient, AnalysisClientError};
use async_trait::async_trait;
use data_loader::{MovieRecord, PRIORITY_COLUMNS};
use engine::{FilterCriteria, ResultSet};
use tracing::debug;

#[derive(Clone)]
pub struct RemoteFilterProvider {
    client: AnalysisClient,
}

impl RemoteFilterProvider {
    pub fn new(client: AnalysisClient) -> Self {
        Self { client }
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }
}

#[async_trait]
impl DataProvider for RemoteFilterProvider {
    fn name(&self) -> &str {
        "RemoteFilterProvider"
    }

    async fn fetch(
        &self,
        criteria: &FilterCriteria,
        _sample_cap: usize,
        _seed: Option<u64>,
    ) -> Result<ResultSet, ProviderError> {
        debug!("Delegating filtering to {}", self.client.endpoint());

        let rows = self
            .client
            .filter_movies(criteria)
            .await
            .map_err(|e| match e {
                AnalysisClientError::ConnectionError(_)
                | AnalysisClientError::ServiceError { .. } => {
                    ProviderError::SourceUnavailable(e.to_string())
                }
                AnalysisClientError::InvalidResponse(_) => {
                    ProviderError::QueryFailed(e.to_string())
                }
            })?;

        let columns = remote_columns(&rows);
        Ok(ResultSet { columns, rows })
    }

    fn columns(&self) -> Vec<String> {
        PRIORITY_COLUMNS.iter().map(|s| s.to_string()).collect()
    }
}

/// Column layout for remotely filtered rows: the priority columns first,
/// then every extra key in order of first appearance across the rows.
fn remote_columns(rows: &[MovieRecord]) -> Vec<String> {
    let mut columns: Vec<String> = PRIORITY_COLUMNS.iter().map(|s| s.to_string()).collect();
    for row in rows {
        for (name, _) in &row.extra {
            if !columns.iter().any(|c| c == name) {
                columns.push(name.clone());
            }
        }
    }
    columns
}
