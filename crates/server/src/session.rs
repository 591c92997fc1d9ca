//! # Dashboard Session
//!
//! One user's interaction state: the criteria they have chosen and the
//! result of their latest search. The dataset/provider is shared and
//! read-only; everything mutable lives here, owned by the session rather
//! than in process-wide globals re-read per interaction.
//!
//! Each search executes to completion and replaces the previous result
//! wholesale. There is no cancellation and no partial result: a search
//! either stores a full `ResultSet`, stores the empty "no data" result
//! when the source is unavailable, or fails outright on a misuse error.

use anyhow::Result;
use engine::{FilterCriteria, QueryEngine, ResultSet};
use providers::{DataProvider, ProviderError};
use std::sync::Arc;
use tracing::{info, warn};

pub struct DashboardSession {
    provider: Arc<dyn DataProvider>,
    criteria: FilterCriteria,
    sample_cap: usize,
    last_result: Option<ResultSet>,
}

impl DashboardSession {
    pub fn new(provider: Arc<dyn DataProvider>) -> Self {
        Self {
            provider,
            criteria: FilterCriteria::default(),
            sample_cap: QueryEngine::DEFAULT_SAMPLE_CAP,
            last_result: None,
        }
    }

    /// Replace the session's criteria; takes effect on the next search.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_sample_cap(&mut self, sample_cap: usize) {
        self.sample_cap = sample_cap;
    }

    /// The result of the latest search, if any.
    pub fn last_result(&self) -> Option<&ResultSet> {
        self.last_result.as_ref()
    }

    /// Run one search with the current criteria.
    ///
    /// An unavailable source is absorbed: the session logs it and stores
    /// an empty result so the display surface can show its "no data"
    /// state. Other failures (an invalid sample cap, a failed query task)
    /// propagate to the caller.
    pub async fn search(&mut self, seed: Option<u64>) -> Result<&ResultSet> {
        let outcome = self
            .provider
            .fetch(&self.criteria, self.sample_cap, seed)
            .await;

        let result = match outcome {
            Ok(result) => {
                info!(
                    "Search via {} returned {} rows",
                    self.provider.name(),
                    result.len()
                );
                result
            }
            Err(ProviderError::SourceUnavailable(reason)) => {
                warn!("Source unavailable, showing no data: {}", reason);
                ResultSet::empty(self.provider.columns())
            }
            Err(err) => return Err(err.into()),
        };

        Ok(self.last_result.insert(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use data_loader::MovieRecord;

    struct FixedProvider {
        titles: Vec<&'static str>,
    }

    #[async_trait]
    impl DataProvider for FixedProvider {
        fn name(&self) -> &str {
            "FixedProvider"
        }

        async fn fetch(
            &self,
            _criteria: &FilterCriteria,
            sample_cap: usize,
            _seed: Option<u64>,
        ) -> std::result::Result<ResultSet, ProviderError> {
            let rows = self
                .titles
                .iter()
                .take(sample_cap)
                .map(|title| MovieRecord {
                    title: title.to_string(),
                    year: Some(2000),
                    year_raw: "2000".to_string(),
                    genre: None,
                    avg_vote: 7.0,
                    votes: 100,
                    language: None,
                    duration: None,
                    actors: None,
                    extra: Vec::new(),
                })
                .collect();
            Ok(ResultSet {
                columns: self.columns(),
                rows,
            })
        }

        fn columns(&self) -> Vec<String> {
            vec!["title".to_string()]
        }
    }

    struct UnavailableProvider;

    #[async_trait]
    impl DataProvider for UnavailableProvider {
        fn name(&self) -> &str {
            "UnavailableProvider"
        }

        async fn fetch(
            &self,
            _criteria: &FilterCriteria,
            _sample_cap: usize,
            _seed: Option<u64>,
        ) -> std::result::Result<ResultSet, ProviderError> {
            Err(ProviderError::SourceUnavailable("connection refused".into()))
        }

        fn columns(&self) -> Vec<String> {
            vec!["title".to_string()]
        }
    }

    #[tokio::test]
    async fn test_search_stores_and_replaces_result() {
        let mut session = DashboardSession::new(Arc::new(FixedProvider {
            titles: vec!["A", "B", "C"],
        }));
        assert!(session.last_result().is_none());

        session.search(None).await.unwrap();
        assert_eq!(session.last_result().unwrap().len(), 3);

        session.set_sample_cap(1);
        session.search(None).await.unwrap();
        // The new result replaced the old one.
        assert_eq!(session.last_result().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_source_yields_empty_result_not_error() {
        let mut session = DashboardSession::new(Arc::new(UnavailableProvider));

        let result = session.search(None).await.unwrap();

        assert!(result.is_empty());
        assert_eq!(result.columns, vec!["title"]);
    }

    #[tokio::test]
    async fn test_sessions_hold_independent_state() {
        let provider: Arc<dyn DataProvider> = Arc::new(FixedProvider {
            titles: vec!["A", "B"],
        });

        let mut first = DashboardSession::new(provider.clone());
        let second = DashboardSession::new(provider);

        first.set_criteria(FilterCriteria::builder().genre("Drama").build().unwrap());
        first.search(None).await.unwrap();

        assert!(second.last_result().is_none());
        assert_ne!(first.criteria(), second.criteria());
    }
}
