//! Data source selection.
//!
//! The choice between filtering locally and delegating to the analysis
//! service is made once at startup; the rest of the system only sees a
//! `DataProvider`.

use analysis_client::AnalysisClient;
use anyhow::{Context, Result};
use data_loader::{fetch, parser};
use providers::{DataProvider, LocalFilterProvider, RemoteFilterProvider};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Where the dashboard gets its rows from.
#[derive(Debug, Clone)]
pub enum DataSourceConfig {
    /// Load the CSV once (from a local file or a remote URL) and filter
    /// in-process.
    Local {
        dataset_path: Option<PathBuf>,
        dataset_url: Option<String>,
    },
    /// Delegate filtering to the analysis service at `endpoint`.
    Remote { endpoint: String },
}

/// Build the provider a session layer will run against.
///
/// For `Local`, a path takes precedence over a URL when both are given.
pub async fn build_provider(config: &DataSourceConfig) -> Result<Arc<dyn DataProvider>> {
    match config {
        DataSourceConfig::Local {
            dataset_path,
            dataset_url,
        } => {
            let dataset = match (dataset_path, dataset_url) {
                (Some(path), _) => parser::load_from_path(path)
                    .with_context(|| format!("Loading dataset from {}", path.display()))?,
                (None, Some(url)) => fetch::load_from_url(url)
                    .await
                    .with_context(|| format!("Loading dataset from {url}"))?,
                (None, None) => {
                    anyhow::bail!("Local data source needs a dataset path or URL")
                }
            };
            info!("Loaded {} movies for local filtering", dataset.len());
            Ok(Arc::new(LocalFilterProvider::new(Arc::new(dataset))))
        }
        DataSourceConfig::Remote { endpoint } => {
            info!("Delegating filtering to analysis service at {}", endpoint);
            let client = AnalysisClient::new(endpoint.clone());
            Ok(Arc::new(RemoteFilterProvider::new(client)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_without_source_is_an_error() {
        let config = DataSourceConfig::Local {
            dataset_path: None,
            dataset_url: None,
        };

        assert!(build_provider(&config).await.is_err());
    }

    #[tokio::test]
    async fn test_remote_config_builds_remote_provider() {
        let config = DataSourceConfig::Remote {
            endpoint: "http://localhost:8000/filter".to_string(),
        };

        let provider = build_provider(&config).await.unwrap();
        assert_eq!(provider.name(), "RemoteFilterProvider");
    }
}
