//! One-shot download of the dataset CSV from its remote source.
//!
//! The dashboard fetches the file once per session and parses it into an
//! in-memory `MovieDataset`; there is no caching layer and no retry. Any
//! transport or HTTP failure maps to `DataLoadError::SourceUnavailable` so
//! callers can fall back to a "no data" state.

use crate::error::{DataLoadError, Result};
use crate::parser::parse_csv_str;
use crate::types::MovieDataset;
use tracing::info;

/// Download the raw CSV text from `url`.
pub async fn download_dataset(url: &str) -> Result<String> {
    info!("Downloading dataset from {}", url);

    let response = reqwest::get(url)
        .await
        .map_err(|e| DataLoadError::SourceUnavailable {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(DataLoadError::SourceUnavailable {
            url: url.to_string(),
            reason: format!("HTTP status {}", status),
        });
    }

    response
        .text()
        .await
        .map_err(|e| DataLoadError::SourceUnavailable {
            url: url.to_string(),
            reason: format!("reading body: {}", e),
        })
}

/// Download and parse the dataset in one step.
pub async fn load_from_url(url: &str) -> Result<MovieDataset> {
    let body = download_dataset(url).await?;
    parse_csv_str(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_source_maps_to_source_unavailable() {
        // Discard port on loopback; the connection is refused immediately.
        let err = download_dataset("http://127.0.0.1:9/movies.csv")
            .await
            .unwrap_err();

        assert!(matches!(err, DataLoadError::SourceUnavailable { .. }));
    }
}
