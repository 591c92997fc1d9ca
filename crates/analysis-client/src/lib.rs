//! HTTP client for the remote analysis service.
//!
//! Later iterations of the dashboard delegate filtering to an external
//! endpoint: the client POSTs the criteria as a JSON payload and receives
//! a JSON array of row objects carrying the same field set as the local
//! dataset. This crate handles:
//! - the request/response exchange over HTTP
//! - converting returned row objects into `MovieRecord`s
//! - error handling (no retry; the session layer absorbs failures)
//!
//! Rows the service returns in a shape we cannot coerce are skipped with a
//! warning, the same per-row policy the CSV loader applies.

use data_loader::MovieRecord;
use engine::FilterCriteria;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur when talking to the analysis service
#[derive(Error, Debug)]
pub enum AnalysisClientError {
    #[error("Failed to reach analysis service: {0}")]
    ConnectionError(String),

    #[error("Analysis service returned HTTP status {status}")]
    ServiceError { status: u16 },

    #[error("Invalid response from analysis service: {0}")]
    InvalidResponse(String),
}

/// Client for the remote analysis service.
///
/// Thin wrapper over a shared `reqwest::Client`; cheap to clone.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    client: reqwest::Client,
    endpoint: String,
}

impl AnalysisClient {
    /// # Arguments
    /// * `endpoint` - Full URL of the filter endpoint
    ///   (e.g., "http://localhost:8000/filter")
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Send the criteria payload and return the filtered rows.
    ///
    /// The service performs all predicate evaluation; the rows come back
    /// already filtered and are only coerced locally.
    pub async fn filter_movies(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Vec<MovieRecord>, AnalysisClientError> {
        debug!("POST {} with criteria {:?}", self.endpoint, criteria);

        let response = self
            .client
            .post(&self.endpoint)
            .json(criteria)
            .send()
            .await
            .map_err(|e| AnalysisClientError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisClientError::ServiceError {
                status: status.as_u16(),
            });
        }

        let rows: Vec<Value> = response
            .json()
            .await
            .map_err(|e| AnalysisClientError::InvalidResponse(e.to_string()))?;

        let total = rows.len();
        let records: Vec<MovieRecord> = rows
            .into_iter()
            .enumerate()
            .filter_map(|(idx, row)| match serde_json::from_value::<RemoteRow>(row) {
                Ok(remote) => Some(remote.into()),
                Err(e) => {
                    warn!(row = idx, "Skipping uncoercible remote row: {}", e);
                    None
                }
            })
            .collect();

        info!(
            "Analysis service returned {} rows ({} coerced)",
            total,
            records.len()
        );
        Ok(records)
    }

    /// The endpoint this client talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// One row object as the service serializes it.
///
/// `year` is accepted as either a JSON number or a string, because the
/// upstream table carries it as text with occasional non-numeric values.
/// Unknown keys land in `extra` and pass through to display.
#[derive(Debug, Deserialize)]
struct RemoteRow {
    title: String,
    #[serde(default)]
    year: Option<Value>,
    #[serde(default)]
    genre: Option<String>,
    avg_vote: f64,
    votes: u64,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    duration: Option<u32>,
    #[serde(default)]
    actors: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl From<RemoteRow> for MovieRecord {
    fn from(row: RemoteRow) -> Self {
        let year_raw = match &row.year {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };
        let year = year_raw.parse::<i32>().ok();
        let extra = row
            .extra
            .into_iter()
            .map(|(name, value)| (name, display_value(value)))
            .collect();

        MovieRecord {
            title: row.title,
            year,
            year_raw,
            genre: row.genre.filter(|s| !s.is_empty()),
            avg_vote: row.avg_vote,
            votes: row.votes,
            language: row.language.filter(|s| !s.is_empty()),
            duration: row.duration,
            actors: row.actors.filter(|s| !s.is_empty()),
            extra,
        }
    }
}

/// Render an arbitrary JSON value as a display cell.
fn display_value(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_remote_row_converts_with_numeric_year() {
        let row: RemoteRow = serde_json::from_value(json!({
            "title": "Heat",
            "year": 1995,
            "genre": "Action,Crime",
            "avg_vote": 8.3,
            "votes": 700000,
            "language": "English",
            "duration": 170,
            "actors": "Al Pacino, Robert De Niro",
            "country": "USA"
        }))
        .unwrap();
        let record: MovieRecord = row.into();

        assert_eq!(record.title, "Heat");
        assert_eq!(record.year, Some(1995));
        assert_eq!(record.year_raw, "1995");
        assert_eq!(
            record.extra,
            vec![("country".to_string(), "USA".to_string())]
        );
    }

    #[test]
    fn test_remote_row_keeps_non_numeric_year_raw() {
        let row: RemoteRow = serde_json::from_value(json!({
            "title": "Mystery",
            "year": "unknown",
            "avg_vote": 6.0,
            "votes": 100
        }))
        .unwrap();
        let record: MovieRecord = row.into();

        assert_eq!(record.year, None);
        assert_eq!(record.year_raw, "unknown");
        assert!(record.genre.is_none());
    }

    #[test]
    fn test_row_without_title_fails_coercion() {
        let result = serde_json::from_value::<RemoteRow>(json!({
            "year": 2000,
            "avg_vote": 6.0,
            "votes": 100
        }));

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_service_is_a_connection_error() {
        let client = AnalysisClient::new("http://127.0.0.1:9/filter");
        let err = client
            .filter_movies(&FilterCriteria::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisClientError::ConnectionError(_)));
    }
}
