//! Simple test harness for the dashboard session layer.
//!
//! This binary lets you exercise the end-to-end path by loading a local
//! CSV and running one search with fixed criteria.

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use engine::FilterCriteria;
use server::{DashboardSession, DataSourceConfig, build_provider};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,server=debug,providers=debug,engine=debug")
        .init();

    info!("Starting dashboard server test harness");

    let dataset_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/IMDb_movies.csv".to_string());

    let config = DataSourceConfig::Local {
        dataset_path: Some(PathBuf::from(dataset_path)),
        dataset_url: None,
    };
    let provider = build_provider(&config).await?;

    let mut session = DashboardSession::new(provider);
    session.set_criteria(
        FilterCriteria::builder()
            .min_rating(7.0)
            .min_votes(10_000)
            .min_year(1990)
            .build()?,
    );

    let result = session.search(None).await?;
    info!("Search returned {} rows:", result.len());
    for (i, title) in result.titles().iter().enumerate() {
        info!("{}. {}", i + 1, title);
    }

    Ok(())
}
