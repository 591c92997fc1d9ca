use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::parser;
use engine::{FilterCriteria, QueryEngine};
use server::{DashboardSession, DataSourceConfig, build_provider};
use std::path::PathBuf;
use std::time::Instant;

/// movie-dash - Movie dashboard query engine
#[derive(Parser)]
#[command(name = "movie-dash")]
#[command(about = "Browse and filter the movie dataset from the terminal", long_about = None)]
struct Cli {
    /// Path to a local dataset CSV
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// URL to download the dataset CSV from
    #[arg(long, global = true)]
    data_url: Option<String>,

    /// Delegate filtering to the analysis service at this URL
    /// instead of filtering locally
    #[arg(long, global = true)]
    service_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter the dataset and show matching movies
    Search {
        /// Minimum average rating [0.0, 10.0]
        #[arg(long, default_value = "0.0")]
        min_rating: f64,

        /// Minimum number of votes
        #[arg(long, default_value = "0")]
        min_votes: u64,

        /// Genre tag ("any" disables the filter)
        #[arg(long)]
        genre: Option<String>,

        /// Minimum release year
        #[arg(long, default_value = "0")]
        min_year: i32,

        /// Language tag ("any" disables the filter)
        #[arg(long)]
        language: Option<String>,

        /// Actor-name substring (case-insensitive)
        #[arg(long)]
        actor: Option<String>,

        /// Maximum rows to return
        #[arg(long, default_value = "100")]
        limit: usize,

        /// Sampling seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show dataset shape and row counts
    Stats,

    /// Show the column order the grid will display
    Columns,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Search {
            min_rating,
            min_votes,
            genre,
            min_year,
            language,
            actor,
            limit,
            seed,
        } => {
            let criteria = build_criteria(
                *min_rating,
                *min_votes,
                genre.clone(),
                *min_year,
                language.clone(),
                actor.clone(),
            )?;
            let config = source_config(&cli)?;
            handle_search(config, criteria, *limit, *seed).await?
        }
        Commands::Stats => handle_stats(&cli).await?,
        Commands::Columns => handle_columns(&cli).await?,
    }

    Ok(())
}

fn build_criteria(
    min_rating: f64,
    min_votes: u64,
    genre: Option<String>,
    min_year: i32,
    language: Option<String>,
    actor: Option<String>,
) -> Result<FilterCriteria> {
    let mut builder = FilterCriteria::builder()
        .min_rating(min_rating)
        .min_votes(min_votes)
        .min_year(min_year);
    if let Some(genre) = genre {
        builder = builder.genre(genre);
    }
    if let Some(language) = language {
        builder = builder.language(language);
    }
    if let Some(actor) = actor {
        builder = builder.actor(actor);
    }
    builder.build().context("Invalid filter criteria")
}

fn source_config(cli: &Cli) -> Result<DataSourceConfig> {
    if let Some(endpoint) = &cli.service_url {
        return Ok(DataSourceConfig::Remote {
            endpoint: endpoint.clone(),
        });
    }
    Ok(DataSourceConfig::Local {
        dataset_path: cli.data_file.clone(),
        dataset_url: cli.data_url.clone(),
    })
}

/// Handle the 'search' command
async fn handle_search(
    config: DataSourceConfig,
    criteria: FilterCriteria,
    limit: usize,
    seed: Option<u64>,
) -> Result<()> {
    let start = Instant::now();
    let provider = build_provider(&config)
        .await
        .context("Failed to build data provider")?;
    println!("{} Data source ready in {:?}", "✓".green(), start.elapsed());

    let mut session = DashboardSession::new(provider);
    session.set_criteria(criteria);
    session.set_sample_cap(limit);

    let start = Instant::now();
    let result = session.search(seed).await?;
    let elapsed = start.elapsed();

    if result.is_empty() {
        println!("{}", "No movies match the current filters.".yellow());
        return Ok(());
    }

    println!(
        "{} {} movies in {:?} (columns: {})",
        "✓".green(),
        result.len(),
        elapsed,
        result.columns.join(", ").dimmed()
    );
    for (i, row) in result.rows.iter().enumerate() {
        println!(
            "{:>4}. {} ({}) - {:.1} [{} votes]",
            i + 1,
            row.title.bold(),
            if row.year_raw.is_empty() {
                "????"
            } else {
                row.year_raw.as_str()
            },
            row.avg_vote,
            row.votes
        );
        if let Some(genre) = &row.genre {
            println!("      {}", genre.dimmed());
        }
    }

    Ok(())
}

/// Load the dataset for the inspection commands, which always filter
/// locally.
async fn load_dataset(cli: &Cli, command: &str) -> Result<data_loader::MovieDataset> {
    match (&cli.data_file, &cli.data_url) {
        (Some(path), _) => parser::load_from_path(path)
            .with_context(|| format!("Loading dataset from {}", path.display())),
        (None, Some(url)) => data_loader::fetch::load_from_url(url)
            .await
            .with_context(|| format!("Loading dataset from {url}")),
        (None, None) => anyhow::bail!("{command} needs --data-file or --data-url"),
    }
}

/// Handle the 'stats' command
async fn handle_stats(cli: &Cli) -> Result<()> {
    let dataset = load_dataset(cli, "stats").await?;

    println!("{} {} movies loaded", "✓".green(), dataset.len());
    println!("{} columns in source order:", dataset.columns.len());
    for column in &dataset.columns {
        println!("  - {column}");
    }

    let matching = QueryEngine::matching_rows(&dataset, &FilterCriteria::default())?;
    println!(
        "{} of {} rows have a parseable year",
        matching.len(),
        dataset.len()
    );

    Ok(())
}

/// Handle the 'columns' command
async fn handle_columns(cli: &Cli) -> Result<()> {
    let dataset = load_dataset(cli, "columns").await?;

    for column in engine::project_columns(&dataset.columns) {
        println!("{column}");
    }

    Ok(())
}
