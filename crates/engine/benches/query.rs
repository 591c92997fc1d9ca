//! Benchmarks for the query engine
//!
//! Run with: cargo bench --package engine
//!
//! Uses a synthetic dataset so the bench does not depend on downloading
//! the real CSV.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{MovieDataset, MovieRecord, PRIORITY_COLUMNS};
use engine::{FilterCriteria, QueryEngine};

fn synthetic_dataset(rows: usize) -> MovieDataset {
    let genres = ["Action", "Comedy", "Drama", "Horror", "Romance"];
    let languages = ["English", "French", "Spanish", "Japanese"];
    let records = (0..rows)
        .map(|i| MovieRecord {
            title: format!("Movie {i:06}"),
            year: Some(1950 + (i % 70) as i32),
            year_raw: (1950 + (i % 70)).to_string(),
            genre: Some(format!(
                "{},{}",
                genres[i % genres.len()],
                genres[(i + 2) % genres.len()]
            )),
            avg_vote: (i % 100) as f64 / 10.0,
            votes: (i * 37 % 100_000) as u64,
            language: Some(languages[i % languages.len()].to_string()),
            duration: Some(80 + (i % 90) as u32),
            actors: Some(format!("Actor {}, Actor {}", i % 500, (i + 7) % 500)),
            extra: Vec::new(),
        })
        .collect();
    MovieDataset {
        columns: PRIORITY_COLUMNS.iter().map(|s| s.to_string()).collect(),
        records,
    }
}

fn bench_matching_rows(c: &mut Criterion) {
    let dataset = synthetic_dataset(50_000);
    let criteria = FilterCriteria::builder()
        .min_rating(6.0)
        .min_votes(1000)
        .genre("Drama")
        .min_year(1980)
        .build()
        .unwrap();

    c.bench_function("matching_rows_50k", |b| {
        b.iter(|| {
            let rows = QueryEngine::matching_rows(black_box(&dataset), black_box(&criteria));
            black_box(rows)
        })
    });
}

fn bench_query_with_sampling(c: &mut Criterion) {
    let dataset = synthetic_dataset(50_000);
    let criteria = FilterCriteria::builder().min_rating(3.0).build().unwrap();

    c.bench_function("query_sampled_50k", |b| {
        b.iter(|| {
            let result = QueryEngine::query(
                black_box(&dataset),
                black_box(&criteria),
                black_box(100),
                Some(42),
            );
            black_box(result)
        })
    });
}

criterion_group!(benches, bench_matching_rows, bench_query_with_sampling);
criterion_main!(benches);
