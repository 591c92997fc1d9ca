//! Server crate for the movie dashboard.
//!
//! This crate owns the session layer: it wires a configured data provider
//! to per-user `DashboardSession`s that hold criteria and results.

pub mod config;
pub mod session;

pub use config::{DataSourceConfig, build_provider};
pub use session::DashboardSession;
