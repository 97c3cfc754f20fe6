//! Deal analysis library for real-estate listing feeds.
//!
//! The `deals` area carries the profitability analyzer, its report formatting,
//! and the notification sinks; `ingest` turns listing CSV exports into domain
//! records; `config`, `error`, and `telemetry` back the hosting service.

pub mod config;
pub mod deals;
pub mod error;
pub mod ingest;
pub mod telemetry;
