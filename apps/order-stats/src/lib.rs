// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::items_after_statements
    )
)]

//! Order Stats - Periodic Filled-Order Statistics Reporter
//!
//! Reads the set of filled orders from the order store on a fixed
//! period, computes per-type summaries and per-side top-N rankings,
//! and publishes one textual report per cycle until cancelled.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside -> outside)
//!
//! - **Domain**: immutable order records and the repository trait
//!   - `orders`: `FilledOrder`, `OrderKind`, `OrderSide`,
//!     `FilledOrderRepository`
//!
//! - **Application**: use cases and orchestration
//!   - `stats`: pure aggregation, ranking, and report rendering
//!   - `ports`: `ReportSink`
//!   - `services`: the cancellable periodic `StatsWorker`
//!
//! - **Infrastructure**: adapters (implementations)
//!   - `persistence`: filled-order repository (in-memory, PostgreSQL)
//!   - `publish`: log-backed report sink

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

pub use application::ports::ReportSink;
pub use application::services::{CycleStats, StatsWorker, StatsWorkerConfig};
pub use config::{Config, ConfigError, load_config};
pub use domain::orders::{
    FilledOrder, FilledOrderRepository, OrderCategory, OrderFilter, OrderKind, OrderSide,
    RepositoryError,
};
