//! Application Services
//!
//! Long-running orchestration around the pure stats stages.

pub mod stats_worker;

pub use stats_worker::{CycleStats, StatsWorker, StatsWorkerConfig};
