//! Periodic Stats Worker
//!
//! Owns the repository for its whole lifetime and drives the
//! fetch -> aggregate -> rank -> render -> publish cycle on a fixed
//! period until cancelled. Every exit path funnels through one
//! shutdown step that releases the repository connection exactly once.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::application::ports::ReportSink;
use crate::application::stats::{render_report, summarize_by_type, top_by_quantity};
use crate::domain::orders::{FilledOrderRepository, RepositoryError};

/// Configuration for the stats worker.
#[derive(Debug, Clone)]
pub struct StatsWorkerConfig {
    /// Pause between publishing cycles.
    pub publish_period: Duration,
    /// How many orders to rank per side.
    pub top_orders: usize,
}

impl Default for StatsWorkerConfig {
    fn default() -> Self {
        Self {
            publish_period: Duration::from_secs(30),
            top_orders: 5,
        }
    }
}

/// Cycle counters returned when the worker shuts down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleStats {
    /// Cycles attempted.
    pub cycles_run: u64,
    /// Cycles that failed and were skipped.
    pub cycles_failed: u64,
}

/// Periodic worker that publishes one statistics report per cycle.
pub struct StatsWorker<R: FilledOrderRepository> {
    config: StatsWorkerConfig,
    repository: Arc<R>,
    sink: Arc<dyn ReportSink>,
    cancel: CancellationToken,
}

impl<R: FilledOrderRepository> StatsWorker<R> {
    /// Create a new worker.
    #[must_use]
    pub fn new(
        config: StatsWorkerConfig,
        repository: Arc<R>,
        sink: Arc<dyn ReportSink>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            config,
            repository,
            sink,
            cancel,
        }
    }

    /// Run until cancelled, then release the repository connection.
    ///
    /// A failed cycle is logged at warn level and skipped; the next
    /// scheduled cycle is the retry vehicle, there is no immediate
    /// retry. Cancellation is observed before each cycle and
    /// interrupts an in-progress sleep. Cancellation is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Close`] if releasing the connection
    /// fails during shutdown. Consuming `self` makes a second release
    /// attempt unrepresentable.
    pub async fn run(self) -> Result<CycleStats, RepositoryError> {
        tracing::info!(
            period_secs = self.config.publish_period.as_secs(),
            top_orders = self.config.top_orders,
            "Starting stats worker"
        );

        let mut stats = CycleStats::default();
        loop {
            if self.cancel.is_cancelled() {
                break;
            }

            stats.cycles_run += 1;
            match self.run_cycle().await {
                Ok(report) => self.sink.publish(&report),
                Err(e) => {
                    stats.cycles_failed += 1;
                    tracing::warn!(error = %e, "Unable to produce order statistics");
                }
            }

            tokio::select! {
                () = self.cancel.cancelled() => break,
                () = tokio::time::sleep(self.config.publish_period) => {}
            }
        }

        // Single shutdown path shared by every loop exit.
        tracing::info!(
            cycles = stats.cycles_run,
            failed = stats.cycles_failed,
            "Stats worker stopping"
        );
        self.repository.close().await?;
        Ok(stats)
    }

    /// One fetch -> aggregate -> rank -> render pass.
    async fn run_cycle(&self) -> Result<String, RepositoryError> {
        let orders = self.repository.fetch_filled(None).await?;
        let summaries = summarize_by_type(&orders);
        let selections = top_by_quantity(&orders, self.config.top_orders);
        Ok(render_report(&summaries, &selections))
    }
}
