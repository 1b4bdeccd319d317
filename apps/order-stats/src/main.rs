//! Order Stats Binary
//!
//! Starts the periodic filled-order statistics reporter.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin order-stats [config.yaml]
//! ```
//!
//! # Environment Variables
//!
//! - `ORDER_STATS_DB_PASSWORD`: order store password
//! - `RUST_LOG`: log level (default: info)

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use order_stats::application::ports::ReportSink;
use order_stats::application::services::{StatsWorker, StatsWorkerConfig};
use order_stats::infrastructure::persistence::PostgresFilledOrderRepository;
use order_stats::infrastructure::publish::LogReportSink;
use order_stats::{load_config, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();
    tracing::info!("Starting order stats service");

    let config_path = std::env::args().nth(1);
    let config = load_config(config_path.as_deref())?;

    let repository = Arc::new(PostgresFilledOrderRepository::connect(&config.database).await?);
    let sink: Arc<dyn ReportSink> = Arc::new(LogReportSink);

    let cancel = CancellationToken::new();
    let worker = StatsWorker::new(
        StatsWorkerConfig {
            publish_period: config.stats.publish_period(),
            top_orders: config.stats.top_orders,
        },
        repository,
        sink,
        cancel.clone(),
    );
    let worker_handle = tokio::spawn(worker.run());

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");
    cancel.cancel();

    let stats = worker_handle.await??;
    tracing::info!(
        cycles = stats.cycles_run,
        failed = stats.cycles_failed,
        "Order stats service stopped"
    );
    Ok(())
}
