//! End-to-end worker lifecycle tests.
//!
//! Drive the periodic worker against the in-memory repository and a
//! collecting sink, under virtual time.

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use parking_lot::Mutex;
use rust_decimal_macros::dec;
use tokio_util::sync::CancellationToken;

use order_stats::application::ports::ReportSink;
use order_stats::application::services::{StatsWorker, StatsWorkerConfig};
use order_stats::infrastructure::persistence::InMemoryFilledOrderRepository;
use order_stats::{FilledOrder, OrderKind, OrderSide};

#[derive(Default)]
struct CollectingSink {
    reports: Mutex<Vec<String>>,
}

impl CollectingSink {
    fn reports(&self) -> Vec<String> {
        self.reports.lock().clone()
    }
}

impl ReportSink for CollectingSink {
    fn publish(&self, report: &str) {
        self.reports.lock().push(report.to_string());
    }
}

fn order(symbol: &str, side: OrderSide, kind: OrderKind, quantity: u64) -> FilledOrder {
    FilledOrder {
        symbol: symbol.to_string(),
        side,
        kind,
        quantity,
        avg_price: dec!(100.00),
        filled_at: Utc.with_ymd_and_hms(2026, 8, 1, 9, 30, 0).unwrap(),
    }
}

fn seeded_repository() -> InMemoryFilledOrderRepository {
    InMemoryFilledOrderRepository::with_orders(vec![
        order("AAPL", OrderSide::Buy, OrderKind::Market, 100),
        order("MSFT", OrderSide::Buy, OrderKind::Market, 250),
        order(
            "NVDA",
            OrderSide::Buy,
            OrderKind::Limit {
                limit_price: dec!(99.50),
            },
            50,
        ),
        order(
            "TSLA",
            OrderSide::Sell,
            OrderKind::Stop {
                stop_price: dec!(95.00),
            },
            75,
        ),
        order("AMZN", OrderSide::Sell, OrderKind::Market, 10),
    ])
}

fn worker(
    repo: &Arc<InMemoryFilledOrderRepository>,
    sink: &Arc<CollectingSink>,
    cancel: &CancellationToken,
) -> StatsWorker<InMemoryFilledOrderRepository> {
    StatsWorker::new(
        StatsWorkerConfig {
            publish_period: Duration::from_secs(30),
            top_orders: 5,
        },
        Arc::clone(repo),
        Arc::clone(sink) as Arc<dyn ReportSink>,
        cancel.clone(),
    )
}

#[tokio::test(start_paused = true)]
async fn full_report_covers_all_present_categories() {
    let repo = Arc::new(seeded_repository());
    let sink = Arc::new(CollectingSink::default());
    let cancel = CancellationToken::new();

    let handle = tokio::spawn(worker(&repo, &sink, &cancel).run());
    tokio::time::sleep(Duration::from_secs(1)).await;
    cancel.cancel();
    let stats = handle.await.unwrap().unwrap();

    assert_eq!(stats.cycles_run, 1);
    let reports = sink.reports();
    assert_eq!(reports.len(), 1);
    let report = &reports[0];

    // Type sections in canonical order.
    let market = report.find("Market Orders:").unwrap();
    let limit = report.find("Limit Orders:").unwrap();
    let stop = report.find("Stop Orders:").unwrap();
    assert!(market < limit && limit < stop);

    // Market section: three market orders, mean quantity 120.00.
    assert!(report.contains("\tAverage quantity: 120.00"));
    assert!(report.contains("\tOrders number: 3"));

    // Type-specific price lines.
    assert!(report.contains("\tAverage limit price: 99.50"));
    assert!(report.contains("\tAverage stop price: 95.00"));

    // Side sections: buys biggest-first, sells smallest-first.
    assert!(report.contains("BUY orders number: 3"));
    assert!(report.contains("SELL orders number: 2"));
    let msft = report.find("MSFT/ 250/").unwrap();
    let aapl = report.find("AAPL/ 100/").unwrap();
    let nvda = report.find("NVDA/ 50/").unwrap();
    assert!(msft < aapl && aapl < nvda);
    let amzn = report.find("AMZN/ 10/").unwrap();
    let tsla = report.find("TSLA/ 75/").unwrap();
    assert!(amzn < tsla);

    assert_eq!(repo.close_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn empty_store_produces_static_report_without_errors() {
    let repo = Arc::new(InMemoryFilledOrderRepository::new());
    let sink = Arc::new(CollectingSink::default());
    let cancel = CancellationToken::new();

    let handle = tokio::spawn(worker(&repo, &sink, &cancel).run());
    tokio::time::sleep(Duration::from_secs(1)).await;
    cancel.cancel();
    let stats = handle.await.unwrap().unwrap();

    assert_eq!(stats.cycles_failed, 0);
    let reports = sink.reports();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0], "Filled order statistics\n");
    assert_eq!(repo.close_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn transient_fetch_failures_recover_on_later_cycles() {
    let repo = Arc::new(seeded_repository());
    repo.fail_fetches(true);
    let sink = Arc::new(CollectingSink::default());
    let cancel = CancellationToken::new();

    let handle = tokio::spawn(worker(&repo, &sink, &cancel).run());

    // First cycle fails; restore the store before the second.
    tokio::time::sleep(Duration::from_secs(15)).await;
    repo.fail_fetches(false);
    tokio::time::sleep(Duration::from_secs(30)).await;
    cancel.cancel();

    let stats = handle.await.unwrap().unwrap();
    assert_eq!(stats.cycles_run, 2);
    assert_eq!(stats.cycles_failed, 1);
    assert_eq!(sink.reports().len(), 1);
    assert_eq!(repo.close_calls(), 1);
}
