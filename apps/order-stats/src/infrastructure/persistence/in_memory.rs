//! In-memory filled-order repository for testing.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::orders::{
    FilledOrder, FilledOrderRepository, OrderFilter, RepositoryError,
};

/// In-memory implementation of [`FilledOrderRepository`].
///
/// Suitable for testing and development. Not for production use.
/// Records `close()` invocations and can be told to fail fetches or
/// the close, which the worker lifecycle tests rely on.
#[derive(Debug, Default)]
pub struct InMemoryFilledOrderRepository {
    orders: RwLock<Vec<FilledOrder>>,
    fail_fetches: AtomicBool,
    fail_close: AtomicBool,
    close_calls: AtomicUsize,
}

impl InMemoryFilledOrderRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with orders.
    #[must_use]
    pub fn with_orders(orders: Vec<FilledOrder>) -> Self {
        Self {
            orders: RwLock::new(orders),
            ..Self::default()
        }
    }

    /// Add an order (for test setup).
    pub fn add(&self, order: FilledOrder) {
        self.orders.write().push(order);
    }

    /// Number of stored orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.read().len()
    }

    /// Whether the repository holds no orders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.read().is_empty()
    }

    /// Make subsequent fetches fail with a query error.
    pub fn fail_fetches(&self, fail: bool) {
        self.fail_fetches.store(fail, Ordering::SeqCst);
    }

    /// Make `close()` fail.
    pub fn fail_close(&self, fail: bool) {
        self.fail_close.store(fail, Ordering::SeqCst);
    }

    /// How many times `close()` has been invoked.
    #[must_use]
    pub fn close_calls(&self) -> usize {
        self.close_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FilledOrderRepository for InMemoryFilledOrderRepository {
    async fn fetch_filled(
        &self,
        filter: Option<&OrderFilter>,
    ) -> Result<Vec<FilledOrder>, RepositoryError> {
        if self.fail_fetches.load(Ordering::SeqCst) {
            return Err(RepositoryError::Query {
                message: "injected fetch failure".to_string(),
            });
        }
        let orders = self.orders.read();
        Ok(match filter {
            None => orders.clone(),
            Some(filter) => orders
                .iter()
                .filter(|order| filter.matches(order))
                .cloned()
                .collect(),
        })
    }

    async fn close(&self) -> Result<(), RepositoryError> {
        self.close_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_close.load(Ordering::SeqCst) {
            return Err(RepositoryError::Close {
                message: "injected close failure".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::orders::{OrderKind, OrderSide};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn order(symbol: &str, side: OrderSide) -> FilledOrder {
        FilledOrder {
            symbol: symbol.to_string(),
            side,
            kind: OrderKind::Market,
            quantity: 10,
            avg_price: dec!(100),
            filled_at: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn fetch_all_without_filter() {
        let repo = InMemoryFilledOrderRepository::with_orders(vec![
            order("AAPL", OrderSide::Buy),
            order("MSFT", OrderSide::Sell),
        ]);
        let orders = repo.fetch_filled(None).await.unwrap();
        assert_eq!(orders.len(), 2);
    }

    #[tokio::test]
    async fn fetch_applies_filter() {
        let repo = InMemoryFilledOrderRepository::with_orders(vec![
            order("AAPL", OrderSide::Buy),
            order("MSFT", OrderSide::Sell),
        ]);
        let filter = OrderFilter {
            symbol: None,
            side: Some(OrderSide::Sell),
        };
        let orders = repo.fetch_filled(Some(&filter)).await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].symbol, "MSFT");
    }

    #[tokio::test]
    async fn injected_fetch_failure() {
        let repo = InMemoryFilledOrderRepository::new();
        repo.fail_fetches(true);
        let result = repo.fetch_filled(None).await;
        assert!(matches!(result, Err(RepositoryError::Query { .. })));

        repo.fail_fetches(false);
        assert!(repo.fetch_filled(None).await.is_ok());
    }

    #[tokio::test]
    async fn close_is_counted() {
        let repo = InMemoryFilledOrderRepository::new();
        assert_eq!(repo.close_calls(), 0);
        repo.close().await.unwrap();
        assert_eq!(repo.close_calls(), 1);
    }
}
