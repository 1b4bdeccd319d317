//! Filled Order Repository Trait
//!
//! Defines the order-store abstraction consumed by the stats worker.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::errors::RepositoryError;
use super::filled_order::{FilledOrder, OrderFilter};

/// Repository trait for reading filled orders.
///
/// This is a domain interface (port) that is implemented by
/// infrastructure adapters (Postgres, in-memory, etc.). The worker
/// owns one repository for its whole lifetime and is the only
/// component that may call [`close`](FilledOrderRepository::close).
#[async_trait]
pub trait FilledOrderRepository: Send + Sync {
    /// Fetch the current set of filled orders.
    ///
    /// `None` fetches everything; a filter restricts the result set.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Query`] on connectivity or query
    /// failure, [`RepositoryError::MalformedRecord`] when a stored row
    /// cannot be decoded into a [`FilledOrder`].
    async fn fetch_filled(
        &self,
        filter: Option<&OrderFilter>,
    ) -> Result<Vec<FilledOrder>, RepositoryError>;

    /// Release the underlying connection.
    ///
    /// Called exactly once, during worker shutdown.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Close`] if the release did not
    /// complete.
    async fn close(&self) -> Result<(), RepositoryError>;
}
