//! PostgreSQL filled-order repository.
//!
//! Reads the `filled_orders` table written by the execution side.
//! Limit and stop prices are nullable columns; a row whose declared
//! type is missing its required price decodes to
//! [`RepositoryError::MalformedRecord`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::Row;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};

use crate::config::DatabaseConfig;
use crate::domain::orders::{
    FilledOrder, FilledOrderRepository, OrderFilter, OrderKind, OrderSide, RepositoryError,
};

const SELECT_FILLED: &str = "SELECT symbol, side, order_type, quantity, avg_price, \
     limit_price, stop_price, filled_at FROM filled_orders";

/// [`FilledOrderRepository`] backed by a PostgreSQL pool.
pub struct PostgresFilledOrderRepository {
    pool: PgPool,
}

impl PostgresFilledOrderRepository {
    /// Connect a new pool from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Query`] if the pool cannot be
    /// established.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, RepositoryError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url())
            .await
            .map_err(|e| RepositoryError::Query {
                message: e.to_string(),
            })?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FilledOrderRepository for PostgresFilledOrderRepository {
    async fn fetch_filled(
        &self,
        filter: Option<&OrderFilter>,
    ) -> Result<Vec<FilledOrder>, RepositoryError> {
        let filter = filter.cloned().unwrap_or_default();
        let rows = match (&filter.symbol, filter.side) {
            (Some(symbol), Some(side)) => {
                sqlx::query(&format!(
                    "{SELECT_FILLED} WHERE symbol = $1 AND side = $2"
                ))
                .bind(symbol)
                .bind(side.to_string())
                .fetch_all(&self.pool)
                .await
            }
            (Some(symbol), None) => {
                sqlx::query(&format!("{SELECT_FILLED} WHERE symbol = $1"))
                    .bind(symbol)
                    .fetch_all(&self.pool)
                    .await
            }
            (None, Some(side)) => {
                sqlx::query(&format!("{SELECT_FILLED} WHERE side = $1"))
                    .bind(side.to_string())
                    .fetch_all(&self.pool)
                    .await
            }
            (None, None) => sqlx::query(SELECT_FILLED).fetch_all(&self.pool).await,
        }
        .map_err(|e| RepositoryError::Query {
            message: e.to_string(),
        })?;

        rows.iter().map(decode_row).collect()
    }

    async fn close(&self) -> Result<(), RepositoryError> {
        self.pool.close().await;
        Ok(())
    }
}

fn query_error(e: &sqlx::Error) -> RepositoryError {
    RepositoryError::Query {
        message: e.to_string(),
    }
}

fn decode_row(row: &PgRow) -> Result<FilledOrder, RepositoryError> {
    let symbol: String = row.try_get("symbol").map_err(|e| query_error(&e))?;

    let side_raw: String = row.try_get("side").map_err(|e| query_error(&e))?;
    let side = match side_raw.as_str() {
        "BUY" => OrderSide::Buy,
        "SELL" => OrderSide::Sell,
        other => {
            return Err(RepositoryError::MalformedRecord {
                symbol,
                reason: format!("unknown side '{other}'"),
            });
        }
    };

    let type_raw: String = row.try_get("order_type").map_err(|e| query_error(&e))?;
    let limit_price: Option<Decimal> =
        row.try_get("limit_price").map_err(|e| query_error(&e))?;
    let stop_price: Option<Decimal> =
        row.try_get("stop_price").map_err(|e| query_error(&e))?;
    let kind = match type_raw.as_str() {
        "MARKET" => OrderKind::Market,
        "LIMIT" => OrderKind::Limit {
            limit_price: limit_price.ok_or_else(|| RepositoryError::MalformedRecord {
                symbol: symbol.clone(),
                reason: "LIMIT row has no limit_price".to_string(),
            })?,
        },
        "STOP" => OrderKind::Stop {
            stop_price: stop_price.ok_or_else(|| RepositoryError::MalformedRecord {
                symbol: symbol.clone(),
                reason: "STOP row has no stop_price".to_string(),
            })?,
        },
        other => {
            return Err(RepositoryError::MalformedRecord {
                symbol,
                reason: format!("unknown order type '{other}'"),
            });
        }
    };

    let quantity_raw: i64 = row.try_get("quantity").map_err(|e| query_error(&e))?;
    let quantity = u64::try_from(quantity_raw).map_err(|_| RepositoryError::MalformedRecord {
        symbol: symbol.clone(),
        reason: format!("negative quantity {quantity_raw}"),
    })?;

    let avg_price: Decimal = row.try_get("avg_price").map_err(|e| query_error(&e))?;
    let filled_at: DateTime<Utc> = row.try_get("filled_at").map_err(|e| query_error(&e))?;

    Ok(FilledOrder {
        symbol,
        side,
        kind,
        quantity,
        avg_price,
        filled_at,
    })
}
