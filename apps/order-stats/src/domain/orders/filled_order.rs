//! Filled order record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::order_kind::OrderKind;
use super::order_side::OrderSide;

/// A completed trade execution, read-only once persisted.
///
/// Created by the repository from stored data; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilledOrder {
    /// Instrument identifier.
    pub symbol: String,
    /// Buy or sell.
    pub side: OrderSide,
    /// Kind with its type-specific price.
    pub kind: OrderKind,
    /// Filled quantity.
    pub quantity: u64,
    /// Realized fill price, present for all kinds.
    pub avg_price: Decimal,
    /// When the order was filled.
    pub filled_at: DateTime<Utc>,
}

/// Optional constraints for a repository fetch.
///
/// An empty filter (the default) matches every order; the worker
/// fetches unfiltered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    /// Restrict to a single instrument.
    pub symbol: Option<String>,
    /// Restrict to one side.
    pub side: Option<OrderSide>,
}

impl OrderFilter {
    /// Whether the order satisfies every constraint in this filter.
    #[must_use]
    pub fn matches(&self, order: &FilledOrder) -> bool {
        if let Some(symbol) = &self.symbol
            && symbol != &order.symbol
        {
            return false;
        }
        if let Some(side) = self.side
            && side != order.side
        {
            return false;
        }
        true
    }
}
