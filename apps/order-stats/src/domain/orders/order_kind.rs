//! Order kind (market, limit, stop).
//!
//! The kind carries its type-specific price as variant payload, so a
//! limit order without a limit price is unrepresentable.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order kind with the price that is meaningful for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderKind {
    /// Market order - executed at best available price.
    Market,
    /// Limit order - executed at the limit price or better.
    Limit {
        /// The order's limit price.
        limit_price: Decimal,
    },
    /// Stop order - becomes a market order at the stop price.
    Stop {
        /// The order's stop price.
        stop_price: Decimal,
    },
}

impl OrderKind {
    /// The grouping category for this kind.
    #[must_use]
    pub const fn category(&self) -> OrderCategory {
        match self {
            Self::Market => OrderCategory::Market,
            Self::Limit { .. } => OrderCategory::Limit,
            Self::Stop { .. } => OrderCategory::Stop,
        }
    }

    /// The type-specific order price, if this kind has one.
    ///
    /// Limit orders yield their limit price, stop orders their stop
    /// price. Market orders have none.
    #[must_use]
    pub const fn order_price(&self) -> Option<Decimal> {
        match self {
            Self::Market => None,
            Self::Limit { limit_price } => Some(*limit_price),
            Self::Stop { stop_price } => Some(*stop_price),
        }
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.category(), f)
    }
}

/// Discriminant-only grouping key for [`OrderKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderCategory {
    /// Market orders.
    Market,
    /// Limit orders.
    Limit,
    /// Stop orders.
    Stop,
}

impl OrderCategory {
    /// All categories in canonical report order.
    ///
    /// Report sections always iterate in this order so output is
    /// deterministic across runs.
    pub const ALL: [Self; 3] = [Self::Market, Self::Limit, Self::Stop];

    /// Human-readable section label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Market => "Market",
            Self::Limit => "Limit",
            Self::Stop => "Stop",
        }
    }
}

impl fmt::Display for OrderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Market => write!(f, "MARKET"),
            Self::Limit => write!(f, "LIMIT"),
            Self::Stop => write!(f, "STOP"),
        }
    }
}
