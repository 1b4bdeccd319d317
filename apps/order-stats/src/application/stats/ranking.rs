//! Per-side top-N order selection.
//!
//! Selection direction depends on the side: the biggest buys and the
//! smallest sells. The sort is stable, so orders with equal quantity
//! keep their input-relative order; that decides which order wins at
//! the boundary of N.

use chrono::{DateTime, Utc};

use crate::domain::orders::{FilledOrder, OrderSide};

/// One order in a ranked selection.
///
/// Only the fields the report needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedOrder {
    /// Instrument identifier.
    pub symbol: String,
    /// Filled quantity.
    pub quantity: u64,
    /// When the order was filled.
    pub filled_at: DateTime<Utc>,
}

/// The top-N extremes of one side group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideSelection {
    /// The side this selection covers.
    pub side: OrderSide,
    /// Group cardinality before truncation.
    pub total: usize,
    /// Selected orders, at most N. Buys descend by quantity, sells
    /// ascend.
    pub top: Vec<RankedOrder>,
}

/// Select the top `limit` orders per side by quantity.
///
/// Buy groups keep their `limit` largest orders, sell groups their
/// `limit` smallest. Groups smaller than `limit` are returned whole;
/// empty side groups are absent from the result. `limit == 0` yields
/// empty selections. Sides follow [`OrderSide::ALL`] order.
#[must_use]
pub fn top_by_quantity(orders: &[FilledOrder], limit: usize) -> Vec<SideSelection> {
    OrderSide::ALL
        .into_iter()
        .filter_map(|side| {
            let mut group: Vec<&FilledOrder> =
                orders.iter().filter(|order| order.side == side).collect();
            if group.is_empty() {
                return None;
            }
            let total = group.len();

            // slice::sort_by is stable: ties keep input order.
            match side {
                OrderSide::Buy => group.sort_by(|a, b| b.quantity.cmp(&a.quantity)),
                OrderSide::Sell => group.sort_by(|a, b| a.quantity.cmp(&b.quantity)),
            }
            group.truncate(limit);

            Some(SideSelection {
                side,
                total,
                top: group
                    .into_iter()
                    .map(|order| RankedOrder {
                        symbol: order.symbol.clone(),
                        quantity: order.quantity,
                        filled_at: order.filled_at,
                    })
                    .collect(),
            })
        })
        .collect()
}
