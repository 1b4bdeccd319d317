//! Per-type order statistics.
//!
//! Pure functions over a fetched order set. A category with no orders
//! this cycle produces no summary entry; callers omit that report
//! section rather than printing zeros.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::orders::{FilledOrder, OrderCategory};

/// Numeric summary of one order-type group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSummary {
    /// Orders in the group.
    pub count: usize,
    /// Mean quantity, 2 dp, half-up.
    pub avg_quantity: Decimal,
    /// Mean realized fill price, 2 dp, half-up.
    pub avg_fill_price: Decimal,
    /// Mean limit price (Limit) or stop price (Stop); `None` for
    /// Market.
    pub avg_order_price: Option<Decimal>,
}

/// Group orders by type and summarize each non-empty group.
///
/// Results follow [`OrderCategory::ALL`] order; empty groups are
/// absent. Means are arithmetic, so reordering the input never changes
/// the output.
#[must_use]
pub fn summarize_by_type(orders: &[FilledOrder]) -> Vec<(OrderCategory, TypeSummary)> {
    OrderCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let group: Vec<&FilledOrder> = orders
                .iter()
                .filter(|order| order.kind.category() == category)
                .collect();
            if group.is_empty() {
                return None;
            }

            let quantities: Vec<Decimal> =
                group.iter().map(|o| Decimal::from(o.quantity)).collect();
            let fill_prices: Vec<Decimal> = group.iter().map(|o| o.avg_price).collect();
            let order_prices: Vec<Decimal> = group
                .iter()
                .filter_map(|o| o.kind.order_price())
                .collect();

            Some((
                category,
                TypeSummary {
                    count: group.len(),
                    avg_quantity: rounded_mean(&quantities),
                    avg_fill_price: rounded_mean(&fill_prices),
                    avg_order_price: (!order_prices.is_empty())
                        .then(|| rounded_mean(&order_prices)),
                },
            ))
        })
        .collect()
}

/// Arithmetic mean rounded to 2 decimal places, half-up.
///
/// Callers guarantee `values` is non-empty; empty groups never reach
/// this point.
fn rounded_mean(values: &[Decimal]) -> Decimal {
    let sum: Decimal = values.iter().copied().sum();
    (sum / Decimal::from(values.len()))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
