//! Report rendering.
//!
//! Pure string assembly from aggregator and selector output. No I/O.

use std::fmt::Write as _;

use crate::domain::orders::{OrderCategory, OrderSide};

use super::aggregator::TypeSummary;
use super::ranking::SideSelection;

/// Render type summaries and side selections into one report.
///
/// Absent categories produce no section. An empty cycle renders just
/// the header line.
#[must_use]
pub fn render_report(
    summaries: &[(OrderCategory, TypeSummary)],
    selections: &[SideSelection],
) -> String {
    let mut out = String::from("Filled order statistics\n");

    for (category, summary) in summaries {
        let _ = writeln!(out, "\n{} Orders:", category.label());
        match (category, summary.avg_order_price) {
            (OrderCategory::Market, _) | (_, None) => {
                let _ = writeln!(out, "\tAverage price: {:.2}", summary.avg_fill_price);
            }
            (OrderCategory::Limit, Some(price)) => {
                let _ = writeln!(out, "\tAverage market price: {:.2}", summary.avg_fill_price);
                let _ = writeln!(out, "\tAverage limit price: {price:.2}");
            }
            (OrderCategory::Stop, Some(price)) => {
                let _ = writeln!(out, "\tAverage market price: {:.2}", summary.avg_fill_price);
                let _ = writeln!(out, "\tAverage stop price: {price:.2}");
            }
        }
        let _ = writeln!(out, "\tAverage quantity: {:.2}", summary.avg_quantity);
        let _ = writeln!(out, "\tOrders number: {}", summary.count);
    }

    for selection in selections {
        let _ = writeln!(
            out,
            "\n{} orders number: {}",
            selection.side, selection.total
        );
        let direction = match selection.side {
            OrderSide::Buy => "biggest",
            OrderSide::Sell => "smallest",
        };
        let _ = writeln!(
            out,
            "Top {} {} quantity {} orders:",
            selection.top.len(),
            direction,
            selection.side
        );
        for order in &selection.top {
            let _ = writeln!(
                out,
                "\t{}/ {}/ {}",
                order.symbol,
                order.quantity,
                order.filled_at.format("%Y-%m-%d %H:%M:%S")
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::stats::ranking::RankedOrder;
    use crate::domain::orders::OrderSide;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn empty_cycle_renders_static_structure_only() {
        let report = render_report(&[], &[]);
        assert_eq!(report, "Filled order statistics\n");
    }

    #[test]
    fn market_section_has_single_price_line() {
        let summaries = vec![(
            OrderCategory::Market,
            TypeSummary {
                count: 3,
                avg_quantity: dec!(40.00),
                avg_fill_price: dec!(101.25),
                avg_order_price: None,
            },
        )];
        let report = render_report(&summaries, &[]);
        assert!(report.contains("Market Orders:"));
        assert!(report.contains("\tAverage price: 101.25"));
        assert!(report.contains("\tAverage quantity: 40.00"));
        assert!(report.contains("\tOrders number: 3"));
        assert!(!report.contains("Average market price"));
    }

    #[test]
    fn limit_section_has_both_price_lines() {
        let summaries = vec![(
            OrderCategory::Limit,
            TypeSummary {
                count: 2,
                avg_quantity: dec!(15.00),
                avg_fill_price: dec!(99.95),
                avg_order_price: Some(dec!(100.00)),
            },
        )];
        let report = render_report(&summaries, &[]);
        assert!(report.contains("Limit Orders:"));
        assert!(report.contains("\tAverage market price: 99.95"));
        assert!(report.contains("\tAverage limit price: 100.00"));
    }

    #[test]
    fn stop_section_labels_stop_price() {
        let summaries = vec![(
            OrderCategory::Stop,
            TypeSummary {
                count: 1,
                avg_quantity: dec!(5.00),
                avg_fill_price: dec!(94.80),
                avg_order_price: Some(dec!(95.00)),
            },
        )];
        let report = render_report(&summaries, &[]);
        assert!(report.contains("\tAverage stop price: 95.00"));
    }

    #[test]
    fn side_sections_render_ranked_lines() {
        let selections = vec![SideSelection {
            side: OrderSide::Buy,
            total: 4,
            top: vec![RankedOrder {
                symbol: "MSFT".to_string(),
                quantity: 50,
                filled_at: Utc.with_ymd_and_hms(2026, 8, 1, 12, 30, 0).unwrap(),
            }],
        }];
        let report = render_report(&[], &selections);
        assert!(report.contains("BUY orders number: 4"));
        assert!(report.contains("Top 1 biggest quantity BUY orders:"));
        assert!(report.contains("\tMSFT/ 50/ 2026-08-01 12:30:00"));
    }

    #[test]
    fn sell_sections_say_smallest() {
        let selections = vec![SideSelection {
            side: OrderSide::Sell,
            total: 2,
            top: vec![],
        }];
        let report = render_report(&[], &selections);
        assert!(report.contains("SELL orders number: 2"));
        assert!(report.contains("smallest quantity SELL orders:"));
    }
}
