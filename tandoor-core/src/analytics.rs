//! Analytics engine - pure read-only computations over the order ledger
//!
//! Every function takes a snapshot of the ledger's orders and derives its
//! result on each call; nothing here stores state or mutates an order.
//! An empty ledger yields all-zero / empty results.

use crate::config::AnalyticsConfig;
use crate::utils::time;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::order::{Order, TableSalesSummary, UNKNOWN_TABLE};

// ============================================================================
// Response Types
// ============================================================================

/// Revenue overview for the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenueStats {
    /// Orders placed today (business timezone)
    pub orders_today: u32,
    /// Revenue from today's orders
    pub daily_revenue: Decimal,
    /// Revenue over the whole ledger
    pub historical_revenue: Decimal,
    /// Historical revenue × configured cost ratio (assumed, not measured)
    pub estimated_cost: Decimal,
    /// Historical revenue − estimated cost
    pub estimated_profit: Decimal,
    /// Profit as a percentage of historical revenue, one decimal place;
    /// 0 when there is no revenue
    pub profit_margin_percent: Decimal,
}

// ============================================================================
// Computations
// ============================================================================

/// Whether the order was placed today in the given business timezone.
pub fn is_today(order: &Order, tz: Tz) -> bool {
    time::business_date(order.created_at, tz) == time::today(tz)
}

/// Sum of totals over today's orders.
pub fn daily_revenue(orders: &[Order], tz: Tz) -> Decimal {
    orders
        .iter()
        .filter(|o| is_today(o, tz))
        .map(|o| o.total)
        .sum()
}

/// Sum of totals over all orders.
pub fn historical_revenue(orders: &[Order]) -> Decimal {
    orders.iter().map(|o| o.total).sum()
}

/// Full revenue overview in one pass over the ledger.
pub fn revenue_stats(orders: &[Order], config: &AnalyticsConfig) -> RevenueStats {
    let orders_today = orders
        .iter()
        .filter(|o| is_today(o, config.timezone))
        .count() as u32;
    let daily = daily_revenue(orders, config.timezone);
    let historical = historical_revenue(orders);
    let cost = historical * config.cost_ratio;
    let profit = historical - cost;
    // Guard the empty-ledger / zero-revenue case before dividing
    let margin = if historical > Decimal::ZERO {
        (profit / historical * Decimal::ONE_HUNDRED).round_dp(1)
    } else {
        Decimal::ZERO
    };

    RevenueStats {
        orders_today,
        daily_revenue: daily,
        historical_revenue: historical,
        estimated_cost: cost,
        estimated_profit: profit,
        profit_margin_percent: margin,
    }
}

/// Per-table sales ranking, highest total first.
///
/// Orders without a table identifier fall into the `UNKNOWN_TABLE` bucket.
/// Ties keep first-encountered order, so the result is deterministic for a
/// given ledger.
pub fn table_sales_summary(orders: &[Order]) -> Vec<TableSalesSummary> {
    let mut summaries: Vec<TableSalesSummary> = Vec::new();
    for order in orders {
        let table = order.table.as_deref().unwrap_or(UNKNOWN_TABLE);
        match summaries.iter_mut().find(|s| s.table == table) {
            Some(summary) => {
                summary.order_count += 1;
                summary.total_sales += order.total;
            }
            None => summaries.push(TableSalesSummary {
                table: table.to_string(),
                order_count: 1,
                total_sales: order.total,
            }),
        }
    }
    summaries.sort_by(|a, b| b.total_sales.cmp(&a.total_sales));
    summaries
}
