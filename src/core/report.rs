//! Report generation business logic.
//!
//! This module assembles the dashboard, the daily sales summary and the stock audit,
//! and provides the small formatting helpers the text views share. All functions are
//! read-only over the store and return structured data for the presentation layer.

use crate::core::{
    stats::StoreStats,
    store::Store,
    trend::{self, ProductTrend, TrendThresholds},
};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;

/// Number of trending products shown on the dashboard.
pub const DASHBOARD_TRENDING: usize = 3;

/// Number of products listed in the daily sales summary.
pub const SUMMARY_TOP_ITEMS: usize = 10;

/// Everything the dashboard view shows.
#[derive(Debug, Clone)]
pub struct DashboardReport {
    /// Active branch name
    pub branch: String,
    /// Store-wide metrics
    pub stats: StoreStats,
    /// Fastest-growing products, best first
    pub trending: Vec<ProductTrend>,
}

/// Revenue of one product on one day.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesLine {
    /// Product id
    pub product_id: i64,
    /// Product name, or a placeholder when the id does not resolve
    pub name: String,
    /// Units sold that day
    pub qty: i64,
    /// `qty * price`
    pub revenue: f64,
}

/// Daily sales summary: the day's best sellers by revenue.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySalesSummary {
    /// Reported day
    pub date: NaiveDate,
    /// Top products by revenue, best first
    pub top_items: Vec<SalesLine>,
    /// Revenue of every sale that day
    pub total_revenue: f64,
    /// Units sold that day
    pub total_units: i64,
}

/// Valuation of one product's system stock.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditLine {
    /// Product id
    pub product_id: i64,
    /// Product name
    pub name: String,
    /// Product department
    pub department: String,
    /// System stock
    pub stock: i64,
    /// `stock * price`
    pub value: f64,
}

/// Full stock audit.
#[derive(Debug, Clone, PartialEq)]
pub struct StockAudit {
    /// One line per product in catalog order
    pub lines: Vec<AuditLine>,
    /// Sum of all line values
    pub total_value: f64,
}

/// Generates the dashboard for `branch` at `now`.
#[must_use]
pub fn generate_dashboard(
    store: &Store,
    branch: &str,
    now: DateTime<Utc>,
    thresholds: &TrendThresholds,
) -> DashboardReport {
    let mut trending = trend::rank_trends(store.catalog(), store.ledger(), now, thresholds);
    trending.truncate(DASHBOARD_TRENDING);

    DashboardReport {
        branch: branch.to_string(),
        stats: store.compute_store_stats(now),
        trending,
    }
}

/// Summarises the sales of `date`, grouping events per product.
///
/// Events for ids missing from the catalog count as zero revenue, as in the daily
/// sales metric.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn daily_sales_summary(store: &Store, date: NaiveDate) -> DailySalesSummary {
    let mut units: BTreeMap<i64, i64> = BTreeMap::new();
    for event in store.ledger().on_date(date) {
        *units.entry(event.product_id).or_default() += event.qty;
    }

    let mut lines: Vec<SalesLine> = units
        .into_iter()
        .map(|(product_id, qty)| {
            let product = store.catalog().find_by_id(product_id).ok();
            SalesLine {
                product_id,
                name: product.map_or_else(|| format!("Unknown #{product_id}"), |p| p.name.clone()),
                qty,
                revenue: product.map_or(0.0, |p| qty as f64 * p.price),
            }
        })
        .collect();

    let total_revenue = lines.iter().map(|l| l.revenue).sum();
    let total_units = lines.iter().map(|l| l.qty).sum();

    lines.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    lines.truncate(SUMMARY_TOP_ITEMS);

    DailySalesSummary {
        date,
        top_items: lines,
        total_revenue,
        total_units,
    }
}

/// Values every product's system stock at its current price.
#[must_use]
pub fn stock_audit(store: &Store) -> StockAudit {
    let lines: Vec<AuditLine> = store
        .catalog()
        .list_products()
        .iter()
        .map(|p| AuditLine {
            product_id: p.id,
            name: p.name.clone(),
            department: p.department.clone(),
            stock: p.stock,
            value: p.inventory_value(),
        })
        .collect();
    let total_value = lines.iter().map(|l| l.value).sum();

    StockAudit { lines, total_value }
}

/// Formats a currency amount like "₪1234.50" or "-₪3.00".
#[must_use]
pub fn format_currency(amount: f64) -> String {
    if amount < 0.0 {
        format!("-₪{:.2}", amount.abs())
    } else {
        format!("₪{amount:.2}")
    }
}

/// Formats a growth percentage with an explicit sign for gains: "+60%", "-20%", "0%".
#[must_use]
pub fn format_growth(growth: i64) -> String {
    if growth > 0 {
        format!("+{growth}%")
    } else {
        format!("{growth}%")
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::trend::TrendStatus;
    use crate::errors::Result;
    use crate::test_utils::{date, days_before, draft, noon, setup_store};

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(6.2), "₪6.20");
        assert_eq!(format_currency(0.0), "₪0.00");
        assert_eq!(format_currency(-12.345), "-₪12.35");
    }

    #[test]
    fn test_format_growth() {
        assert_eq!(format_growth(60), "+60%");
        assert_eq!(format_growth(-20), "-20%");
        assert_eq!(format_growth(0), "0%");
    }

    #[test]
    fn test_generate_dashboard_keeps_top_three() -> Result<()> {
        let mut store = setup_store()?;
        let now = noon(2026, 3, 20);
        store.add_product(draft("Extra", "EX", "Grocery", 10, 1.0))?;
        store.record_sale(2, 7, days_before(now, 1))?;

        let report = generate_dashboard(&store, "Haifa", now, &TrendThresholds::default());

        assert_eq!(report.branch, "Haifa");
        assert_eq!(report.trending.len(), DASHBOARD_TRENDING);
        assert_eq!(report.trending[0].product.id, 2);
        assert_eq!(report.trending[0].trend.status, TrendStatus::Hot);
        Ok(())
    }

    #[test]
    fn test_daily_sales_summary_groups_per_product() -> Result<()> {
        let mut store = setup_store()?;
        let today = date(2026, 3, 20);
        store.record_sale(1, 2, today)?;
        store.record_sale(1, 3, today)?;
        store.record_sale(3, 1, today)?;
        store.record_sale(2, 4, date(2026, 3, 19))?;

        let summary = daily_sales_summary(&store, today);

        assert_eq!(summary.top_items.len(), 2);
        assert_eq!(summary.top_items[0].product_id, 1);
        assert_eq!(summary.top_items[0].qty, 5);
        assert_eq!(summary.top_items[0].revenue, 20.0);
        assert_eq!(summary.total_units, 6);
        assert_eq!(summary.total_revenue, 24.0);
        Ok(())
    }

    #[test]
    fn test_daily_sales_summary_truncates_to_top_items() -> Result<()> {
        let mut store = setup_store()?;
        let now = noon(2026, 3, 20);
        for i in 0..12 {
            let id = store.add_product(draft(&format!("P{i}"), "P", "Grocery", 100, 1.0))?.id;
            store.record_sale(id, 1, days_before(now, 0))?;
        }

        let summary = daily_sales_summary(&store, days_before(now, 0));
        assert_eq!(summary.top_items.len(), SUMMARY_TOP_ITEMS);
        assert_eq!(summary.total_units, 12);
        Ok(())
    }

    #[test]
    fn test_stock_audit_totals() -> Result<()> {
        let store = setup_store()?;
        let audit = stock_audit(&store);

        assert_eq!(audit.lines.len(), store.catalog().len());
        assert_eq!(audit.total_value, crate::core::stats::inventory_value(store.catalog()));
        Ok(())
    }
}
