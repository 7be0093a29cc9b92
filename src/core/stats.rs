//! Stats aggregator - Store-wide metrics derived from the catalog and the ledger.
//!
//! Everything is recomputed on every call; nothing is cached.

use crate::core::{catalog::Catalog, ledger::Ledger};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Store-wide dashboard metrics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreStats {
    /// Sum of `stock * price`, never below 1
    pub total_inventory_value: f64,
    /// Products at or below their reorder threshold
    pub low_stock_count: usize,
    /// Revenue of the reference day
    pub daily_sales: f64,
    /// Sum of `(stock - physical_stock) * price`, may be negative
    pub total_shrinkage_value: f64,
    /// Shrinkage as a percentage of inventory value, one decimal
    pub shrinkage_index: f64,
}

/// Sum of `stock * price` over all products, without any floor.
#[must_use]
pub fn inventory_value(catalog: &Catalog) -> f64 {
    catalog
        .list_products()
        .iter()
        .map(crate::entities::Product::inventory_value)
        .sum()
}

/// Inventory value used as a ratio denominator: never below 1.
#[must_use]
pub fn total_inventory_value(catalog: &Catalog) -> f64 {
    inventory_value(catalog).max(1.0)
}

/// Products whose stock is at or below their reorder threshold.
#[must_use]
pub fn low_stock_count(catalog: &Catalog) -> usize {
    catalog
        .list_products()
        .iter()
        .filter(|p| p.needs_reorder())
        .count()
}

/// Revenue of `date`: each event's `qty * price`, zero for unknown products.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn daily_sales(catalog: &Catalog, ledger: &Ledger, date: NaiveDate) -> f64 {
    ledger
        .on_date(date)
        .map(|event| {
            catalog
                .find_by_id(event.product_id)
                .map_or(0.0, |p| event.qty as f64 * p.price)
        })
        .sum()
}

/// Sum of `(stock - physical_stock) * price`. Not clamped.
#[must_use]
pub fn total_shrinkage_value(catalog: &Catalog) -> f64 {
    catalog
        .list_products()
        .iter()
        .map(crate::entities::Product::shrinkage_value)
        .sum()
}

/// Shrinkage value as a percentage of inventory value, rounded to one decimal.
#[must_use]
pub fn shrinkage_index(catalog: &Catalog) -> f64 {
    round_one_decimal(total_shrinkage_value(catalog) / total_inventory_value(catalog) * 100.0)
}

/// Computes every dashboard metric, using the calendar day of `now` for daily sales.
#[must_use]
pub fn compute_store_stats(catalog: &Catalog, ledger: &Ledger, now: DateTime<Utc>) -> StoreStats {
    let total_inventory_value = total_inventory_value(catalog);
    let total_shrinkage_value = total_shrinkage_value(catalog);

    StoreStats {
        total_inventory_value,
        low_stock_count: low_stock_count(catalog),
        daily_sales: daily_sales(catalog, ledger, now.date_naive()),
        total_shrinkage_value,
        shrinkage_index: round_one_decimal(total_shrinkage_value / total_inventory_value * 100.0),
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
