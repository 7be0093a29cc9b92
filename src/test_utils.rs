//! Shared test utilities for `store-pulse`.
//!
//! This module provides fixtures for building products, stores and ledgers, plus
//! pinned reference instants so time-dependent logic is deterministic.

#![allow(clippy::unwrap_used)]

use crate::{
    core::{catalog::Catalog, ledger::Ledger, store::Store},
    entities::{Product, ProductDraft},
    errors::Result,
};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::ops::Range;

/// Calendar day literal.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Noon UTC on the given day. Window boundaries never fall on whole days at noon.
pub fn noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    date(year, month, day).and_hms_opt(12, 0, 0).unwrap().and_utc()
}

/// The calendar day `days` before `now` (negative for days after).
pub fn days_before(now: DateTime<Utc>, days: i64) -> NaiveDate {
    now.date_naive() - Duration::days(days)
}

/// Creates a test product with sensible defaults.
///
/// # Defaults
/// * `sku`/`barcode`: `"SKU-{id}"`
/// * `name`: `"Product {id}"`
/// * `category`/`department`: `"Grocery"`
/// * `min_stock`: 5
/// * `expiry`: None
pub fn test_product(id: i64, stock: i64, physical_stock: i64, price: f64) -> Product {
    Product {
        id,
        sku: format!("SKU-{id}"),
        barcode: format!("SKU-{id}"),
        name: format!("Product {id}"),
        category: "Grocery".to_string(),
        department: "Grocery".to_string(),
        supplier: "Test Supplier".to_string(),
        stock,
        physical_stock,
        price,
        min_stock: 5,
        expiry: None,
    }
}

/// Creates an "add product" draft.
pub fn draft(name: &str, sku: &str, department: &str, stock: i64, price: f64) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        sku: sku.to_string(),
        department: department.to_string(),
        stock,
        price,
    }
}

/// Records `qty` units per day for each day offset in `days` before `now`.
pub fn record_daily(
    ledger: &mut Ledger,
    product_id: i64,
    now: DateTime<Utc>,
    days: Range<i64>,
    qty: i64,
) -> Result<()> {
    for offset in days {
        ledger.record(product_id, qty, days_before(now, offset))?;
    }
    Ok(())
}

/// Sets up a store with three products (ids 1-3, 50 in stock, price 4.0) and an
/// empty ledger.
pub fn setup_store() -> Result<Store> {
    let catalog = Catalog::from_products(vec![
        test_product(1, 50, 50, 4.0),
        test_product(2, 50, 50, 4.0),
        test_product(3, 50, 50, 4.0),
    ])?;
    Ok(Store::new(catalog, Ledger::new()))
}
