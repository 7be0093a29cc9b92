//! Product entity - A catalog item with system stock, last physical count and price.
//!
//! `stock` is the system-of-record quantity and only ever goes down through a recorded
//! sale. `physical_stock` is the last shelf count; the gap between the two is the
//! shrinkage signal, not an error.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalog product model
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, stable for the lifetime of the process
    pub id: i64,
    /// Stock keeping unit (business-unique, not enforced)
    pub sku: String,
    /// Barcode (business-unique, not enforced)
    pub barcode: String,
    /// Display name (e.g., "Tnuva Milk 3%")
    pub name: String,
    /// Product category (e.g., "Dairy")
    pub category: String,
    /// Store department (e.g., "Fresh")
    pub department: String,
    /// Supplier name
    pub supplier: String,
    /// System stock quantity
    pub stock: i64,
    /// Quantity found at the last physical count
    pub physical_stock: i64,
    /// Unit price
    pub price: f64,
    /// Reorder threshold
    pub min_stock: i64,
    /// Optional expiry date
    #[serde(default)]
    pub expiry: Option<NaiveDate>,
}

/// Reorder flag shown next to each product in the inventory view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    /// At or below the reorder threshold
    Reorder,
    /// Above the reorder threshold
    Healthy,
}

impl StockStatus {
    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reorder => "Reorder",
            Self::Healthy => "Healthy",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Product {
    /// True when system stock has reached the reorder threshold.
    #[must_use]
    pub const fn needs_reorder(&self) -> bool {
        self.stock <= self.min_stock
    }

    /// Reorder flag for this product.
    #[must_use]
    pub const fn stock_status(&self) -> StockStatus {
        if self.needs_reorder() {
            StockStatus::Reorder
        } else {
            StockStatus::Healthy
        }
    }

    /// Units recorded by the system but missing from the shelf.
    /// Negative when the shelf holds more than the system thinks.
    #[must_use]
    pub const fn shrinkage_gap(&self) -> i64 {
        self.stock - self.physical_stock
    }

    /// Value of the gap at the current unit price.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn shrinkage_value(&self) -> f64 {
        self.shrinkage_gap() as f64 * self.price
    }

    /// Value of the system stock at the current unit price.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn inventory_value(&self) -> f64 {
        self.stock as f64 * self.price
    }

    /// True when the expiry date (taken at midnight UTC) lies before `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry
            .is_some_and(|date| date.and_time(NaiveTime::MIN).and_utc() < now)
    }
}

/// Fields supplied by the "add product" form.
///
/// Everything else (id, barcode, category, supplier, reorder threshold, physical count)
/// is derived by [`crate::core::catalog::Catalog::add_product`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Display name
    pub name: String,
    /// SKU, also used as the barcode
    pub sku: String,
    /// Department, also used as the category
    pub department: String,
    /// Initial system stock
    pub stock: i64,
    /// Unit price
    pub price: f64,
}
