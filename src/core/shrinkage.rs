//! Loss prevention report - Per-product gaps between system and physical stock.

use crate::{
    core::{catalog::Catalog, stats},
    entities::Product,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Probable reason for a stock gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShrinkageCause {
    /// The product is past its expiry date
    Expiry,
    /// Anything else: theft or counting error
    TheftOrError,
}

impl ShrinkageCause {
    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expiry => "Expiry",
            Self::TheftOrError => "Theft / Error",
        }
    }
}

impl std::fmt::Display for ShrinkageCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One product whose system stock differs from its physical count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShrinkageLine {
    /// Product id
    pub product_id: i64,
    /// Product name
    pub name: String,
    /// Product department
    pub department: String,
    /// `stock - physical_stock`
    pub gap: i64,
    /// `gap * price`
    pub impact: f64,
    /// Probable cause
    pub cause: ShrinkageCause,
}

impl ShrinkageLine {
    fn from_product(product: &Product, now: DateTime<Utc>) -> Self {
        let cause = if product.is_expired(now) {
            ShrinkageCause::Expiry
        } else {
            ShrinkageCause::TheftOrError
        };
        Self {
            product_id: product.id,
            name: product.name.clone(),
            department: product.department.clone(),
            gap: product.shrinkage_gap(),
            impact: product.shrinkage_value(),
            cause,
        }
    }
}

/// The loss prevention view's data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShrinkageReport {
    /// Products with a non-zero gap, in catalog order
    pub lines: Vec<ShrinkageLine>,
    /// Total shrinkage value over the whole catalog
    pub total_loss: f64,
}

/// Builds the loss prevention report; expiry is judged against `now`.
#[must_use]
pub fn shrinkage_report(catalog: &Catalog, now: DateTime<Utc>) -> ShrinkageReport {
    let lines = catalog
        .list_products()
        .iter()
        .filter(|p| p.shrinkage_gap() != 0)
        .map(|p| ShrinkageLine::from_product(p, now))
        .collect();

    ShrinkageReport {
        lines,
        total_loss: stats::total_shrinkage_value(catalog),
    }
}
