//! Store - The catalog and ledger of one branch, owned together.
//!
//! A `Store` is built once at start-up and handed by reference to whatever needs it.
//! Mutations take `&mut self`, so one mutation is in flight at a time and every read
//! sees a consistent snapshot.

use crate::{
    core::{
        catalog::Catalog,
        ledger::Ledger,
        sale,
        stats::{self, StoreStats},
        trend::{self, Trend, TrendThresholds},
    },
    entities::{Product, ProductDraft, SaleEvent},
    errors::Result,
};
use chrono::{DateTime, NaiveDate, Utc};

/// Catalog plus sales ledger.
#[derive(Debug, Clone, Default)]
pub struct Store {
    catalog: Catalog,
    ledger: Ledger,
}

impl Store {
    /// Wraps an existing catalog and ledger.
    #[must_use]
    pub const fn new(catalog: Catalog, ledger: Ledger) -> Self {
        Self { catalog, ledger }
    }

    /// Read access to the catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read access to the ledger.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Adds a product from a form draft. See [`Catalog::add_product`].
    ///
    /// # Errors
    /// Returns an error if the draft fails validation.
    pub fn add_product(&mut self, draft: ProductDraft) -> Result<&Product> {
        self.catalog.add_product(draft)
    }

    /// Records a sale dated `today`. See [`sale::record_sale`].
    ///
    /// # Errors
    /// Returns an error if the quantity, product or stock check fails.
    pub fn record_sale(
        &mut self,
        product_id: i64,
        qty: i64,
        today: NaiveDate,
    ) -> Result<SaleEvent> {
        sale::record_sale(&mut self.catalog, &mut self.ledger, product_id, qty, today)
    }

    /// Records a sale dated with the current UTC day.
    ///
    /// # Errors
    /// Returns an error if the quantity, product or stock check fails.
    pub fn record_sale_now(&mut self, product_id: i64, qty: i64) -> Result<SaleEvent> {
        self.record_sale(product_id, qty, Utc::now().date_naive())
    }

    /// Trend of one product at `now`.
    #[must_use]
    pub fn classify(
        &self,
        product_id: i64,
        now: DateTime<Utc>,
        thresholds: &TrendThresholds,
    ) -> Trend {
        trend::classify_with(&self.ledger, product_id, now, thresholds)
    }

    /// Dashboard metrics at `now`.
    #[must_use]
    pub fn compute_store_stats(&self, now: DateTime<Utc>) -> StoreStats {
        stats::compute_store_stats(&self.catalog, &self.ledger, now)
    }
}
