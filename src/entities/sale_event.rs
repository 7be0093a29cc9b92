//! Sale event entity - One immutable line of the sales ledger.
//!
//! Events carry a calendar day only; there is no time-of-day component.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A recorded sale of `qty` units of one product on one day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleEvent {
    /// Product sold; not required to resolve in the catalog
    pub product_id: i64,
    /// Calendar day of the sale
    pub date: NaiveDate,
    /// Units sold, always positive
    pub qty: i64,
}
