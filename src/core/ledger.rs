//! Sales ledger - Append-only log of historical and live sale events.
//!
//! Queries are linear scans; the ledger is sized for tens to low thousands of products
//! over a few weeks of daily events.

use crate::{
    entities::SaleEvent,
    errors::{Error, Result},
};
use chrono::NaiveDate;
use tracing::trace;

/// Append-only list of sale events in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    events: Vec<SaleEvent>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends one sale event.
    ///
    /// # Errors
    /// Returns [`Error::InvalidQuantity`] if `qty` is zero or negative; nothing is appended.
    pub fn record(&mut self, product_id: i64, qty: i64, date: NaiveDate) -> Result<&SaleEvent> {
        if qty <= 0 {
            return Err(Error::InvalidQuantity { qty });
        }
        trace!("Ledger append: product {product_id} x{qty} on {date}");
        let index = self.events.len();
        self.events.push(SaleEvent {
            product_id,
            date,
            qty,
        });
        Ok(&self.events[index])
    }

    /// All events for one product.
    pub fn history(&self, product_id: i64) -> impl Iterator<Item = &SaleEvent> {
        self.events.iter().filter(move |e| e.product_id == product_id)
    }

    /// All events dated exactly `date`.
    pub fn on_date(&self, date: NaiveDate) -> impl Iterator<Item = &SaleEvent> {
        self.events.iter().filter(move |e| e.date == date)
    }

    /// Every event in insertion order.
    #[must_use]
    pub fn events(&self) -> &[SaleEvent] {
        &self.events
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_record_and_filter() -> Result<()> {
        let mut ledger = Ledger::new();
        ledger.record(1, 3, date(2026, 3, 1))?;
        ledger.record(2, 4, date(2026, 3, 1))?;
        ledger.record(1, 5, date(2026, 3, 2))?;

        let history: Vec<_> = ledger.history(1).map(|e| e.qty).collect();
        assert_eq!(history, vec![3, 5]);

        let day: Vec<_> = ledger.on_date(date(2026, 3, 1)).map(|e| e.product_id).collect();
        assert_eq!(day, vec![1, 2]);

        assert_eq!(ledger.on_date(date(2026, 3, 3)).count(), 0);
        assert_eq!(ledger.len(), 3);
        Ok(())
    }

    #[test]
    fn test_record_rejects_non_positive_quantity() {
        let mut ledger = Ledger::new();

        assert!(matches!(
            ledger.record(1, 0, date(2026, 3, 1)),
            Err(Error::InvalidQuantity { qty: 0 })
        ));
        assert!(matches!(
            ledger.record(1, -2, date(2026, 3, 1)),
            Err(Error::InvalidQuantity { qty: -2 })
        ));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_history_for_unknown_product_is_empty() -> Result<()> {
        let mut ledger = Ledger::new();
        ledger.record(1, 1, date(2026, 3, 1))?;
        assert_eq!(ledger.history(42).count(), 0);
        Ok(())
    }
}
