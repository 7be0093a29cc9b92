//! Sale recorder - Validates a point-of-sale entry and applies it.
//!
//! A sale is the only operation that lowers system stock. Validation happens in full
//! before anything is touched, so a rejected sale leaves both the catalog and the
//! ledger exactly as they were.

use crate::{
    core::{catalog::Catalog, ledger::Ledger},
    entities::SaleEvent,
    errors::{Error, Result},
};
use chrono::NaiveDate;
use tracing::{info, warn};

/// Records a sale of `qty` units of `product_id` dated `today`.
///
/// On success the product's stock drops by `qty` and one event is appended to the ledger.
///
/// # Errors
/// Returns an error, without mutating anything, if:
/// - `qty` is zero or negative ([`Error::InvalidQuantity`], checked before the lookup)
/// - the product does not exist ([`Error::ProductNotFound`])
/// - the product holds fewer than `qty` units ([`Error::InsufficientStock`])
pub fn record_sale(
    catalog: &mut Catalog,
    ledger: &mut Ledger,
    product_id: i64,
    qty: i64,
    today: NaiveDate,
) -> Result<SaleEvent> {
    if qty <= 0 {
        warn!("Rejected sale of product {product_id}: invalid quantity {qty}");
        return Err(Error::InvalidQuantity { qty });
    }

    let product = catalog
        .find_by_id_mut(product_id)
        .inspect_err(|_| warn!("Rejected sale: product {product_id} not found"))?;

    if product.stock < qty {
        warn!(
            "Rejected sale of product {product_id}: {} in stock, {qty} requested",
            product.stock
        );
        return Err(Error::InsufficientStock {
            id: product_id,
            available: product.stock,
            requested: qty,
        });
    }

    // qty is already known positive, so the append cannot fail
    let event = ledger.record(product_id, qty, today)?.clone();
    product.stock -= qty;

    info!(
        "Recorded sale: {} x{qty}, {} left in stock",
        product.name, product.stock
    );
    Ok(event)
}
