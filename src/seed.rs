//! Start-up data: the built-in branch catalog and synthetic sales history.
//!
//! History is drawn from an injected RNG so the same seed always yields the same ledger.

use crate::{
    config::SeedConfig,
    core::{catalog::Catalog, ledger::Ledger, store::Store},
    entities::Product,
    errors::Result,
};
use chrono::{Days, NaiveDate};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::info;

/// Days counted as "recent" by the spike and dip anomalies.
const ANOMALY_DAYS: u64 = 7;

#[allow(clippy::too_many_arguments)]
fn product(
    id: i64,
    sku: &str,
    name: &str,
    category: &str,
    department: &str,
    (stock, physical_stock): (i64, i64),
    price: f64,
    min_stock: i64,
    expiry: Option<NaiveDate>,
    supplier: &str,
) -> Product {
    Product {
        id,
        sku: sku.to_string(),
        barcode: format!("729000000{id}"),
        name: name.to_string(),
        category: category.to_string(),
        department: department.to_string(),
        supplier: supplier.to_string(),
        stock,
        physical_stock,
        price,
        min_stock,
        expiry,
    }
}

/// The built-in seven-product catalog of the Tel Aviv branch.
#[must_use]
#[rustfmt::skip]
pub fn default_products() -> Vec<Product> {
    let ymd = NaiveDate::from_ymd_opt;
    vec![
        product(1, "MLK-3PR", "Tnuva Milk 3%", "Dairy", "Fresh", (120, 115), 6.20, 30, ymd(2026, 3, 5), "Tnuva"),
        product(2, "BREAD-WL", "Whole Wheat Bread", "Bakery", "Bakery", (45, 44), 12.50, 15, ymd(2026, 2, 28), "Angel"),
        product(3, "DET-FK", "Finish Quantum Capsules", "Cleaning", "Household", (85, 82), 49.90, 20, None, "Reckitt"),
        product(4, "DIA-PMP", "Pampers Premium Size 4", "Baby", "Baby", (65, 65), 39.90, 10, None, "P&G"),
        product(5, "COF-TRS", "Strauss Turkish Coffee", "Beverages", "Grocery", (200, 198), 10.90, 50, ymd(2027, 1, 10), "Strauss"),
        product(6, "EGG-L12", "Large Eggs (12pk)", "Dairy", "Fresh", (12, 12), 13.90, 20, ymd(2026, 3, 10), "Tnuva"),
        product(7, "KTC-PPR", "Kitchen Paper Towels", "Household", "Household", (150, 145), 18.00, 40, None, "Sano"),
    ]
}

/// Appends synthetic daily sales for every catalog product.
///
/// For each product and each day from `history_days` ago up to `today` a base quantity
/// in `0..10` is drawn. In the last seven days the spike product draws from `25..40`
/// and the dip product from `0..3`. Days that draw zero are not recorded.
///
/// # Errors
/// Never fails in practice; ledger errors are propagated.
pub fn generate_mock_history<R: Rng>(
    catalog: &Catalog,
    ledger: &mut Ledger,
    today: NaiveDate,
    config: &SeedConfig,
    rng: &mut R,
) -> Result<()> {
    let before = ledger.len();
    for product in catalog.list_products() {
        for days_ago in (0..=u64::from(config.history_days)).rev() {
            let Some(date) = today.checked_sub_days(Days::new(days_ago)) else {
                continue;
            };

            let recent = days_ago < ANOMALY_DAYS;
            let qty: i64 = if recent && product.id == config.spike_product_id {
                rng.gen_range(25..40)
            } else if recent && product.id == config.dip_product_id {
                rng.gen_range(0..3)
            } else {
                rng.gen_range(0..10)
            };

            if qty > 0 {
                ledger.record(product.id, qty, date)?;
            }
        }
    }
    info!(
        "Generated {} mock sale events for {} products",
        ledger.len() - before,
        catalog.len()
    );
    Ok(())
}

/// Builds a store from `products` (the built-in catalog when empty) and fills its
/// ledger with mock history ending at `today`.
///
/// # Errors
/// Returns an error if the products contain duplicate ids.
pub fn seed_store(products: Vec<Product>, today: NaiveDate, config: &SeedConfig) -> Result<Store> {
    let products = if products.is_empty() {
        default_products()
    } else {
        products
    };
    let catalog = Catalog::from_products(products)?;
    info!("Catalog seeded with {} products", catalog.len());

    let mut ledger = Ledger::new();
    let mut rng = StdRng::seed_from_u64(config.rng_seed);
    generate_mock_history(&catalog, &mut ledger, today, config, &mut rng)?;

    Ok(Store::new(catalog, ledger))
}
