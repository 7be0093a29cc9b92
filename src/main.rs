use chrono::Utc;
use clap::Parser;
use dotenvy::dotenv;
use store_pulse::{
    config,
    core::{report, shrinkage, trend},
    entities::ProductDraft,
    errors::{Error, Result},
    seed,
    views::{self, View},
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Retail store dashboard: seeds the branch, applies the given actions, prints a view.
#[derive(Debug, Parser)]
#[command(name = "store-pulse", version)]
struct Cli {
    /// View to print
    #[arg(value_enum, default_value = "dashboard")]
    view: View,

    /// Store configuration file; defaults to $STORE_CONFIG, then store.toml
    #[arg(long)]
    config: Option<String>,

    /// Override the mock history RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Register a sale before rendering, as PRODUCT_ID:QTY (repeatable)
    #[arg(long = "sell", value_name = "ID:QTY", value_parser = parse_sale)]
    sales: Vec<(i64, i64)>,

    /// Add a product before rendering, as NAME,SKU,DEPARTMENT,STOCK,PRICE (repeatable)
    #[arg(long = "add", value_name = "PRODUCT", value_parser = parse_draft)]
    additions: Vec<ProductDraft>,
}

fn parse_sale(raw: &str) -> std::result::Result<(i64, i64), String> {
    let (id, qty) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected ID:QTY, got '{raw}'"))?;
    let id = id.trim().parse().map_err(|e| format!("bad product id '{id}': {e}"))?;
    let qty = qty.trim().parse().map_err(|e| format!("bad quantity '{qty}': {e}"))?;
    Ok((id, qty))
}

fn parse_draft(raw: &str) -> std::result::Result<ProductDraft, String> {
    let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
    let [name, sku, department, stock, price] = fields.as_slice() else {
        return Err(format!("expected NAME,SKU,DEPARTMENT,STOCK,PRICE, got '{raw}'"));
    };
    Ok(ProductDraft {
        name: (*name).to_string(),
        sku: (*sku).to_string(),
        department: (*department).to_string(),
        stock: stock.parse().map_err(|e| format!("bad stock '{stock}': {e}"))?,
        price: price.parse().map_err(|e| format!("bad price '{price}': {e}"))?,
    })
}

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    let cli = Cli::parse();

    // 3. Load the store configuration
    let mut app_config = match &cli.config {
        Some(path) => config::load_config_or_default(path),
        None => config::load_app_configuration(),
    }
    .inspect_err(|e| error!("Failed to load store configuration: {e}"))?;
    if let Some(seed) = cli.seed {
        app_config.seed.rng_seed = seed;
    }

    // 4. Seed the store once; every later step works on this instance
    let now = Utc::now();
    let mut store = seed::seed_store(
        std::mem::take(&mut app_config.products),
        now.date_naive(),
        &app_config.seed,
    )
    .inspect_err(|e| error!("Failed to seed store: {e}"))?;

    // 5. Apply user actions; a rejected action is reported, not fatal
    for draft in cli.additions {
        match store.add_product(draft) {
            Ok(product) => info!("Added {} as product {}", product.name, product.id),
            Err(e) => warn!("Product not added: {e}"),
        }
    }
    for (product_id, qty) in cli.sales {
        match store.record_sale(product_id, qty, now.date_naive()) {
            Ok(_) => {}
            Err(e @ (Error::InsufficientStock { .. }
            | Error::ProductNotFound { .. }
            | Error::InvalidQuantity { .. })) => warn!("Sale not registered: {e}"),
            Err(e) => return Err(e),
        }
    }

    // 6. Render
    let operator = config::current_operator();
    let thresholds = &app_config.trend;
    let body = match cli.view {
        View::Dashboard => views::render_dashboard(&report::generate_dashboard(
            &store,
            &app_config.branch,
            now,
            thresholds,
        )),
        View::Inventory => views::render_inventory(store.catalog().list_products()),
        View::Trends => views::render_trends(&trend::rank_trends(
            store.catalog(),
            store.ledger(),
            now,
            thresholds,
        )),
        View::Waste => views::render_waste(&shrinkage::shrinkage_report(store.catalog(), now)),
        View::Reports => views::render_reports(
            &report::daily_sales_summary(&store, now.date_naive()),
            &report::stock_audit(&store),
        ),
    }?;

    print!("{}", views::render_header(&app_config.branch, &operator));
    println!("{body}");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_sale() {
        assert_eq!(parse_sale("3:2").unwrap(), (3, 2));
        assert_eq!(parse_sale(" 3 : 2 ").unwrap(), (3, 2));
        assert!(parse_sale("3").is_err());
        assert!(parse_sale("x:2").is_err());
    }

    #[test]
    fn test_parse_draft() {
        let draft = parse_draft("Hummus, HUM-1, Fresh, 40, 8.9").unwrap();
        assert_eq!(draft.name, "Hummus");
        assert_eq!(draft.department, "Fresh");
        assert_eq!(draft.stock, 40);
        assert_eq!(draft.price, 8.9);
        assert!(parse_draft("Hummus,HUM-1").is_err());
    }

    #[test]
    fn test_cli_parses_actions() {
        let cli = Cli::try_parse_from([
            "store-pulse",
            "trends",
            "--sell",
            "1:2",
            "--sell",
            "3:1",
        ])
        .unwrap();
        assert_eq!(cli.view, View::Trends);
        assert_eq!(cli.sales, vec![(1, 2), (3, 1)]);
        assert!(cli.config.is_none());
    }
}
