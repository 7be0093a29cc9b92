//! Text views - Renders core reports for the terminal.
//!
//! Each function takes data already computed by the core and returns a string;
//! nothing here touches the store.

use crate::{
    config::Operator,
    core::{
        report::{DailySalesSummary, DashboardReport, StockAudit, format_currency, format_growth},
        shrinkage::ShrinkageReport,
        trend::ProductTrend,
    },
    entities::Product,
};
use std::fmt::{self, Write};

/// Views the binary can print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum View {
    /// Store overview
    Dashboard,
    /// Shelf inventory
    Inventory,
    /// Trend pulse for every product
    Trends,
    /// Shrinkage and loss prevention
    Waste,
    /// Daily sales summary and stock audit
    Reports,
}

/// Header line naming the branch and the signed-in operator.
#[must_use]
pub fn render_header(branch: &str, operator: &Operator) -> String {
    format!("{branch} | {} ({})\n", operator.name, operator.role)
}

/// Store overview: the four stat cards and the trending list.
///
/// # Errors
/// Returns an error only if formatting into the buffer fails.
pub fn render_dashboard(report: &DashboardReport) -> Result<String, fmt::Error> {
    let stats = &report.stats;
    let mut out = String::new();
    writeln!(out, "{} - Store Overview", report.branch)?;
    writeln!(
        out,
        "Daily Sales (Estimated): {}",
        format_currency(stats.daily_sales.round())
    )?;
    writeln!(out, "Shelf Shortages: {} Items", stats.low_stock_count)?;
    match report.trending.first() {
        Some(top) => writeln!(
            out,
            "Top Trend Pulse: {} {}",
            format_growth(top.trend.growth),
            top.product.name
        )?,
        None => writeln!(out, "Top Trend Pulse: -")?,
    }
    writeln!(out, "Shrinkage Index: {:.1}%", stats.shrinkage_index)?;
    writeln!(out, "\nTrending Now")?;
    for item in &report.trending {
        writeln!(out, "{}", trend_row(item))?;
    }
    Ok(out)
}

/// Shelf inventory table with reorder flags.
///
/// # Errors
/// Returns an error only if formatting into the buffer fails.
pub fn render_inventory(products: &[Product]) -> Result<String, fmt::Error> {
    let mut out = String::from("Shelf Inventory Management\n");
    for p in products {
        writeln!(
            out,
            "{:<28} {:<12} {:>5} / {:<4} min  {:>9}  {}",
            p.name,
            p.barcode,
            p.stock,
            p.min_stock,
            format_currency(p.price),
            p.stock_status()
        )?;
    }
    Ok(out)
}

/// Every product's trend, best growth first.
///
/// # Errors
/// Returns an error only if formatting into the buffer fails.
pub fn render_trends(trends: &[ProductTrend]) -> Result<String, fmt::Error> {
    let mut out = String::from("Trend Pulse (last 7 days vs previous 7)\n");
    for item in trends {
        writeln!(
            out,
            "{}  Avg: {:.1}/day",
            trend_row(item),
            item.trend.current_avg
        )?;
    }
    Ok(out)
}

/// Loss prevention table.
///
/// # Errors
/// Returns an error only if formatting into the buffer fails.
pub fn render_waste(report: &ShrinkageReport) -> Result<String, fmt::Error> {
    let mut out = String::from("Shrinkage & Loss Prevention\n");
    writeln!(out, "Total Loss: {}", format_currency(report.total_loss))?;
    for line in &report.lines {
        writeln!(
            out,
            "{:<28} {:<10} {:>5} units  {:<14} {}",
            line.name,
            line.department,
            -line.gap,
            line.cause.as_str(),
            format_currency(line.impact)
        )?;
    }
    Ok(out)
}

/// Daily sales summary followed by the stock audit.
///
/// # Errors
/// Returns an error only if formatting into the buffer fails.
pub fn render_reports(
    summary: &DailySalesSummary,
    audit: &StockAudit,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Daily Sales Summary - {}", summary.date)?;
    for line in &summary.top_items {
        writeln!(
            out,
            "{:<28} {:>4}  {}",
            line.name,
            line.qty,
            format_currency(line.revenue)
        )?;
    }
    writeln!(
        out,
        "Total: {} units, {}",
        summary.total_units,
        format_currency(summary.total_revenue)
    )?;

    writeln!(out, "\nFull Stock Audit")?;
    for line in &audit.lines {
        writeln!(
            out,
            "{:<28} {:<10} {:>5}  {}",
            line.name,
            line.department,
            line.stock,
            format_currency(line.value)
        )?;
    }
    writeln!(out, "Inventory value: {}", format_currency(audit.total_value))?;
    Ok(out)
}

fn trend_row(item: &ProductTrend) -> String {
    format!(
        "{:<28} {:<10} {:>6}  {}",
        item.product.name,
        item.product.category,
        format_growth(item.trend.growth),
        item.trend.status
    )
}
