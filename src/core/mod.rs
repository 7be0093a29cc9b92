//! Core business logic - framework-agnostic catalog, ledger, sales and analytics.
//!
//! Nothing in here reads the clock except [`store::Store::record_sale_now`]; every
//! time-dependent computation takes its reference instant as a parameter.

/// Product catalog
pub mod catalog;
/// Append-only sales ledger
pub mod ledger;
/// Dashboard, sales summary and stock audit reports
pub mod report;
/// Point-of-sale recording
pub mod sale;
/// Loss prevention report
pub mod shrinkage;
/// Store-wide metrics
pub mod stats;
/// Catalog and ledger owned together
pub mod store;
/// Sales momentum classification
pub mod trend;
