//! Entity module - Plain data models shared by the core and the presentation layer.
//! Products live in the catalog, sale events in the ledger.

pub mod product;
pub mod sale_event;

pub use product::{Product, ProductDraft, StockStatus};
pub use sale_event::SaleEvent;
