//! Catalog store - Holds the product set and its stock and price attributes.
//!
//! Products are created at start-up (seed catalog) or through [`Catalog::add_product`].
//! Nothing is ever removed. The only in-place mutation is the stock decrement performed
//! by the sale recorder, which goes through [`Catalog::find_by_id_mut`].

use crate::{
    entities::{Product, ProductDraft},
    errors::{Error, Result},
};
use std::collections::HashSet;
use tracing::{debug, info};

/// Reorder threshold given to products created from a draft.
pub const DEFAULT_MIN_STOCK: i64 = 10;

/// Supplier recorded for products created from a draft.
pub const NEW_SUPPLIER: &str = "New Supplier";

/// In-memory product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Builds a catalog from pre-assigned products, keeping their order.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateProductId`] if two products share an id.
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(Error::DuplicateProductId { id: product.id });
            }
        }
        debug!("Catalog built with {} products", products.len());
        Ok(Self { products })
    }

    /// All products in insertion order.
    #[must_use]
    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by id.
    ///
    /// # Errors
    /// Returns [`Error::ProductNotFound`] if no product carries `id`.
    pub fn find_by_id(&self, id: i64) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(Error::ProductNotFound { id })
    }

    /// Mutable lookup, reserved for the sale recorder.
    pub(crate) fn find_by_id_mut(&mut self, id: i64) -> Result<&mut Product> {
        self.products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(Error::ProductNotFound { id })
    }

    /// Id the next added product will receive: one past the largest id in use.
    #[must_use]
    pub fn next_id(&self) -> i64 {
        self.products.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    /// Adds a product from a form draft.
    ///
    /// The new product gets the next free id, uses the SKU as barcode and the department
    /// as category, starts with `physical_stock == stock`, a reorder threshold of
    /// [`DEFAULT_MIN_STOCK`] and [`NEW_SUPPLIER`] as supplier. Form values are stored
    /// as entered; stock is not checked.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The name is empty or whitespace-only
    /// - The price is negative or not finite (NaN, infinity)
    pub fn add_product(&mut self, draft: ProductDraft) -> Result<&Product> {
        if draft.name.trim().is_empty() {
            return Err(Error::InvalidProduct {
                message: "Product name cannot be empty".to_string(),
            });
        }
        if !draft.price.is_finite() || draft.price < 0.0 {
            return Err(Error::InvalidPrice { price: draft.price });
        }

        let product = Product {
            id: self.next_id(),
            barcode: draft.sku.clone(),
            sku: draft.sku,
            name: draft.name,
            category: draft.department.clone(),
            department: draft.department,
            supplier: NEW_SUPPLIER.to_string(),
            stock: draft.stock,
            physical_stock: draft.stock,
            price: draft.price,
            min_stock: DEFAULT_MIN_STOCK,
            expiry: None,
        };
        info!("Adding product {} ({}) to catalog", product.id, product.name);

        let index = self.products.len();
        self.products.push(product);
        Ok(&self.products[index])
    }
}
