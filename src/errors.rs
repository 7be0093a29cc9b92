//! Unified error type for the store core, configuration and binary.
//!
//! Every core error is a rejected operation: nothing here is fatal to the process
//! and no variant is produced after a partial mutation.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// No product carries the requested id.
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The id that failed to resolve
        id: i64,
    },

    /// A sale asked for more units than the system stock holds.
    #[error("Insufficient stock for product {id}: {available} available, {requested} requested")]
    InsufficientStock {
        /// Product the sale targeted
        id: i64,
        /// Current system stock
        available: i64,
        /// Quantity the caller asked for
        requested: i64,
    },

    /// Quantity was zero or negative.
    #[error("Invalid quantity: {qty}")]
    InvalidQuantity {
        /// The rejected quantity
        qty: i64,
    },

    /// Price was negative or not a finite number.
    #[error("Invalid price: {price}")]
    InvalidPrice {
        /// The rejected price
        price: f64,
    },

    /// A product draft failed validation.
    #[error("Invalid product: {message}")]
    InvalidProduct {
        /// What was wrong with the draft
        message: String,
    },

    /// Two products in a seed catalog share an id.
    #[error("Duplicate product id: {id}")]
    DuplicateProductId {
        /// The colliding id
        id: i64,
    },

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable cause
        message: String,
    },

    /// A view could not be rendered.
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    /// An environment variable is set but could not be read.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_stock_message() {
        let err = Error::InsufficientStock {
            id: 6,
            available: 12,
            requested: 20,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for product 6: 12 available, 20 requested"
        );
    }

    #[test]
    fn test_env_var_error_converts() {
        let err: Error = std::env::VarError::NotPresent.into();
        assert!(matches!(err, Error::EnvVar(_)));
    }
}
