//! Commerce error types.

use thiserror::Error;

/// Errors that can occur while building or browsing the catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Slug is empty or not usable as a single URL path segment.
    #[error("Invalid product slug: {0:?}")]
    InvalidSlug(String),

    /// No product with this slug.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Size name does not belong to the product.
    #[error("Size {size:?} not found for product {product}")]
    SizeNotFound { product: String, size: String },

    /// Product defined without any size tier.
    #[error("Product {0} has no sizes")]
    EmptySizes(String),

    /// Two products share a slug.
    #[error("Duplicate product slug: {0}")]
    DuplicateSlug(String),

    /// Two sizes of one product share a name.
    #[error("Duplicate size {size:?} in product {product}")]
    DuplicateSize { product: String, size: String },

    /// Featured size names a size the product does not have.
    #[error("Featured size {size:?} is not a size of product {product}")]
    UnknownFeaturedSize { product: String, size: String },

    /// Negative or non-finite monetary amount.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Currency code that is not three ASCII letters.
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrency(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Malformed catalog configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}
