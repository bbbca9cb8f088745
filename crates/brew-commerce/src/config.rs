//! Catalog configuration documents.
//!
//! The catalog is data, not code: it is described in TOML (or JSON) and
//! turned into a validated [`Catalog`](crate::catalog::Catalog) once at
//! startup.
//!
//! ```toml
//! currency = "USD"
//!
//! [[products]]
//! slug = "brown-sugar"
//! title = "Brown Sugar"
//! thumbnail = "products/brow-sugar.png"
//! featured_size = "Medium"
//!
//! [[products.sizes]]
//! name = "Medium"
//! price = 24.99
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::money::Currency;

/// A whole catalog document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Currency every price in the document is expressed in.
    #[serde(default)]
    pub currency: Currency,

    /// Products in display order.
    #[serde(default)]
    pub products: Vec<ProductConfig>,
}

/// One product entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductConfig {
    pub slug: String,
    pub title: String,
    pub thumbnail: String,

    #[serde(default)]
    pub description: String,

    /// Name of the size shown on list cards and selected first on the
    /// detail page. Defaults to the second size, or the first when there
    /// is only one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_size: Option<String>,

    #[serde(default)]
    pub sizes: Vec<SizeConfig>,
}

/// One size tier of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeConfig {
    pub name: String,
    /// Decimal price in the catalog currency (e.g. `24.99`).
    pub price: f64,
}

impl CatalogConfig {
    /// Parse a TOML catalog document.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a JSON catalog document.
    pub fn from_json_str(content: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a catalog document from disk. Files ending in `.json` are read
    /// as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CommerceError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
currency = "EUR"

[[products]]
slug = "flat-white"
title = "Flat White"
thumbnail = "products/flat-white.png"

[[products.sizes]]
name = "Regular"
price = 3.5
"#;

    #[test]
    fn test_parse_toml() {
        let config = CatalogConfig::from_toml_str(DOC).unwrap();
        assert_eq!(config.currency, Currency::EUR);
        assert_eq!(config.products.len(), 1);

        let product = &config.products[0];
        assert_eq!(product.slug, "flat-white");
        assert_eq!(product.description, "");
        assert_eq!(product.featured_size, None);
        assert_eq!(product.sizes[0].price, 3.5);
    }

    #[test]
    fn test_parse_json() {
        let config = CatalogConfig::from_json_str(
            r#"{"products":[{"slug":"a","title":"A","thumbnail":"a.png","sizes":[{"name":"S","price":1}]}]}"#,
        )
        .unwrap();
        assert_eq!(config.currency, Currency::USD);
        assert_eq!(config.products[0].sizes[0].name, "S");
    }

    #[test]
    fn test_parse_error_is_config_error() {
        let err = CatalogConfig::from_toml_str("[[products]]\nslug = 3").unwrap_err();
        assert!(matches!(err, CommerceError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = CatalogConfig::load("/nonexistent/catalog.toml").unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
