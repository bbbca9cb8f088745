//! Catalog, pricing and browsing logic for the Brew coffee storefront.
//!
//! This crate holds everything the storefront needs that is not rendering:
//!
//! - **Money**: integer minor-unit amounts and en-US currency formatting
//! - **Catalog**: products, size tiers and the immutable catalog store
//! - **Browse**: list cards, the size selector model, the quantity counter
//!   and the product detail state machine
//!
//! # Example
//!
//! ```
//! use brew_commerce::prelude::*;
//!
//! let catalog = Catalog::coffee_shop().unwrap();
//!
//! let mut view = DetailView::default();
//! view.on_route(&catalog, Some("brown-sugar"));
//!
//! let selection = view.selection_mut().unwrap();
//! assert_eq!(selection.selected_size().name, "Medium");
//!
//! selection.increment();
//! selection.increment();
//! assert_eq!(selection.total().unwrap().display(), "$74.97");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod browse;
pub mod catalog;
pub mod config;

pub use error::CommerceError;
pub use ids::Slug;
pub use money::{format_price, format_price_in, Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::Slug;
    pub use crate::money::{format_price, format_price_in, Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, CatalogBuilder, Product, Size};
    pub use crate::config::{CatalogConfig, ProductConfig, SizeConfig};

    // Browse
    pub use crate::browse::{
        parse_product_path, product_cards, product_path, DetailView, ProductCard, Quantity,
        SelectionState, SizeOption, HOME_PATH,
    };
}
