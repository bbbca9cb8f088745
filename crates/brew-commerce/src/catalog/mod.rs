//! Product catalog module.
//!
//! Contains products, their size tiers, and the read-only catalog store.

mod product;
mod store;

pub use product::{Product, Size};
pub use store::{Catalog, CatalogBuilder};
