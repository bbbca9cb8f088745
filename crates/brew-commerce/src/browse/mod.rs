//! Browsing: the product list, the product detail view and the two
//! controls the detail view owns (size selector and quantity counter).
//!
//! Everything here is render-agnostic; the storefront binds these models
//! to Leptos signals.

mod detail;
mod listing;
mod routes;
mod selection;

pub use detail::DetailView;
pub use listing::{product_cards, ProductCard};
pub use routes::{parse_product_path, product_path, HOME_PATH, PRODUCT_ROUTE_PREFIX};
pub use selection::{Quantity, SelectionState, SizeOption};
