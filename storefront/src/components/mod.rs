//! Presentational components.

mod counter;
mod product_card;
mod size_selector;

pub use counter::QuantityCounter;
pub use product_card::CatalogCard;
pub use size_selector::{row_click, SizeSelector};
