//! Selection state owned by one detail view: the chosen size and the
//! quantity counter.

use serde::Serialize;

use crate::catalog::{Product, Size};
use crate::error::CommerceError;
use crate::money::Money;

/// A quantity that never drops below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Quantity(u32);

impl Quantity {
    /// The smallest quantity.
    pub const ONE: Quantity = Quantity(1);

    /// Create a quantity; zero is raised to one.
    pub fn new(value: u32) -> Self {
        Self(value.max(1))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Add exactly one.
    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Remove one, unless already at one.
    pub fn decrement(&mut self) {
        if self.0 > 1 {
            self.0 -= 1;
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the size selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeOption {
    pub size: Size,
    /// Formatted unit price.
    pub price: String,
    /// Whether this row is the current selection.
    pub selected: bool,
}

impl SizeOption {
    /// Build the selector rows for a list of sizes, marking the one whose
    /// name matches `selected`.
    pub fn list(sizes: &[Size], selected: Option<&Size>) -> Vec<SizeOption> {
        sizes
            .iter()
            .map(|size| SizeOption {
                size: size.clone(),
                price: size.price_display(),
                selected: selected.is_some_and(|s| s.name == size.name),
            })
            .collect()
    }
}

/// Per-view selection: the product being viewed, which of its sizes is
/// chosen, and how many.
///
/// The selected index always points into the product's sizes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionState {
    product: Product,
    selected: usize,
    quantity: Quantity,
}

impl SelectionState {
    /// Open a selection on the product's featured size with quantity one.
    pub fn new(product: Product) -> Self {
        let selected = product.featured_index();
        Self {
            product,
            selected,
            quantity: Quantity::ONE,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The chosen size.
    pub fn selected_size(&self) -> &Size {
        &self.product.sizes()[self.selected]
    }

    /// Choose a size by name. Choosing the current size again is a no-op.
    pub fn select_size(&mut self, name: &str) -> Result<&Size, CommerceError> {
        let index =
            self.product
                .size_index(name)
                .ok_or_else(|| CommerceError::SizeNotFound {
                    product: self.product.slug.to_string(),
                    size: name.to_string(),
                })?;
        self.selected = index;
        Ok(self.selected_size())
    }

    /// Go back to the featured size, keeping the quantity.
    pub fn reset_size(&mut self) {
        self.selected = self.product.featured_index();
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }

    pub fn increment(&mut self) {
        self.quantity.increment();
    }

    pub fn decrement(&mut self) {
        self.quantity.decrement();
    }

    /// Selected size price times quantity.
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.selected_size()
            .price
            .checked_multiply(i64::from(self.quantity.get()))
    }

    /// Rows for the size selector.
    pub fn size_options(&self) -> Vec<SizeOption> {
        SizeOption::list(self.product.sizes(), Some(self.selected_size()))
    }
}
