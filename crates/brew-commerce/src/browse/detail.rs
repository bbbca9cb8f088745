//! Product detail view state machine.
//!
//! ```text
//!             route slug changes
//! Resolving ──────────────────────┬──> Loaded(selection)
//!     ^                           └──> NotFound { slug }
//!     └── slug missing / placeholder
//! ```

use serde::Serialize;

use crate::catalog::{Catalog, Product};
use crate::ids::Slug;

use super::selection::SelectionState;

/// What the detail view shows for the current route.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DetailView {
    /// No slug available yet; render nothing.
    #[default]
    Resolving,
    /// The slug matched no product; render nothing.
    NotFound { slug: Slug },
    /// A product is shown along with its selection.
    Loaded(SelectionState),
}

impl DetailView {
    /// Resolve a route slug from scratch.
    pub fn resolve(catalog: &Catalog, slug: Option<&str>) -> Self {
        let mut view = Self::Resolving;
        view.on_route(catalog, slug);
        view
    }

    /// Apply the current route slug.
    ///
    /// A new slug recreates the selection. The same slug again keeps the
    /// quantity and returns the size to the featured one.
    pub fn on_route(&mut self, catalog: &Catalog, slug: Option<&str>) {
        let Some(slug) = slug.filter(|s| !is_placeholder(s)) else {
            *self = Self::Resolving;
            return;
        };

        if let Self::Loaded(selection) = self {
            if selection.product().slug == slug {
                selection.reset_size();
                return;
            }
        }

        *self = match catalog.find_by_slug(slug) {
            Some(product) => Self::Loaded(SelectionState::new(product.clone())),
            None => Self::NotFound {
                slug: Slug::new(slug),
            },
        };
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// The product shown, if any.
    pub fn product(&self) -> Option<&Product> {
        self.selection().map(SelectionState::product)
    }

    pub fn selection(&self) -> Option<&SelectionState> {
        match self {
            Self::Loaded(selection) => Some(selection),
            _ => None,
        }
    }

    pub fn selection_mut(&mut self) -> Option<&mut SelectionState> {
        match self {
            Self::Loaded(selection) => Some(selection),
            _ => None,
        }
    }
}

/// Empty params and unfilled route patterns like `[slug]` or `:slug`.
fn is_placeholder(slug: &str) -> bool {
    let slug = slug.trim();
    slug.is_empty() || slug.starts_with(':') || (slug.starts_with('[') && slug.ends_with(']'))
}
