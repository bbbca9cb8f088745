//! Product and size types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::Slug;
use crate::money::Money;

/// One purchasable size tier of a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    /// Size name, unique within its product (e.g., "Medium").
    pub name: String,
    /// Price of one unit in this size.
    pub price: Money,
}

impl Size {
    /// Create a new size tier.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Format the price for display (e.g., "$24.99").
    pub fn price_display(&self) -> String {
        self.price.display()
    }
}

/// A product in the catalog.
///
/// A product always has at least one size, size names are unique, and the
/// featured size index always points into `sizes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    /// Unique, URL-safe key used for lookup and routing.
    pub slug: Slug,
    /// Display name.
    pub title: String,
    /// Relative image path, resolved by the static asset server.
    pub thumbnail: String,
    /// Long description.
    pub description: String,
    sizes: Vec<Size>,
    featured: usize,
}

impl Product {
    /// Create a product, validating its slug and size list.
    ///
    /// The featured size defaults to the second size when there is one,
    /// otherwise to the first.
    pub fn new(
        slug: impl Into<Slug>,
        title: impl Into<String>,
        thumbnail: impl Into<String>,
        description: impl Into<String>,
        sizes: Vec<Size>,
    ) -> Result<Self, CommerceError> {
        let slug = slug.into();

        if !slug.is_url_safe() {
            return Err(CommerceError::InvalidSlug(slug.into_inner()));
        }
        if sizes.is_empty() {
            return Err(CommerceError::EmptySizes(slug.into_inner()));
        }

        {
            let mut seen = HashSet::with_capacity(sizes.len());
            for size in &sizes {
                if !seen.insert(size.name.as_str()) {
                    return Err(CommerceError::DuplicateSize {
                        product: slug.into_inner(),
                        size: size.name.clone(),
                    });
                }
                if size.price.is_negative() {
                    return Err(CommerceError::InvalidAmount(format!(
                        "{} {} is priced at {}",
                        slug,
                        size.name,
                        size.price.display()
                    )));
                }
            }
        }

        let featured = if sizes.len() > 1 { 1 } else { 0 };

        Ok(Self {
            slug,
            title: title.into(),
            thumbnail: thumbnail.into(),
            description: description.into(),
            sizes,
            featured,
        })
    }

    /// Make the named size the featured one.
    pub fn with_featured_size(mut self, name: &str) -> Result<Self, CommerceError> {
        self.featured =
            self.size_index(name)
                .ok_or_else(|| CommerceError::UnknownFeaturedSize {
                    product: self.slug.to_string(),
                    size: name.to_string(),
                })?;
        Ok(self)
    }

    /// All sizes, in display order.
    pub fn sizes(&self) -> &[Size] {
        &self.sizes
    }

    /// Index of the featured size within [`sizes`](Self::sizes).
    pub fn featured_index(&self) -> usize {
        self.featured
    }

    /// The size shown on list cards and selected when the detail view opens.
    pub fn featured_size(&self) -> &Size {
        &self.sizes[self.featured]
    }

    /// Find a size by name.
    pub fn size_named(&self, name: &str) -> Option<&Size> {
        self.sizes.iter().find(|size| size.name == name)
    }

    /// Position of the named size.
    pub fn size_index(&self, name: &str) -> Option<usize> {
        self.sizes.iter().position(|size| size.name == name)
    }

    /// Image source rooted at the site origin (e.g., "/products/a.png").
    pub fn image_src(&self) -> String {
        if self.thumbnail.starts_with('/') || self.thumbnail.contains("://") {
            self.thumbnail.clone()
        } else {
            format!("/{}", self.thumbnail)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn three_sizes() -> Vec<Size> {
        vec![
            Size::new("Small", usd(1699)),
            Size::new("Medium", usd(2499)),
            Size::new("Large", usd(3099)),
        ]
    }

    #[test]
    fn test_product_creation() {
        let product =
            Product::new("brown-sugar", "Brown Sugar", "b.png", "Iced", three_sizes()).unwrap();
        assert_eq!(product.slug, "brown-sugar");
        assert_eq!(product.sizes().len(), 3);
    }

    #[test]
    fn test_featured_defaults_to_second_size() {
        let product = Product::new("a", "A", "a.png", "", three_sizes()).unwrap();
        assert_eq!(product.featured_index(), 1);
        assert_eq!(product.featured_size().name, "Medium");
    }

    #[test]
    fn test_featured_single_size_falls_back_to_first() {
        let product =
            Product::new("a", "A", "a.png", "", vec![Size::new("Regular", usd(300))]).unwrap();
        assert_eq!(product.featured_size().name, "Regular");
    }

    #[test]
    fn test_explicit_featured_size() {
        let product = Product::new("a", "A", "a.png", "", three_sizes())
            .unwrap()
            .with_featured_size("Large")
            .unwrap();
        assert_eq!(product.featured_size().price, usd(3099));

        let err = Product::new("a", "A", "a.png", "", three_sizes())
            .unwrap()
            .with_featured_size("Huge")
            .unwrap_err();
        assert!(matches!(err, CommerceError::UnknownFeaturedSize { .. }));
    }

    #[test]
    fn test_slug_must_be_url_safe() {
        for slug in ["cold/brew", "Cold Brew", "", "caf\u{e9}", "a?b"] {
            let err = Product::new(slug, "A", "a.png", "", three_sizes()).unwrap_err();
            assert_eq!(err, CommerceError::InvalidSlug(slug.to_string()));
        }
        assert!(Product::new("cold-brew-2", "A", "a.png", "", three_sizes()).is_ok());
    }

    #[test]
    fn test_empty_sizes_rejected() {
        let err = Product::new("a", "A", "a.png", "", Vec::new()).unwrap_err();
        assert_eq!(err, CommerceError::EmptySizes("a".to_string()));
    }

    #[test]
    fn test_duplicate_size_rejected() {
        let sizes = vec![Size::new("Small", usd(1)), Size::new("Small", usd(2))];
        let err = Product::new("a", "A", "a.png", "", sizes).unwrap_err();
        assert!(matches!(err, CommerceError::DuplicateSize { .. }));
    }

    #[test]
    fn test_negative_price_rejected() {
        let sizes = vec![Size::new("Small", usd(-1))];
        let err = Product::new("a", "A", "a.png", "", sizes).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidAmount(_)));
    }

    #[test]
    fn test_size_lookup() {
        let product = Product::new("a", "A", "a.png", "", three_sizes()).unwrap();
        assert_eq!(product.size_named("Large").unwrap().price_display(), "$30.99");
        assert_eq!(product.size_index("Small"), Some(0));
        assert!(product.size_named("large").is_none());
    }

    #[test]
    fn test_image_src() {
        let product = Product::new("a", "A", "products/a.png", "", three_sizes()).unwrap();
        assert_eq!(product.image_src(), "/products/a.png");

        let mut product = product;
        product.thumbnail = "https://cdn.example.com/a.png".to_string();
        assert_eq!(product.image_src(), "https://cdn.example.com/a.png");
    }
}
