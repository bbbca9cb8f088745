//! Product list cards.

use serde::Serialize;

use crate::catalog::{Catalog, Product};

use super::routes::product_path;

/// Everything a list card renders for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub slug: String,
    pub title: String,
    pub thumbnail: String,
    /// Formatted price of the featured size.
    pub price: String,
    /// Detail view path the card navigates to.
    pub href: String,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        Self {
            slug: product.slug.to_string(),
            title: product.title.clone(),
            thumbnail: product.thumbnail.clone(),
            price: product.featured_size().price_display(),
            href: product_path(product.slug.as_str()),
        }
    }
}

/// One card per product, in catalog order.
pub fn product_cards(catalog: &Catalog) -> Vec<ProductCard> {
    catalog.iter().map(ProductCard::from_product).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Size;
    use crate::money::{Currency, Money};

    #[test]
    fn test_cards_follow_catalog_order() {
        let catalog = Catalog::coffee_shop().unwrap();
        let cards = product_cards(&catalog);

        let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Brown Sugar", "Mocha Latte", "Americano"]);

        assert_eq!(cards[0].price, "$24.99");
        assert_eq!(cards[0].href, "/product/brown-sugar");
        assert_eq!(cards[0].thumbnail, "products/brow-sugar.png");
    }

    #[test]
    fn test_single_size_product_card() {
        let product = Product::new(
            "drip",
            "Drip",
            "drip.png",
            "",
            vec![Size::new("Regular", Money::new(300, Currency::USD))],
        )
        .unwrap();
        let catalog = Catalog::builder().product(product).build().unwrap();

        let cards = product_cards(&catalog);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].price, "$3.00");
    }

    #[test]
    fn test_empty_catalog_has_no_cards() {
        let catalog = Catalog::builder().build().unwrap();
        assert!(product_cards(&catalog).is_empty());
    }
}
