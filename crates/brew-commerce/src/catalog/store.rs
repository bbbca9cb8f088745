//! The read-only catalog store.

use std::collections::HashMap;

use crate::config::CatalogConfig;
use crate::error::CommerceError;
use crate::ids::Slug;
use crate::money::{Currency, Money};

use super::{Product, Size};

const COFFEE_SHOP: &str = include_str!("coffee.toml");

/// An immutable, ordered set of products keyed by slug.
///
/// Built once at startup and shared by reference; nothing mutates it
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    currency: Currency,
    products: Vec<Product>,
    index: HashMap<Slug, usize>,
}

impl Catalog {
    /// Start building a catalog by hand.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// The coffee shop catalog shipped with the storefront.
    pub fn coffee_shop() -> Result<Self, CommerceError> {
        Self::from_config(&CatalogConfig::from_toml_str(COFFEE_SHOP)?)
    }

    /// Build and validate a catalog from a configuration document.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CommerceError> {
        let mut builder = CatalogBuilder::new().currency(config.currency);

        for entry in &config.products {
            let sizes = entry
                .sizes
                .iter()
                .map(|size| {
                    if size.price < 0.0 {
                        return Err(CommerceError::InvalidAmount(format!(
                            "{} {} is priced at {}",
                            entry.slug, size.name, size.price
                        )));
                    }
                    Ok(Size::new(
                        size.name.clone(),
                        Money::from_decimal(size.price, config.currency)?,
                    ))
                })
                .collect::<Result<Vec<_>, _>>()?;

            let mut product = Product::new(
                entry.slug.as_str(),
                entry.title.clone(),
                entry.thumbnail.clone(),
                entry.description.clone(),
                sizes,
            )?;
            if let Some(featured) = &entry.featured_size {
                product = product.with_featured_size(featured)?;
            }

            builder = builder.product(product);
        }

        builder.build()
    }

    /// Look up a product by slug. Unknown slugs yield `None`.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Product> {
        self.index.get(slug).map(|&i| &self.products[i])
    }

    /// Look up a product by slug, treating a miss as an error.
    pub fn get(&self, slug: &str) -> Result<&Product, CommerceError> {
        self.find_by_slug(slug)
            .ok_or_else(|| CommerceError::ProductNotFound(slug.to_string()))
    }

    /// Iterate products in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Currency all prices are expressed in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builder for [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    currency: Currency,
    products: Vec<Product>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the catalog currency.
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Append a product. Order of calls is display order.
    pub fn product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    /// Finish the catalog, rejecting duplicate slugs and prices in a
    /// foreign currency.
    pub fn build(self) -> Result<Catalog, CommerceError> {
        let mut index = HashMap::with_capacity(self.products.len());

        for (i, product) in self.products.iter().enumerate() {
            if let Some(size) = product
                .sizes()
                .iter()
                .find(|size| size.price.currency != self.currency)
            {
                return Err(CommerceError::Config(format!(
                    "{} {} is priced in {}, catalog currency is {}",
                    product.slug, size.name, size.price.currency, self.currency
                )));
            }
            if index.insert(product.slug.clone(), i).is_some() {
                return Err(CommerceError::DuplicateSlug(product.slug.to_string()));
            }
        }

        Ok(Catalog {
            currency: self.currency,
            products: self.products,
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ProductConfig, SizeConfig};

    fn product(slug: &str) -> Product {
        Product::new(
            slug,
            slug.to_uppercase(),
            "p.png",
            "",
            vec![Size::new("Regular", Money::new(300, Currency::USD))],
        )
        .unwrap()
    }

    #[test]
    fn test_coffee_shop_catalog() {
        let catalog = Catalog::coffee_shop().unwrap();
        let slugs: Vec<_> = catalog.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["brown-sugar", "mocha-latte", "americano"]);
        assert_eq!(catalog.currency(), Currency::USD);

        for product in &catalog {
            assert_eq!(product.sizes().len(), 3);
            assert_eq!(product.featured_size().name, "Medium");
            assert_eq!(product.featured_size().price_display(), "$24.99");
        }
    }

    #[test]
    fn test_find_by_slug() {
        let catalog = Catalog::coffee_shop().unwrap();
        for product in catalog.iter() {
            let found = catalog.find_by_slug(product.slug.as_str()).unwrap();
            assert_eq!(found.slug, product.slug);
        }
        assert_eq!(catalog.find_by_slug("brown-sugar").unwrap().title, "Brown Sugar");
    }

    #[test]
    fn test_find_by_slug_miss() {
        let catalog = Catalog::coffee_shop().unwrap();
        assert!(catalog.find_by_slug("espresso").is_none());
        assert!(catalog.find_by_slug("").is_none());
        assert!(catalog.find_by_slug("Brown-Sugar").is_none());
        assert_eq!(
            catalog.get("espresso").unwrap_err(),
            CommerceError::ProductNotFound("espresso".to_string())
        );
    }

    #[test]
    fn test_builder_preserves_order() {
        let catalog = Catalog::builder()
            .product(product("c"))
            .product(product("a"))
            .product(product("b"))
            .build()
            .unwrap();
        let slugs: Vec<_> = catalog.iter().map(|p| p.slug.to_string()).collect();
        assert_eq!(slugs, ["c", "a", "b"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_builder_rejects_duplicate_slug() {
        let err = Catalog::builder()
            .product(product("a"))
            .product(product("a"))
            .build()
            .unwrap_err();
        assert_eq!(err, CommerceError::DuplicateSlug("a".to_string()));
    }

    #[test]
    fn test_builder_rejects_foreign_currency() {
        let err = Catalog::builder()
            .currency(Currency::EUR)
            .product(product("a"))
            .build()
            .unwrap_err();
        assert!(matches!(err, CommerceError::Config(_)));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::builder().build().unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.find_by_slug("anything").is_none());
    }

    #[test]
    fn test_from_config_rejects_negative_price() {
        let config = CatalogConfig {
            currency: Currency::USD,
            products: vec![ProductConfig {
                slug: "a".to_string(),
                title: "A".to_string(),
                thumbnail: "a.png".to_string(),
                description: String::new(),
                featured_size: None,
                sizes: vec![SizeConfig {
                    name: "Small".to_string(),
                    price: -1.0,
                }],
            }],
        };
        assert!(matches!(
            Catalog::from_config(&config),
            Err(CommerceError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_from_config_rejects_empty_sizes() {
        let config = CatalogConfig::from_toml_str(
            "[[products]]\nslug = \"a\"\ntitle = \"A\"\nthumbnail = \"a.png\"\n",
        )
        .unwrap();
        assert_eq!(
            Catalog::from_config(&config).unwrap_err(),
            CommerceError::EmptySizes("a".to_string())
        );
    }

    #[test]
    fn test_from_config_rejects_unroutable_slug() {
        let config = CatalogConfig::from_toml_str(
            "[[products]]\nslug = \"cold/brew\"\ntitle = \"Cold Brew\"\nthumbnail = \"c.png\"\nsizes = [{ name = \"Regular\", price = 4.0 }]\n",
        )
        .unwrap();
        assert_eq!(
            Catalog::from_config(&config).unwrap_err(),
            CommerceError::InvalidSlug("cold/brew".to_string())
        );
    }
}
