//! Show command implementation.

use anyhow::Result;
use brew_commerce::browse::{product_path, SelectionState, SizeOption};
use brew_commerce::catalog::Product;
use serde::Serialize;

use super::ShowArgs;
use crate::context::Context;
use crate::output::selected_marker;

/// Product details as printed by `brew show`.
#[derive(Debug, Serialize)]
pub struct ProductDetails {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub path: String,
    pub sizes: Vec<SizeOption>,
}

impl ProductDetails {
    pub fn new(product: &Product) -> Self {
        let selection = SelectionState::new(product.clone());
        Self {
            slug: product.slug.to_string(),
            title: product.title.clone(),
            description: product.description.clone(),
            image: product.image_src(),
            path: product_path(product.slug.as_str()),
            sizes: selection.size_options(),
        }
    }
}

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let product = ctx.catalog.get(&args.slug)?;
    let details = ProductDetails::new(product);

    if ctx.output.is_json() {
        ctx.output.json(&details);
        return Ok(());
    }

    ctx.output.header(&details.title);
    ctx.output.kv("Slug", &details.slug);
    ctx.output.kv("Image", &details.image);
    ctx.output.kv("Path", &details.path);
    if !details.description.is_empty() {
        ctx.output.kv("Description", &details.description);
    }

    ctx.output.header("Sizes");
    for option in &details.sizes {
        ctx.output.list_item(&format!(
            "{} {:8} {}",
            selected_marker(option.selected),
            option.size.name,
            option.price
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use brew_commerce::catalog::Catalog;

    #[test]
    fn test_details_mark_featured_size() {
        let catalog = Catalog::coffee_shop().unwrap();
        let details = ProductDetails::new(catalog.get("mocha-latte").unwrap());

        assert_eq!(details.path, "/product/mocha-latte");
        let selected: Vec<_> = details
            .sizes
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.size.name.as_str())
            .collect();
        assert_eq!(selected, ["Medium"]);
        assert_eq!(details.sizes[0].price, "$16.99");
    }
}
