//! Quote command implementation.

use anyhow::Result;
use brew_commerce::browse::{Quantity, SelectionState};
use brew_commerce::catalog::Catalog;
use serde::Serialize;

use super::QuoteArgs;
use crate::context::Context;

/// A priced selection.
#[derive(Debug, Serialize)]
pub struct Quote {
    pub slug: String,
    pub title: String,
    pub size: String,
    pub unit_price: String,
    pub quantity: u32,
    pub total: String,
}

/// Price `quantity` cups of `size` (or the featured size) of a product.
pub fn quote(
    catalog: &Catalog,
    slug: &str,
    size: Option<&str>,
    quantity: u32,
) -> Result<Quote> {
    let mut selection = SelectionState::new(catalog.get(slug)?.clone());
    if let Some(name) = size {
        selection.select_size(name)?;
    }
    selection.set_quantity(Quantity::new(quantity));

    let total = selection.total()?;
    let chosen = selection.selected_size();

    Ok(Quote {
        slug: selection.product().slug.to_string(),
        title: selection.product().title.clone(),
        size: chosen.name.clone(),
        unit_price: chosen.price_display(),
        quantity: selection.quantity().get(),
        total: total.display(),
    })
}

/// Run the quote command.
pub fn run(args: QuoteArgs, ctx: &Context) -> Result<()> {
    let quote = quote(&ctx.catalog, &args.slug, args.size.as_deref(), args.quantity)?;

    ctx.logger
        .debug_builder("quote computed")
        .field("slug", &quote.slug)
        .field("size", &quote.size)
        .field_i64("quantity", i64::from(quote.quantity))
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&quote);
        return Ok(());
    }

    ctx.output.header(&quote.title);
    ctx.output.kv("Size", &quote.size);
    ctx.output.kv("Unit price", &quote.unit_price);
    ctx.output.kv("Quantity", &quote.quantity.to_string());
    ctx.output.success(&format!("Total {}", quote.total));

    Ok(())
}
