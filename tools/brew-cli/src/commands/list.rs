//! List command implementation.

use anyhow::Result;
use brew_commerce::browse::product_cards;

use crate::context::Context;

/// Run the list command.
pub fn run(ctx: &Context) -> Result<()> {
    let cards = product_cards(&ctx.catalog);

    if ctx.output.is_json() {
        ctx.output.json(&cards);
        return Ok(());
    }

    if let Some(source) = &ctx.source {
        ctx.output.debug(&format!("Catalog: {}", source.display()));
    }

    if cards.is_empty() {
        ctx.output.info("Catalog has no products");
        return Ok(());
    }

    ctx.output.header("Products");
    ctx.output.table_row(&["SLUG", "TITLE", "PRICE", "PATH"], &[16, 20, 10, 24]);
    for card in &cards {
        ctx.output.table_row(
            &[card.slug.as_str(), &card.title, &card.price, &card.href],
            &[16, 20, 10, 24],
        );
    }

    Ok(())
}
