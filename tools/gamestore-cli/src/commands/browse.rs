//! List games matching filters.

use anyhow::Result;
use gamestore_commerce::catalog::Product;
use gamestore_commerce::search::search;
use gamestore_commerce::storefront::Storefront;

use super::BrowseArgs;
use crate::context::Context;
use crate::output::{price_label, rating_label};

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let criteria = args.filters.criteria(store.config().price_range)?;
    let results = search(store.catalog(), &criteria);

    if ctx.output.is_json() {
        ctx.output.json(&results.items);
        return Ok(());
    }

    ctx.output.header("Catalog");

    if results.is_empty() {
        ctx.output.info("No games match these filters.");
        return Ok(());
    }

    print_products(&results.items, &store, ctx);

    ctx.output.info("");
    ctx.output.info(&format!("Found: {}", results.len()));

    Ok(())
}

/// Print products as a table, one per row.
pub fn print_products(products: &[&Product], store: &Storefront, ctx: &Context) {
    for product in products {
        ctx.output.table_row(
            &[
                &format!("#{}", product.id),
                &product.title,
                &rating_label(product.rating),
                &price_label(product, |amount| store.money(amount)),
            ],
            &[4, 24, 8, 0],
        );
        ctx.output.debug(&format!(
            "{} | {}",
            product.genres.join(", "),
            product.platforms.join(", ")
        ));
    }
}
