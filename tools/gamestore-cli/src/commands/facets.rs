//! Genre and platform counts.

use anyhow::Result;
use gamestore_commerce::search::{search, Facet};

use super::FacetsArgs;
use crate::context::Context;

/// Run the facets command.
pub async fn run(args: FacetsArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let criteria = args.filters.criteria(store.config().price_range)?;
    let results = search(store.catalog(), &criteria);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "matches": results.len(),
            "genres": results.genres,
            "platforms": results.platforms,
        }));
        return Ok(());
    }

    print_facet(&results.genres, ctx);
    print_facet(&results.platforms, ctx);

    if let Some((min, max)) = store.catalog().price_bounds() {
        ctx.output.info("");
        ctx.output.kv(
            "Catalog prices",
            &format!("{} - {}", store.money(min), store.money(max)),
        );
    }

    Ok(())
}

fn print_facet(facet: &Facet, ctx: &Context) {
    ctx.output.header(&facet.name);
    if facet.values.is_empty() {
        ctx.output.info("No matches.");
        return;
    }
    for value in &facet.values {
        let marker = if value.selected { "[x]" } else { "[ ]" };
        ctx.output.table_row(
            &[marker, &value.value, &value.count.to_string()],
            &[3, 12, 0],
        );
    }
}
