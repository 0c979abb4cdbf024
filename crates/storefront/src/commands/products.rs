//! Product command handlers.

use tabled::Tabled;

use storefront_core::access::ProductFilters;
use storefront_core::model::{FilterPatch, Product, UpdateProductInput};
use storefront_core::query::{self, ListQuery};
use storefront_core::CreateProductInput;

use crate::cli::{GlobalOpts, ProductListArgs, ProductsArgs, ProductsCommand};
use crate::context::AppContext;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Stock")]
    stock: u32,
}

impl ProductRow {
    fn new(p: &Product) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            price: format!("{:.2}", p.price),
            category: p.category.clone(),
            stock: p.stock,
        }
    }
}

fn detail(p: &Product) -> String {
    let mut lines = vec![
        format!("ID:          {}", p.id),
        format!("Name:        {}", p.name),
        format!("Price:       {:.2}", p.price),
        format!("Category:    {}", p.category),
        format!("Stock:       {} ({})", p.stock, if p.in_stock() { "in stock" } else { "out of stock" }),
        format!("Status:      {}", p.status),
    ];
    if let Some(image) = &p.image {
        lines.push(format!("Image:       {image}"));
    }
    if !p.description.is_empty() {
        lines.push(format!("Description: {}", p.description));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    ctx: &AppContext,
    args: ProductsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ProductsCommand::List(list_args) => list(ctx, list_args, global).await,

        ProductsCommand::Get { id } => {
            let product = ctx.products.fetch_product(&id).await?;
            let out = output::render_single(&global.output, &product, detail, |p| p.id.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProductsCommand::Create {
            name,
            description,
            price,
            category,
            image,
        } => {
            let input = CreateProductInput {
                name,
                description,
                price,
                category,
                image,
            };
            let product = ctx.products.create_product(&input).await?;
            let out = output::render_single(&global.output, &product, detail, |p| p.id.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProductsCommand::Update {
            id,
            name,
            description,
            price,
            category,
            image,
        } => {
            let input = UpdateProductInput {
                name,
                description,
                price,
                category,
                image,
            };
            let product = ctx.products.update_product(&id, &input).await?;
            let out = output::render_single(&global.output, &product, detail, |p| p.id.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProductsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete product '{id}'?"), global.yes)? {
                return Ok(());
            }
            ctx.products.delete_product(&id).await?;
            Ok(())
        }
    }
}

/// Fetch the collection, install filters, and render one derived page.
///
/// Price bounds are applied upstream of the store (they are fetch
/// filters, not view filters), so the derived page only re-applies
/// search and category.
async fn list(
    ctx: &AppContext,
    args: ProductListArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let saved = &ctx.config.saved_filters.products;
    let search = args.list.search.clone().or_else(|| saved.search.clone());
    let category = args.category.clone().or_else(|| saved.facet.clone());

    if args.list.save_filters {
        let spec = storefront_config::FilterSpec {
            search: search.clone(),
            facet: category.clone(),
        };
        storefront_config::save_filters("products", &spec)?;
    }

    let patch = FilterPatch {
        search: Some(search.unwrap_or_default()),
        facet: Some(category),
    };
    ctx.products.set_filters(&patch);

    let fetch_filters = ProductFilters {
        min_price: args.min_price,
        max_price: args.max_price,
        ..ProductFilters::default()
    };
    ctx.products.fetch_products(&fetch_filters).await?;

    let limit = args.list.limit.unwrap_or(ctx.config.defaults.limit);
    let state = ctx.store.products.snapshot();
    let view = query::derive_view(&state, ListQuery::new(args.list.page, limit));

    let out = output::render_list(&global.output, &view.items, ProductRow::new, |p| p.id.clone());
    output::print_output(&out, global.quiet);
    output::print_page_footer(&view.meta, &global.output, global.quiet);
    Ok(())
}
