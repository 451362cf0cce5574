//! `lapstore search`: one page of search results.

use std::num::NonZeroU32;
use std::sync::Arc;

use clap::Args;
use lapstore_client::{ImageLocator, SearchPage, SearchParams};
use lapstore_core::{AppConfig, SearchSort, TracingNotifier};

use crate::render;

#[derive(Debug, Args)]
pub(crate) struct SearchArgs {
    /// Search keyword
    pub keyword: String,

    /// Results per page (any positive number); defaults to LAPSTORE_DEFAULT_PAGE_SIZE
    #[arg(long)]
    pub limit: Option<NonZeroU32>,

    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Sort order: relevant, latest, price_asc or price_desc
    #[arg(long, default_value = "relevant")]
    pub sort: SearchSort,

    /// Print the request instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Print products as JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    pub(crate) fn params(&self, default_limit: NonZeroU32) -> SearchParams {
        SearchParams {
            keyword: self.keyword.clone(),
            limit: self.limit.unwrap_or(default_limit),
            page: self.page.max(1),
            sort: self.sort,
        }
    }
}

/// # Errors
///
/// Returns an error if the client cannot be constructed.
pub(crate) async fn run_search(config: &AppConfig, args: &SearchArgs) -> anyhow::Result<()> {
    let client = crate::build_client(config)?;
    let params = args.params(config.default_page_size.into());
    let mut page = SearchPage::new(
        &params,
        ImageLocator::new(client.base_url(), config.placeholder_image.clone()),
        Arc::new(TracingNotifier),
    );

    let Some(ticket) = page.begin_fetch() else {
        println!("Enter a keyword to search.");
        return Ok(());
    };

    if args.dry_run {
        println!("GET {}/laptops/search{}", client.base_url(), ticket.query());
        println!("page URL: {}", params.to_url());
        return Ok(());
    }

    page.run(ticket, &client).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(page.products())?);
        return Ok(());
    }

    println!(
        "Search results for \"{}\" | {}",
        page.keyword(),
        page.display_range()
    );
    render::print_products(page.products());
    Ok(())
}
