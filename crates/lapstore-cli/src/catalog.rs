//! `lapstore catalog`: one page of the filtered listing.

use std::sync::Arc;

use clap::Args;
use lapstore_client::{CatalogPage, ImageLocator};
use lapstore_core::{
    AppConfig, Brand, FilterCategory, FilterUpdate, ListingSort, PageSize, TracingNotifier,
};

use crate::render;

#[derive(Debug, Args)]
pub(crate) struct CatalogArgs {
    /// Brand slug: all, asus, lenovo, acer, dell, hp or msi
    #[arg(long, default_value = "all")]
    pub brand: Brand,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Products per page (15, 35 or 50); defaults to LAPSTORE_DEFAULT_PAGE_SIZE
    #[arg(long, value_parser = parse_page_size)]
    pub limit: Option<PageSize>,

    /// Sort order: latest, price-low, price-high or sale
    #[arg(long, default_value = "latest")]
    pub sort: ListingSort,

    /// Checkbox filter as `category=label`, e.g. `ramAmount=16 GB`. Repeatable.
    #[arg(long = "filter", value_parser = parse_filter)]
    pub filters: Vec<(FilterCategory, String)>,

    #[arg(long)]
    pub price_min: Option<u64>,

    #[arg(long)]
    pub price_max: Option<u64>,

    #[arg(long)]
    pub weight_min: Option<f64>,

    #[arg(long)]
    pub weight_max: Option<f64>,

    /// Print the request instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Print products as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_page_size(raw: &str) -> Result<PageSize, String> {
    let n: u32 = raw.parse().map_err(|e| format!("{e}"))?;
    PageSize::try_from(n).map_err(|e| e.to_string())
}

pub(crate) fn parse_filter(raw: &str) -> Result<(FilterCategory, String), String> {
    let (category, label) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected category=label, got \"{raw}\""))?;
    let category: FilterCategory = category.trim().parse().map_err(|e| format!("{e}"))?;
    let label = label.trim();
    if label.is_empty() {
        return Err(format!("empty label for {}", category.api_key()));
    }
    Ok((category, label.to_owned()))
}

impl CatalogArgs {
    /// Pending-filter edit equivalent to these flags. Unset range bounds keep
    /// their defaults.
    fn filter_update(&self) -> FilterUpdate {
        let defaults = lapstore_core::FilterState::default();
        let price_range = (self.price_min.is_some() || self.price_max.is_some()).then(|| {
            (
                self.price_min.unwrap_or(defaults.price_range.min()),
                self.price_max.unwrap_or(defaults.price_range.max()),
            )
        });
        let weight_range = (self.weight_min.is_some() || self.weight_max.is_some()).then(|| {
            (
                self.weight_min.unwrap_or(defaults.weight_range.min()),
                self.weight_max.unwrap_or(defaults.weight_range.max()),
            )
        });
        FilterUpdate {
            toggles: self.filters.clone(),
            price_range,
            weight_range,
        }
    }
}

/// Builds the page state the flags describe, applies filters, and either
/// prints the request (dry run) or fetches and prints the grid.
///
/// # Errors
///
/// Returns an error if the client cannot be constructed. Fetch failures are
/// reported through the notifier and leave an empty grid.
pub(crate) async fn run_catalog(config: &AppConfig, args: &CatalogArgs) -> anyhow::Result<()> {
    let client = crate::build_client(config)?;
    let mut page = CatalogPage::new(
        args.brand,
        args.limit.unwrap_or(config.default_page_size),
        ImageLocator::new(client.base_url(), config.placeholder_image.clone()),
        Arc::new(TracingNotifier),
    );

    page.update_pending(args.filter_update());
    let _ = page.apply_filters();
    let _ = page.change_sort(args.sort);
    let ticket = page.select_page(args.page);

    if args.dry_run {
        println!("GET {}/laptops/filter{}", client.base_url(), ticket.query());
        return Ok(());
    }

    page.run(ticket, &client).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(page.products())?);
        return Ok(());
    }

    println!(
        "{} | {} | page {} of {}",
        args.brand.display_name(),
        page.display_range(),
        page.pagination().current_page(),
        page.pagination().page_count().max(1)
    );
    render::print_products(page.products());
    Ok(())
}
