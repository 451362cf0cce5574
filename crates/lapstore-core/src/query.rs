//! Query-string construction for `GET /laptops/filter` and `GET /laptops/search`.
//!
//! The filter endpoint expects specific tokens rather than the labels shown in
//! the filter panel, so every selected label goes through
//! [`normalize_filter_value`] first. Values are appended verbatim (no
//! percent-encoding): a `+` in a value is the backend's space.
//!
//! ## Pair order
//!
//! ```text
//! ?price_min=..&price_max=..&weight_min=..&weight_max=..&page=..&limit=..&brand=..&sort=..
//!  &usage_type=..&sub_brand=..&cpu=..&vga=..&ram_amount=..&storage_amount=..&screen_size=..
//! ```
//!
//! One `key=value` pair per selected label; labels within a category are
//! emitted sorted.

use std::fmt::Write as _;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::catalog::{Brand, FilterCategory};
use crate::filters::FilterState;
use crate::paging::{ListingSort, PageSize, SearchSort};

/// Characters `encodeURIComponent` leaves alone: alphanumerics and `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Substring → wire code for graphics-card labels. Later entries take
/// precedence when a label contains more than one key.
const VGA_CODES: &[(&str, &str)] = &[
    ("NVIDIA MX", "mx"),
    ("NVIDIA GTX", "gtx"),
    ("NVIDIA RTX 20", "rtx+20"),
    ("NVIDIA RTX 30", "rtx+30"),
    ("NVIDIA RTX 40", "rtx+40"),
    ("NVIDIA Quadro", "quadro"),
    ("AMD Radeon RX 5000M", "rx+5"),
    ("AMD Radeon RX 6000M", "rx+6"),
    ("AMD Radeon RX 7000M", "rx+7"),
    ("AMD Radeon Pro", "rad+pro"),
];

/// Everything the listing request depends on.
#[derive(Debug, Clone, Copy)]
pub struct ListingQuery<'a> {
    pub brand: Brand,
    pub page: u32,
    pub limit: PageSize,
    pub sort: ListingSort,
    pub filters: &'a FilterState,
}

/// Builds the query string (leading `?` included) for `GET /laptops/filter`.
///
/// Pure and deterministic: equal inputs always yield byte-identical output.
#[must_use]
pub fn build_filter_query(query: &ListingQuery<'_>) -> String {
    let filters = query.filters;
    let mut out = String::with_capacity(256);

    // Writing to a String cannot fail.
    let _ = write!(
        out,
        "?price_min={}&price_max={}&weight_min={}&weight_max={}",
        filters.price_range.min(),
        filters.price_range.max(),
        filters.weight_range.min(),
        filters.weight_range.max(),
    );
    let _ = write!(
        out,
        "&page={}&limit={}&brand={}&sort={}",
        query.page.max(1),
        query.limit.get(),
        query.brand.slug(),
        query.sort.wire_value(),
    );

    for (category, labels) in filters.categories() {
        for label in labels {
            let value = normalize_filter_value(category, label, query.brand);
            let _ = write!(out, "&{}={value}", category.api_key());
        }
    }

    out
}

/// Maps a filter-panel label to the token the backend expects.
///
/// ```
/// use lapstore_core::{normalize_filter_value, Brand, FilterCategory};
///
/// assert_eq!(normalize_filter_value(FilterCategory::Cpu, "Intel Core i7", Brand::All), "core+i7");
/// assert_eq!(normalize_filter_value(FilterCategory::StorageAmount, "1 TB", Brand::All), "1024");
/// ```
#[must_use]
pub fn normalize_filter_value(category: FilterCategory, label: &str, brand: Brand) -> String {
    let processed: String = match category {
        FilterCategory::SubBrand if brand == Brand::All => {
            label.split(' ').skip(1).collect::<Vec<_>>().join(" ")
        }
        FilterCategory::RamAmount | FilterCategory::ScreenSize => leading_token(label).to_string(),
        FilterCategory::StorageAmount => {
            if label == "1 TB" {
                "1024".to_string()
            } else {
                leading_token(label).to_string()
            }
        }
        FilterCategory::Cpu => {
            let tokens: Vec<&str> = label.split(' ').collect();
            if label.starts_with("Apple") {
                tokens.last().copied().unwrap_or_default().to_string()
            } else {
                tokens[tokens.len().saturating_sub(2)..].join(" ")
            }
        }
        FilterCategory::Vga => VGA_CODES
            .iter()
            .rev()
            .find(|(needle, _)| label.contains(needle))
            .map_or_else(|| label.to_string(), |(_, code)| (*code).to_string()),
        FilterCategory::SubBrand | FilterCategory::UsageType => label.to_string(),
    };

    // Only the first space becomes `+`; multi-word pass-through labels keep
    // their later spaces.
    processed.to_lowercase().replacen(' ', "+", 1)
}

fn leading_token(label: &str) -> &str {
    label.split(' ').next().unwrap_or(label)
}

/// Builds the query string (leading `?` included) for `GET /laptops/search`.
///
/// The keyword is percent-encoded like `encodeURIComponent`; `sort` is omitted
/// for [`SearchSort::Relevant`], the backend default.
#[must_use]
pub fn build_search_query(keyword: &str, limit: u32, page: u32, sort: SearchSort) -> String {
    let mut out = format!(
        "?query={}&limit={limit}&page={}",
        encode_component(keyword),
        page.max(1)
    );
    if sort != SearchSort::Relevant {
        let _ = write!(out, "&sort={}", sort.wire_value());
    }
    out
}

/// Percent-encodes `value` for use inside a query parameter.
#[must_use]
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
