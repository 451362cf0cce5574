//! Search results page controller.
//!
//! Search state lives in the page URL (`/search?query=..&limit=..&page=..&sort=..`).
//! [`SearchParams`] round-trips it; [`SearchPage`] drives the request and
//! holds the results.

use std::borrow::Cow;
use std::num::NonZeroU32;
use std::sync::Arc;

use lapstore_core::{
    build_search_query, encode_component, DisplayRange, Notifier, Pagination,
    ProductDisplayRecord, SearchSort,
};
use percent_encoding::percent_decode_str;

use crate::client::StorefrontClient;
use crate::error::ClientError;
use crate::normalize::{transform_products, ImageLocator};
use crate::sequence::{FetchSequence, FetchTicket};
use crate::types::ListingResponse;

pub const SEARCH_FAILED_NOTICE: &str = "Failed to load search results";

/// Search state as carried in the page URL.
///
/// Unlike the listing, search takes any positive `limit`, not only the
/// "Show: N per page" choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub keyword: String,
    pub limit: NonZeroU32,
    pub page: u32,
    pub sort: SearchSort,
}

impl SearchParams {
    #[must_use]
    pub fn new(keyword: impl Into<String>, default_limit: NonZeroU32) -> Self {
        Self {
            keyword: keyword.into(),
            limit: default_limit,
            page: 1,
            sort: SearchSort::Relevant,
        }
    }

    /// Parses a URL query string (leading `?` optional).
    ///
    /// Unknown keys are ignored. A `limit` or `page` that is not a positive
    /// number falls back to the default; an unknown `sort` falls back to
    /// relevance.
    #[must_use]
    pub fn from_query(query: &str, default_limit: NonZeroU32) -> Self {
        let mut params = Self::new(String::new(), default_limit);
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode_form_value(value);
            match key {
                "query" => params.keyword = value.into_owned(),
                "limit" => params.limit = value.parse().unwrap_or(default_limit),
                "page" => {
                    params.page = value.parse::<u32>().ok().filter(|&n| n >= 1).unwrap_or(1);
                }
                "sort" => params.sort = value.parse().unwrap_or_default(),
                _ => {}
            }
        }
        params
    }

    /// Page URL for these params. `sort` is always included.
    #[must_use]
    pub fn to_url(&self) -> String {
        format!(
            "/search?query={}&limit={}&page={}&sort={}",
            encode_component(&self.keyword),
            self.limit,
            self.page,
            self.sort.wire_value()
        )
    }

    /// Query string for `GET /laptops/search`.
    #[must_use]
    pub fn api_query(&self) -> String {
        build_search_query(&self.keyword, self.limit.get(), self.page, self.sort)
    }
}

/// `URLSearchParams`-style decoding: `+` is a space, then percent-decoding.
/// Invalid UTF-8 is replaced rather than rejected.
fn decode_form_value(raw: &str) -> Cow<'_, str> {
    if raw.contains('+') {
        let spaced = raw.replace('+', " ");
        Cow::Owned(percent_decode_str(&spaced).decode_utf8_lossy().into_owned())
    } else {
        percent_decode_str(raw).decode_utf8_lossy()
    }
}

pub struct SearchPage {
    keyword: String,
    pagination: Pagination<SearchSort, NonZeroU32>,
    products: Vec<ProductDisplayRecord>,
    sequence: FetchSequence,
    locator: ImageLocator,
    notifier: Arc<dyn Notifier>,
}

impl SearchPage {
    #[must_use]
    pub fn new(params: &SearchParams, locator: ImageLocator, notifier: Arc<dyn Notifier>) -> Self {
        let mut pagination = Pagination::new(params.limit);
        pagination.change_sort(params.sort);
        pagination.select_page(params.page);
        Self {
            keyword: params.keyword.clone(),
            pagination,
            products: Vec::new(),
            sequence: FetchSequence::default(),
            locator,
            notifier,
        }
    }

    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    #[must_use]
    pub fn pagination(&self) -> &Pagination<SearchSort, NonZeroU32> {
        &self.pagination
    }

    #[must_use]
    pub fn products(&self) -> &[ProductDisplayRecord] {
        &self.products
    }

    #[must_use]
    pub fn display_range(&self) -> DisplayRange {
        self.pagination.display_range()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.sequence.is_loading()
    }

    #[must_use]
    pub fn params(&self) -> SearchParams {
        SearchParams {
            keyword: self.keyword.clone(),
            limit: self.pagination.page_size(),
            page: self.pagination.current_page(),
            sort: self.pagination.sort(),
        }
    }

    /// Navigation URL for a newly submitted search term, starting at page 1
    /// with the current limit and sort. `None` for a blank term.
    #[must_use]
    pub fn submit(&self, term: &str) -> Option<String> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }
        let params = SearchParams {
            keyword: term.to_owned(),
            page: 1,
            ..self.params()
        };
        Some(params.to_url())
    }

    /// Replaces the state with `params` (the URL changed) and starts a fetch.
    ///
    /// A blank keyword clears the results and returns `None`: no request.
    pub fn navigate(&mut self, params: &SearchParams) -> Option<FetchTicket> {
        self.keyword.clone_from(&params.keyword);
        self.pagination.change_page_size(params.limit);
        self.pagination.change_sort(params.sort);
        self.pagination.select_page(params.page);
        self.begin_fetch()
    }

    pub fn select_page(&mut self, page: u32) -> Option<FetchTicket> {
        self.pagination.select_page(page);
        self.begin_fetch()
    }

    pub fn change_sort(&mut self, sort: SearchSort) -> Option<FetchTicket> {
        self.pagination.change_sort(sort);
        self.begin_fetch()
    }

    pub fn change_page_size(&mut self, size: NonZeroU32) -> Option<FetchTicket> {
        self.pagination.change_page_size(size);
        self.begin_fetch()
    }

    /// Starts a fetch for the current state, or clears the results when the
    /// keyword is blank.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.keyword.trim().is_empty() {
            self.sequence.cancel();
            self.products.clear();
            self.pagination.set_total_count(0);
            return None;
        }
        let ticket = self.sequence.issue(self.params().api_query());
        tracing::debug!(seq = ticket.seq(), query = ticket.query(), "search fetch issued");
        Some(ticket)
    }

    /// Applies the outcome of `ticket`'s request. Returns `false` for a
    /// superseded ticket.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<ListingResponse, ClientError>,
    ) -> bool {
        if !self.sequence.settle(ticket) {
            tracing::debug!(seq = ticket.seq(), "discarding stale search response");
            return false;
        }

        match result {
            Ok(listing) => {
                self.pagination.set_total_count(listing.total_count);
                self.products = transform_products(listing.results, &self.locator);
            }
            Err(e) => {
                tracing::error!(
                    seq = ticket.seq(),
                    keyword = %self.keyword,
                    error = %e,
                    "search failed"
                );
                self.products.clear();
                self.pagination.set_total_count(0);
                self.notifier.error(SEARCH_FAILED_NOTICE);
            }
        }
        true
    }

    pub async fn run(&mut self, ticket: FetchTicket, client: &StorefrontClient) -> bool {
        let result = client.search(ticket.query()).await;
        self.complete(&ticket, result)
    }

    /// Fetches the current state. Returns `false` when no request was made
    /// or the response was stale.
    pub async fn refresh(&mut self, client: &StorefrontClient) -> bool {
        match self.begin_fetch() {
            Some(ticket) => self.run(ticket, client).await,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use lapstore_core::TracingNotifier;

    use super::*;

    fn limit(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    fn search_page(query: &str) -> SearchPage {
        SearchPage::new(
            &SearchParams::from_query(query, limit(35)),
            ImageLocator::new("http://localhost:8000", "/placeholder.png"),
            Arc::new(TracingNotifier),
        )
    }

    #[test]
    fn params_parse_from_url() {
        let params = SearchParams::from_query(
            "?query=asus%20rog+strix&limit=15&page=3&sort=price_asc",
            limit(35),
        );
        assert_eq!(params.keyword, "asus rog strix");
        assert_eq!(params.limit, limit(15));
        assert_eq!(params.page, 3);
        assert_eq!(params.sort, SearchSort::PriceAsc);
    }

    #[test]
    fn params_fall_back_to_defaults() {
        let params =
            SearchParams::from_query("query=x&limit=abc&page=-2&sort=cheapest", limit(50));
        assert_eq!(params.limit, limit(50));
        assert_eq!(params.page, 1);
        assert_eq!(params.sort, SearchSort::Relevant);

        let params = SearchParams::from_query("limit=0", limit(35));
        assert_eq!(params.limit, limit(35));
        assert_eq!(params.keyword, "");
    }

    #[test]
    fn limit_outside_listing_choices_is_kept() {
        let params = SearchParams::from_query("query=hp&limit=20", limit(35));
        assert_eq!(params.limit, limit(20));
        assert_eq!(params.api_query(), "?query=hp&limit=20&page=1");
        assert_eq!(params.to_url(), "/search?query=hp&limit=20&page=1&sort=relevant");

        let mut page = search_page("query=hp&limit=20&page=2");
        let ticket = page.begin_fetch().unwrap();
        assert_eq!(ticket.query(), "?query=hp&limit=20&page=2");
        assert_eq!(page.params().limit, limit(20));
    }

    #[test]
    fn params_url_round_trips() {
        let params = SearchParams {
            keyword: "dell xps 13".into(),
            limit: limit(50),
            page: 2,
            sort: SearchSort::Latest,
        };
        let url = params.to_url();
        assert_eq!(url, "/search?query=dell%20xps%2013&limit=50&page=2&sort=latest");
        let query = url.strip_prefix("/search").unwrap();
        assert_eq!(SearchParams::from_query(query, limit(35)), params);
    }

    #[test]
    fn blank_keyword_clears_without_request() {
        let mut page = search_page("query=%20%20");
        assert!(page.begin_fetch().is_none());
        assert!(page.products().is_empty());
        assert_eq!(page.pagination().total_count(), 0);
        assert!(!page.is_loading());
    }

    #[test]
    fn submit_builds_navigation_url() {
        let mut page = search_page("query=old&limit=15&page=4&sort=price_desc");
        assert_eq!(
            page.submit("  gaming laptop "),
            Some("/search?query=gaming%20laptop&limit=15&page=1&sort=price_desc".to_owned())
        );
        assert_eq!(page.submit("   "), None);
        // Submitting does not change state until the URL is navigated to.
        assert_eq!(page.keyword(), "old");
        let _ = page.select_page(2);
        assert_eq!(page.pagination().current_page(), 2);
    }

    #[test]
    fn sort_and_limit_changes_reset_page() {
        let mut page = search_page("query=hp&page=5");
        let ticket = page.change_sort(SearchSort::Latest).unwrap();
        assert_eq!(page.pagination().current_page(), 1);
        assert_eq!(ticket.query(), "?query=hp&limit=35&page=1&sort=latest");

        let _ = page.select_page(3);
        let ticket = page.change_page_size(limit(15)).unwrap();
        assert_eq!(page.pagination().current_page(), 1);
        assert_eq!(ticket.query(), "?query=hp&limit=15&page=1&sort=latest");
    }

    #[test]
    fn relevant_sort_is_omitted_from_api_query() {
        let mut page = search_page("query=msi");
        let ticket = page.begin_fetch().unwrap();
        assert_eq!(ticket.query(), "?query=msi&limit=35&page=1");
    }

    #[test]
    fn failure_clears_results() {
        let mut page = search_page("query=acer");
        let ticket = page.begin_fetch().unwrap();
        let listing = ListingResponse {
            results: Vec::new(),
            total_count: 7,
        };
        assert!(page.complete(&ticket, Ok(listing)));
        assert_eq!(page.pagination().total_count(), 7);

        let ticket = page.select_page(2).unwrap();
        assert!(page.complete(&ticket, Err(ClientError::NotFound { url: "x".into() })));
        assert_eq!(page.pagination().total_count(), 0);
        assert!(page.products().is_empty());
    }

    #[test]
    fn navigate_replaces_state_and_discards_older_ticket() {
        let mut page = search_page("query=asus");
        let older = page.begin_fetch().unwrap();
        let newer = page
            .navigate(&SearchParams::from_query("query=lenovo&page=2", limit(35)))
            .unwrap();
        assert_eq!(page.keyword(), "lenovo");
        assert_eq!(page.pagination().current_page(), 2);
        assert!(!page.complete(&older, Ok(ListingResponse::default())));
        assert!(page.complete(&newer, Ok(ListingResponse::default())));
    }
}
