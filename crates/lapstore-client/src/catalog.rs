//! Catalog page controller: brand, filters, pagination and the product grid.
//!
//! State transitions are synchronous. Every transition that changes what the
//! grid should show returns a [`FetchTicket`]; the caller sends the request
//! (usually via [`CatalogPage::run`]) and hands the result to
//! [`CatalogPage::complete`]. Responses for superseded tickets are dropped.

use std::sync::Arc;

use lapstore_core::{
    build_filter_query, Brand, DisplayRange, FilterCategory, FilterStore, FilterUpdate,
    ListingQuery, ListingSort, Notifier, PageSize, Pagination, ProductDisplayRecord,
};

use crate::client::StorefrontClient;
use crate::error::ClientError;
use crate::normalize::{transform_products, ImageLocator};
use crate::sequence::{FetchSequence, FetchTicket};
use crate::types::ListingResponse;

pub const LOAD_FAILED_NOTICE: &str = "Failed to load products";

pub struct CatalogPage {
    brand: Brand,
    filters: FilterStore,
    pagination: Pagination<ListingSort>,
    products: Vec<ProductDisplayRecord>,
    sequence: FetchSequence,
    locator: ImageLocator,
    notifier: Arc<dyn Notifier>,
}

impl CatalogPage {
    #[must_use]
    pub fn new(
        brand: Brand,
        page_size: PageSize,
        locator: ImageLocator,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            brand,
            filters: FilterStore::default(),
            pagination: Pagination::new(page_size),
            products: Vec::new(),
            sequence: FetchSequence::default(),
            locator,
            notifier,
        }
    }

    #[must_use]
    pub fn brand(&self) -> Brand {
        self.brand
    }

    #[must_use]
    pub fn filters(&self) -> &FilterStore {
        &self.filters
    }

    #[must_use]
    pub fn pagination(&self) -> &Pagination<ListingSort> {
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

    /// True while the most recent fetch has not been completed.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.sequence.is_loading()
    }

    /// Query string for the current brand, page, sort and applied filters.
    #[must_use]
    pub fn current_query(&self) -> String {
        build_filter_query(&ListingQuery {
            brand: self.brand,
            page: self.pagination.current_page(),
            limit: self.pagination.page_size(),
            sort: self.pagination.sort(),
            filters: self.filters.applied(),
        })
    }

    /// Starts a fetch for the current state. Used for the initial load.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        let ticket = self.sequence.issue(self.current_query());
        tracing::debug!(seq = ticket.seq(), query = ticket.query(), "catalog fetch issued");
        ticket
    }

    /// Edits the pending filters. Does not fetch.
    pub fn update_pending(&mut self, update: FilterUpdate) {
        self.filters.update_pending(update);
    }

    /// Toggles one checkbox in the pending filters. Does not fetch.
    pub fn toggle_pending(&mut self, category: FilterCategory, label: &str) {
        self.filters.toggle_pending(category, label);
    }

    pub fn apply_filters(&mut self) -> FetchTicket {
        self.filters.apply();
        self.pagination.reset_page();
        self.begin_fetch()
    }

    pub fn clear_filters(&mut self) -> FetchTicket {
        self.filters.clear();
        self.pagination.reset_page();
        self.begin_fetch()
    }

    pub fn select_page(&mut self, page: u32) -> FetchTicket {
        self.pagination.select_page(page);
        self.begin_fetch()
    }

    pub fn change_sort(&mut self, sort: ListingSort) -> FetchTicket {
        self.pagination.change_sort(sort);
        self.begin_fetch()
    }

    pub fn change_page_size(&mut self, size: PageSize) -> FetchTicket {
        self.pagination.change_page_size(size);
        self.begin_fetch()
    }

    /// Switches brand, keeping filters and sort, and returns to page 1.
    pub fn set_brand(&mut self, brand: Brand) -> FetchTicket {
        self.brand = brand;
        self.pagination.reset_page();
        self.begin_fetch()
    }

    /// Applies the outcome of `ticket`'s request.
    ///
    /// Returns `false` (state untouched) if the ticket has been superseded.
    /// On error the grid is emptied, the total zeroed and one error notice is
    /// raised.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<ListingResponse, ClientError>,
    ) -> bool {
        if !self.sequence.settle(ticket) {
            tracing::debug!(seq = ticket.seq(), "discarding stale catalog response");
            return false;
        }

        match result {
            Ok(listing) => {
                self.pagination.set_total_count(listing.total_count);
                self.products = transform_products(listing.results, &self.locator);
                tracing::debug!(
                    seq = ticket.seq(),
                    count = self.products.len(),
                    total = listing.total_count,
                    "catalog page loaded"
                );
            }
            Err(e) => {
                tracing::error!(seq = ticket.seq(), error = %e, "catalog fetch failed");
                self.products.clear();
                self.pagination.set_total_count(0);
                self.notifier.error(LOAD_FAILED_NOTICE);
            }
        }
        true
    }

    /// Sends `ticket`'s request through `client` and completes it.
    pub async fn run(&mut self, ticket: FetchTicket, client: &StorefrontClient) -> bool {
        let result = client.fetch_listing(ticket.query()).await;
        self.complete(&ticket, result)
    }

    /// Initial load: [`CatalogPage::begin_fetch`] followed by [`CatalogPage::run`].
    pub async fn refresh(&mut self, client: &StorefrontClient) -> bool {
        let ticket = self.begin_fetch();
        self.run(ticket, client).await
    }
}
