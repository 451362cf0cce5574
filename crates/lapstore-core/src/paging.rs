//! Page, page size and sort tracking for the listing and search pages.
//!
//! Every mutator resets whatever it invalidates: a new sort order or page
//! size changes the frame of reference, so the page goes back to 1. Selecting
//! a page touches nothing else.

use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// Page sizes offered by the "Show: N per page" selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageSize {
    Fifteen,
    #[default]
    ThirtyFive,
    Fifty,
}

impl PageSize {
    pub const CHOICES: [PageSize; 3] = [PageSize::Fifteen, PageSize::ThirtyFive, PageSize::Fifty];

    #[must_use]
    pub fn get(self) -> u32 {
        match self {
            PageSize::Fifteen => 15,
            PageSize::ThirtyFive => 35,
            PageSize::Fifty => 50,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = CatalogError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        PageSize::CHOICES
            .into_iter()
            .find(|p| p.get() == value)
            .ok_or(CatalogError::UnsupportedPageSize(value))
    }
}

impl From<PageSize> for u32 {
    fn from(value: PageSize) -> Self {
        value.get()
    }
}

impl From<PageSize> for NonZeroU32 {
    fn from(value: PageSize) -> Self {
        NonZeroU32::new(value.get()).unwrap_or(NonZeroU32::MIN)
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Sort criteria on the catalog listing page, keyed by their UI values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ListingSort {
    #[default]
    #[serde(rename = "latest")]
    Latest,
    #[serde(rename = "price-low")]
    PriceLow,
    #[serde(rename = "price-high")]
    PriceHigh,
    #[serde(rename = "sale")]
    Sale,
}

impl ListingSort {
    pub const ALL: [ListingSort; 4] = [
        ListingSort::Latest,
        ListingSort::PriceLow,
        ListingSort::PriceHigh,
        ListingSort::Sale,
    ];

    #[must_use]
    pub fn ui_value(self) -> &'static str {
        match self {
            ListingSort::Latest => "latest",
            ListingSort::PriceLow => "price-low",
            ListingSort::PriceHigh => "price-high",
            ListingSort::Sale => "sale",
        }
    }

    /// Token sent as `sort=` to `GET /laptops/filter`.
    #[must_use]
    pub fn wire_value(self) -> &'static str {
        match self {
            ListingSort::Latest => "latest",
            ListingSort::PriceLow => "price_asc",
            ListingSort::PriceHigh => "price_desc",
            ListingSort::Sale => "sale",
        }
    }
}

impl FromStr for ListingSort {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListingSort::ALL
            .into_iter()
            .find(|c| c.ui_value() == s)
            .ok_or_else(|| CatalogError::UnknownSort(s.to_string()))
    }
}

/// Sort criteria on the search results page. UI and wire values coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchSort {
    #[default]
    Relevant,
    Latest,
    PriceAsc,
    PriceDesc,
}

impl SearchSort {
    pub const ALL: [SearchSort; 4] = [
        SearchSort::Relevant,
        SearchSort::Latest,
        SearchSort::PriceAsc,
        SearchSort::PriceDesc,
    ];

    #[must_use]
    pub fn wire_value(self) -> &'static str {
        match self {
            SearchSort::Relevant => "relevant",
            SearchSort::Latest => "latest",
            SearchSort::PriceAsc => "price_asc",
            SearchSort::PriceDesc => "price_desc",
        }
    }
}

impl FromStr for SearchSort {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchSort::ALL
            .into_iter()
            .find(|c| c.wire_value() == s)
            .ok_or_else(|| CatalogError::UnknownSort(s.to_string()))
    }
}

/// The "Items X-Y of N" line under the sort controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRange {
    pub from: u64,
    pub to: u64,
    pub total: u64,
}

impl std::fmt::Display for DisplayRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Items {}-{} of {}", self.from, self.to, self.total)
    }
}

/// Page/sort position of a result list, generic over the page's sort
/// vocabulary and its page-size type. The listing uses the fixed
/// [`PageSize`] choices; search accepts any positive limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination<S, L = PageSize> {
    page: u32,
    page_size: L,
    sort: S,
    total_count: u64,
}

impl<S: Copy + Default> Default for Pagination<S> {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl<S: Copy + Default, L> Pagination<S, L> {
    #[must_use]
    pub fn new(page_size: L) -> Self {
        Self {
            page: 1,
            page_size,
            sort: S::default(),
            total_count: 0,
        }
    }
}

impl<S: Copy, L: Copy + Into<u32>> Pagination<S, L> {
    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> L {
        self.page_size
    }

    #[must_use]
    pub fn sort(&self) -> S {
        self.sort
    }

    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Moves to page `n` (clamped to 1). Nothing else changes.
    pub fn select_page(&mut self, n: u32) {
        self.page = n.max(1);
    }

    /// Changes the sort order and returns to the first page.
    pub fn change_sort(&mut self, sort: S) {
        self.sort = sort;
        self.page = 1;
    }

    /// Changes the page size and returns to the first page.
    pub fn change_page_size(&mut self, size: L) {
        self.page_size = size;
        self.page = 1;
    }

    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    pub fn set_total_count(&mut self, total: u64) {
        self.total_count = total;
    }

    /// Number of pages needed for the current total.
    #[must_use]
    pub fn page_count(&self) -> u64 {
        self.limit().map_or(0, |limit| self.total_count.div_ceil(limit))
    }

    /// Page size as a count; `None` for a zero limit.
    fn limit(&self) -> Option<u64> {
        let size: u32 = self.page_size.into();
        Some(u64::from(size)).filter(|&n| n > 0)
    }

    #[must_use]
    pub fn display_range(&self) -> DisplayRange {
        let limit = self.limit().unwrap_or(1);
        let page = u64::from(self.page);
        let total = self.total_count;
        let from = if total == 0 { 0 } else { (page - 1) * limit + 1 };
        let to = (page * limit).min(total);
        DisplayRange { from, to, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Pagination<ListingSort> {
        Pagination::new(PageSize::ThirtyFive)
    }

    #[test]
    fn page_size_accepts_only_offered_choices() {
        assert_eq!(PageSize::try_from(15), Ok(PageSize::Fifteen));
        assert_eq!(PageSize::try_from(50), Ok(PageSize::Fifty));
        assert_eq!(
            PageSize::try_from(20),
            Err(CatalogError::UnsupportedPageSize(20))
        );
    }

    #[test]
    fn listing_sort_maps_ui_to_wire_values() {
        assert_eq!("latest".parse::<ListingSort>().unwrap().wire_value(), "latest");
        assert_eq!("price-low".parse::<ListingSort>().unwrap().wire_value(), "price_asc");
        assert_eq!("price-high".parse::<ListingSort>().unwrap().wire_value(), "price_desc");
        assert_eq!("sale".parse::<ListingSort>().unwrap().wire_value(), "sale");
        assert!("price_asc".parse::<ListingSort>().is_err());
    }

    #[test]
    fn search_sort_parses_wire_values() {
        assert_eq!("price_desc".parse::<SearchSort>(), Ok(SearchSort::PriceDesc));
        assert!("price-high".parse::<SearchSort>().is_err());
    }

    #[test]
    fn select_page_keeps_sort_and_size() {
        let mut p = listing();
        p.change_sort(ListingSort::Sale);
        p.select_page(4);
        assert_eq!(p.current_page(), 4);
        assert_eq!(p.sort(), ListingSort::Sale);
        assert_eq!(p.page_size(), PageSize::ThirtyFive);
    }

    #[test]
    fn select_page_zero_clamps_to_one() {
        let mut p = listing();
        p.select_page(0);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn change_sort_resets_page() {
        let mut p = listing();
        p.select_page(3);
        p.change_sort(ListingSort::PriceHigh);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn change_page_size_resets_page() {
        let mut p = listing();
        p.select_page(3);
        p.change_page_size(PageSize::Fifteen);
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.page_size(), PageSize::Fifteen);
    }

    #[test]
    fn display_range_first_page() {
        let mut p = listing();
        p.set_total_count(100);
        assert_eq!(
            p.display_range(),
            DisplayRange {
                from: 1,
                to: 35,
                total: 100
            }
        );
    }

    #[test]
    fn display_range_last_partial_page() {
        let mut p = listing();
        p.set_total_count(100);
        p.select_page(3);
        let range = p.display_range();
        assert_eq!((range.from, range.to), (71, 100));
        assert_eq!(range.to_string(), "Items 71-100 of 100");
    }

    #[test]
    fn display_range_empty_result_starts_at_zero() {
        let p = listing();
        let range = p.display_range();
        assert_eq!((range.from, range.to, range.total), (0, 0, 0));
    }

    #[test]
    fn page_count_rounds_up() {
        let mut p = listing();
        assert_eq!(p.page_count(), 0);
        p.set_total_count(36);
        assert_eq!(p.page_count(), 2);
        p.set_total_count(35);
        assert_eq!(p.page_count(), 1);
    }

    #[test]
    fn free_form_limit_drives_range_and_count() {
        let limit = NonZeroU32::new(20).unwrap();
        let mut p: Pagination<SearchSort, NonZeroU32> = Pagination::new(limit);
        p.set_total_count(45);
        p.select_page(3);
        assert_eq!(p.page_count(), 3);
        assert_eq!(p.display_range().to_string(), "Items 41-45 of 45");
    }

    #[test]
    fn page_size_converts_to_non_zero_limit() {
        assert_eq!(NonZeroU32::from(PageSize::Fifteen).get(), 15);
    }
}
