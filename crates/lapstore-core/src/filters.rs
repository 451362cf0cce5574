//! Pending vs. applied filter selections for the catalog page.
//!
//! The filter panel edits `pending` freely; only [`FilterStore::apply`] and
//! [`FilterStore::clear`] touch `applied`, which is what the listing query is
//! built from.

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::FilterCategory;

pub const PRICE_MIN: u64 = 3_000_000;
pub const PRICE_MAX: u64 = 180_000_000;
pub const WEIGHT_MIN: f64 = 0.5;
pub const WEIGHT_MAX: f64 = 5.0;

/// Sale-price bounds in VND. Always within `[PRICE_MIN, PRICE_MAX]` with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min: u64,
    max: u64,
}

impl PriceRange {
    /// Clamps both bounds into the allowed interval. A minimum above the
    /// maximum is lowered to the maximum.
    #[must_use]
    pub fn new(min: u64, max: u64) -> Self {
        let max = max.clamp(PRICE_MIN, PRICE_MAX);
        let min = min.clamp(PRICE_MIN, PRICE_MAX).min(max);
        Self { min, max }
    }

    #[must_use]
    pub fn min(&self) -> u64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> u64 {
        self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: PRICE_MIN,
            max: PRICE_MAX,
        }
    }
}

/// Weight bounds in kilograms. Always within `[WEIGHT_MIN, WEIGHT_MAX]` with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightRange {
    min: f64,
    max: f64,
}

impl WeightRange {
    /// Same clamping policy as [`PriceRange::new`]. NaN bounds fall back to
    /// the corresponding default bound.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let max = if max.is_nan() {
            WEIGHT_MAX
        } else {
            max.clamp(WEIGHT_MIN, WEIGHT_MAX)
        };
        let min = if min.is_nan() {
            WEIGHT_MIN
        } else {
            min.clamp(WEIGHT_MIN, WEIGHT_MAX)
        };
        Self {
            min: min.min(max),
            max,
        }
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }
}

impl Default for WeightRange {
    fn default() -> Self {
        Self {
            min: WEIGHT_MIN,
            max: WEIGHT_MAX,
        }
    }
}

/// One complete set of filter selections.
///
/// Every [`FilterCategory`] is always present in `selected`; a category with
/// nothing ticked maps to an empty set. Sets keep labels sorted so the
/// serialized query does not depend on the order boxes were ticked.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    selected: BTreeMap<FilterCategory, BTreeSet<String>>,
    pub price_range: PriceRange,
    pub weight_range: WeightRange,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            selected: FilterCategory::ALL
                .into_iter()
                .map(|c| (c, BTreeSet::new()))
                .collect(),
            price_range: PriceRange::default(),
            weight_range: WeightRange::default(),
        }
    }
}

impl FilterState {
    /// Labels selected in `category`, in sorted order.
    pub fn selected(&self, category: FilterCategory) -> impl Iterator<Item = &str> {
        self.selected
            .get(&category)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    #[must_use]
    pub fn is_selected(&self, category: FilterCategory, label: &str) -> bool {
        self.selected
            .get(&category)
            .is_some_and(|set| set.contains(label))
    }

    /// Categories with their selections, in query order. Empty categories included.
    pub fn categories(&self) -> impl Iterator<Item = (FilterCategory, &BTreeSet<String>)> {
        self.selected.iter().map(|(c, set)| (*c, set))
    }

    /// Adds `label` to `category` if absent, removes it if present.
    pub fn toggle(&mut self, category: FilterCategory, label: &str) {
        let set = self.selected.entry(category).or_default();
        if !set.remove(label) {
            set.insert(label.to_string());
        }
    }

    /// Total number of ticked labels across all categories.
    #[must_use]
    pub fn selection_count(&self) -> usize {
        self.selected.values().map(BTreeSet::len).sum()
    }
}

/// A partial edit coming from the filter panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterUpdate {
    pub toggles: Vec<(FilterCategory, String)>,
    pub price_range: Option<(u64, u64)>,
    pub weight_range: Option<(f64, f64)>,
}

impl FilterUpdate {
    #[must_use]
    pub fn toggle(category: FilterCategory, label: impl Into<String>) -> Self {
        Self {
            toggles: vec![(category, label.into())],
            ..Self::default()
        }
    }

    #[must_use]
    pub fn price(min: u64, max: u64) -> Self {
        Self {
            price_range: Some((min, max)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn weight(min: f64, max: f64) -> Self {
        Self {
            weight_range: Some((min, max)),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterStore {
    pending: FilterState,
    applied: FilterState,
}

impl FilterStore {
    #[must_use]
    pub fn pending(&self) -> &FilterState {
        &self.pending
    }

    #[must_use]
    pub fn applied(&self) -> &FilterState {
        &self.applied
    }

    /// Merges an edit into `pending`. Ranges are replaced (after clamping),
    /// checkbox labels are toggled. `applied` is untouched.
    pub fn update_pending(&mut self, update: FilterUpdate) {
        for (category, label) in &update.toggles {
            self.pending.toggle(*category, label);
        }
        if let Some((min, max)) = update.price_range {
            self.pending.price_range = PriceRange::new(min, max);
        }
        if let Some((min, max)) = update.weight_range {
            self.pending.weight_range = WeightRange::new(min, max);
        }
    }

    pub fn toggle_pending(&mut self, category: FilterCategory, label: &str) {
        self.pending.toggle(category, label);
    }

    /// Commits `pending` as the new `applied` state.
    pub fn apply(&mut self) {
        self.applied = self.pending.clone();
    }

    /// Resets both states to defaults.
    pub fn clear(&mut self) {
        self.pending = FilterState::default();
        self.applied = FilterState::default();
    }
}
