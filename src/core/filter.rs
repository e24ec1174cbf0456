use indexmap::IndexSet;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::ListingRecord;

/// Maximum number of filtered records shown by either chart.
pub const DEFAULT_VIEW_LIMIT: usize = 10;

/// Set of manufacturer names currently selected by the user.
///
/// Replaced wholesale on every selection event; equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    selected: IndexSet<String>,
}

impl FilterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the state from the options picked in the selection control.
    /// Repeated names collapse into one entry.
    #[must_use]
    pub fn from_selection<I, S>(selection: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected: selection.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, manufacturer: &str) -> bool {
        self.selected.contains(manufacturer)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }
}

/// Working subset of the dataset that both charts draw.
///
/// Always derived from scratch; never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilteredView {
    records: Vec<ListingRecord>,
}

impl FilteredView {
    /// Keeps records whose manufacturer is selected, in dataset order, and
    /// truncates to [`DEFAULT_VIEW_LIMIT`].
    ///
    /// An empty filter selects nothing.
    #[must_use]
    pub fn build(dataset: &[ListingRecord], filter: &FilterState) -> Self {
        Self::build_with_limit(dataset, filter, DEFAULT_VIEW_LIMIT)
    }

    #[must_use]
    pub fn build_with_limit(dataset: &[ListingRecord], filter: &FilterState, limit: usize) -> Self {
        if filter.is_empty() {
            return Self::default();
        }

        let records = dataset
            .iter()
            .filter(|record| filter.contains(&record.manufacturer))
            .take(limit)
            .cloned()
            .collect();
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[ListingRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Largest price in the view, `0.0` when empty.
    #[must_use]
    pub fn max_price(&self) -> f64 {
        self.records
            .iter()
            .map(|record| OrderedFloat(record.price))
            .max()
            .map_or(0.0, |max| max.0)
    }

    /// Distinct manufacturers in order of first appearance.
    #[must_use]
    pub fn manufacturers(&self) -> IndexSet<&str> {
        self.records
            .iter()
            .map(|record| record.manufacturer.as_str())
            .collect()
    }
}

/// Entries for the manufacturer selection control: every distinct
/// manufacturer of the dataset, in dataset order.
#[must_use]
pub fn manufacturer_options(dataset: &[ListingRecord]) -> Vec<String> {
    let distinct: IndexSet<&str> = dataset
        .iter()
        .map(|record| record.manufacturer.as_str())
        .collect();
    distinct.into_iter().map(str::to_owned).collect()
}
