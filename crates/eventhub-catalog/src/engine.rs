//! Filter-then-sort pipeline and the browse page state that drives it.

use eventhub_core::types::{CategoryFilter, EventRecord, PriceTier, SortKey};
use tracing::debug;

use crate::catalog::Catalog;
use crate::filter::FilterCriteria;
use crate::sort::sort_events;

/// Narrow `events` by `criteria`, then order the survivors by `sort_key`.
///
/// Pure and deterministic: ties keep their relative order from `events`.
pub fn render<'a>(
    events: &'a [EventRecord],
    criteria: &FilterCriteria,
    sort_key: SortKey,
) -> Vec<&'a EventRecord> {
    let matcher = criteria.matcher();
    let mut out: Vec<&EventRecord> = events.iter().filter(|e| matcher.matches(e)).collect();
    sort_events(&mut out, sort_key);

    debug!(
        category = %criteria.category,
        price = %criteria.price,
        query = %criteria.query,
        sort = %sort_key,
        total = events.len(),
        matched = out.len(),
        "Rendered catalog"
    );
    out
}

// =============================================================================
// BrowseView
// =============================================================================

/// Selector state of the browse page.
///
/// Owned by the caller; each setter replaces one selector and the next
/// [`BrowseView::results`] call reflects it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseView {
    criteria: FilterCriteria,
    sort_key: SortKey,
}

impl BrowseView {
    pub fn new(sort_key: SortKey) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort_key,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        debug!(%category, "Category selected");
        self.criteria.category = category;
    }

    pub fn set_price_tier(&mut self, price: PriceTier) {
        debug!(%price, "Price tier selected");
        self.criteria.price = price;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        debug!(sort = %sort_key, "Sort key selected");
        self.sort_key = sort_key;
    }

    /// Restore every selector to "no restriction", keeping the sort key.
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    pub fn results<'a>(&self, catalog: &'a Catalog) -> Vec<&'a EventRecord> {
        render(catalog.events(), &self.criteria, self.sort_key)
    }
}
