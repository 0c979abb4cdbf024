// ── Query layer ──
//
// Pure view derivation over a collection snapshot. Deriving never
// mutates the store: the same state and query always yield the same
// page. Order is fixed: search narrows first, then the facet filter,
// then pagination slices whatever remains.

use serde::Serialize;

use crate::envelope::PageMeta;
use crate::model::{FilterCriteria, Matchable};
use crate::store::CollectionState;

/// Page request for a derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-indexed page. Zero is treated as 1.
    pub page: usize,
    pub limit: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl ListQuery {
    #[must_use]
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }
}

/// One derived page plus its pagination summary.
#[derive(Debug, Clone, Serialize)]
pub struct PageView<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

/// Case-insensitive substring match over an entity's search fields.
/// An empty term matches everything.
#[must_use]
pub fn matches_search<T: Matchable>(entity: &T, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    entity
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Exact facet match. `None` matches everything.
#[must_use]
pub fn matches_facet<T: Matchable>(entity: &T, facet: Option<&str>) -> bool {
    match facet {
        None => true,
        Some(wanted) => entity.facet() == Some(wanted),
    }
}

/// Apply search then facet, preserving input order.
#[must_use]
pub fn apply_filters<'a, T: Matchable>(
    items: &'a [T],
    criteria: &FilterCriteria,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|e| matches_search(*e, &criteria.search))
        .filter(|e| matches_facet(*e, criteria.facet.as_deref()))
        .collect()
}

/// Derive a page view: filter, then slice. An out-of-range page yields
/// an empty item list with truthful meta.
#[must_use]
pub fn derive_view<T: Matchable>(state: &CollectionState<T>, query: ListQuery) -> PageView<T> {
    let filtered = apply_filters(&state.items, &state.filters);
    let total = filtered.len();
    let limit = query.limit.max(1);
    let page = query.page.max(1);
    let total_pages = total.div_ceil(limit).max(1);
    let start = (page - 1).saturating_mul(limit);

    let items: Vec<T> = filtered
        .into_iter()
        .skip(start)
        .take(limit)
        .cloned()
        .collect();

    PageView {
        items,
        meta: PageMeta {
            page,
            limit,
            total,
            total_pages,
        },
    }
}

/// Derive the page the state itself points at (its stored page/limit).
#[must_use]
pub fn current_view<T: Matchable>(state: &CollectionState<T>) -> PageView<T> {
    derive_view(state, ListQuery::new(state.page, state.limit))
}
