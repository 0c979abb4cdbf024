// ── Collection state machine ──
//
// Deterministic transitions over one resource collection. Every method
// here is synchronous and side-effect free; the async world only
// touches this type through `StateCell::update` in `store::mod`, so the
// transitions can be tested exhaustively without a runtime.

use serde::Serialize;

use crate::model::{Entity, FilterCriteria, FilterPatch};

/// Snapshot of one resource collection.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionState<T> {
    pub items: Vec<T>,
    pub current: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub filters: FilterCriteria,
    pub page: usize,
    pub limit: usize,
    pub total: usize,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            loading: false,
            error: None,
            filters: FilterCriteria::default(),
            page: 1,
            limit: Self::DEFAULT_LIMIT,
            total: 0,
        }
    }
}

impl<T> CollectionState<T> {
    pub const DEFAULT_LIMIT: usize = 10;

    /// A load has started: raise the flag, clear any stale error.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// A collection load resolved with fresh items.
    pub fn load_succeeded(&mut self, items: Vec<T>) {
        self.total = items.len();
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// A load failed. Items are left as they were; the message falls
    /// back to a generic one so the error is never empty.
    pub fn load_failed(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.error = Some(if message.is_empty() {
            "Something went wrong".to_owned()
        } else {
            message
        });
        self.loading = false;
    }

    /// A detail fetch resolved: loading ends and the entity becomes
    /// current, without touching the collection.
    pub fn detail_succeeded(&mut self, entity: T) {
        self.current = Some(entity);
        self.loading = false;
        self.error = None;
    }

    pub fn set_current(&mut self, entity: Option<T>) {
        self.current = entity;
    }

    /// Merge a filter patch and snap back to the first page.
    pub fn set_filters(&mut self, patch: &FilterPatch) {
        patch.apply_to(&mut self.filters);
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.max(1);
        self.page = 1;
    }

    /// Clear the collection, the current selection, the error, and the
    /// derived page fields. Filter criteria survive a reset.
    pub fn reset(&mut self) {
        self.items = Vec::new();
        self.current = None;
        self.loading = false;
        self.error = None;
        self.page = 1;
        self.limit = Self::DEFAULT_LIMIT;
        self.total = 0;
    }
}

impl<T: Entity> CollectionState<T> {
    /// Insert or replace by id. A replaced entity that is also the
    /// current selection refreshes the selection; an insert goes to the
    /// end and bumps the total.
    pub fn upsert_one(&mut self, entity: T) {
        if let Some(slot) = self.items.iter_mut().find(|e| e.id() == entity.id()) {
            *slot = entity.clone();
        } else {
            self.items.push(entity.clone());
            self.total += 1;
        }
        if self
            .current
            .as_ref()
            .is_some_and(|c| c.id() == entity.id())
        {
            self.current = Some(entity);
        }
    }

    /// Remove by id. Absent ids are a no-op; the current selection is
    /// left alone even when it points at the removed entity, so detail
    /// views can keep showing what was just deleted.
    pub fn remove_one(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|e| e.id() != id);
        if self.items.len() < before {
            self.total = self.total.saturating_sub(before - self.items.len());
        }
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|e| e.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Widget {
        id: String,
        label: String,
    }

    impl Entity for Widget {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn widget(id: &str, label: &str) -> Widget {
        Widget {
            id: id.into(),
            label: label.into(),
        }
    }

    #[test]
    fn begin_load_clears_previous_error() {
        let mut state = CollectionState::<Widget>::default();
        state.load_failed("boom");
        assert_eq!(state.error.as_deref(), Some("boom"));

        state.begin_load();
        assert!(state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn load_succeeded_replaces_items_and_total() {
        let mut state = CollectionState::default();
        state.begin_load();
        state.load_succeeded(vec![widget("1", "a"), widget("2", "b")]);

        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.total, 2);
    }

    #[test]
    fn load_failed_keeps_items() {
        let mut state = CollectionState::default();
        state.load_succeeded(vec![widget("1", "a")]);
        state.begin_load();
        state.load_failed("upstream down");

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("upstream down"));
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn load_failed_never_leaves_empty_message() {
        let mut state = CollectionState::<Widget>::default();
        state.load_failed("");
        assert_eq!(state.error.as_deref(), Some("Something went wrong"));
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut state = CollectionState::default();
        state.load_succeeded(vec![widget("1", "a"), widget("2", "b")]);

        state.upsert_one(widget("2", "b2"));

        assert_eq!(state.items.len(), 2);
        assert_eq!(state.total, 2);
        assert_eq!(state.items[1].label, "b2");
    }

    #[test]
    fn upsert_appends_unknown_id() {
        let mut state = CollectionState::default();
        state.load_succeeded(vec![widget("1", "a")]);

        state.upsert_one(widget("9", "z"));

        assert_eq!(state.items.len(), 2);
        assert_eq!(state.total, 2);
        assert_eq!(state.items[1].id, "9");
    }

    #[test]
    fn upsert_refreshes_current_selection() {
        let mut state = CollectionState::default();
        state.load_succeeded(vec![widget("1", "a")]);
        state.set_current(Some(widget("1", "a")));

        state.upsert_one(widget("1", "a-prime"));

        assert_eq!(state.current.as_ref().map(|c| c.label.as_str()), Some("a-prime"));
    }

    #[test]
    fn remove_drops_by_id_and_decrements_total() {
        let mut state = CollectionState::default();
        state.load_succeeded(vec![widget("1", "a"), widget("2", "b")]);

        state.remove_one("1");

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.total, 1);
        assert!(state.find("1").is_none());
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut state = CollectionState::default();
        state.load_succeeded(vec![widget("1", "a")]);

        state.remove_one("404");

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.total, 1);
    }

    #[test]
    fn remove_keeps_current_selection() {
        let mut state = CollectionState::default();
        state.load_succeeded(vec![widget("1", "a")]);
        state.set_current(Some(widget("1", "a")));

        state.remove_one("1");

        assert!(state.items.is_empty());
        assert!(state.current.is_some());
    }

    #[test]
    fn set_filters_resets_page() {
        let mut state = CollectionState::<Widget>::default();
        state.page = 4;

        state.set_filters(&FilterPatch::search("lamp"));

        assert_eq!(state.page, 1);
        assert_eq!(state.filters.search, "lamp");
    }

    #[test]
    fn reset_clears_state_but_keeps_filters() {
        let mut state = CollectionState::default();
        state.load_succeeded(vec![widget("1", "a")]);
        state.set_current(Some(widget("1", "a")));
        state.set_filters(&FilterPatch::search("lamp"));
        state.set_filters(&FilterPatch::facet(Some("x".into())));
        state.load_failed("boom");

        state.reset();

        assert!(state.items.is_empty());
        assert!(state.current.is_none());
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.filters.search, "lamp");
        assert_eq!(state.filters.facet.as_deref(), Some("x"));
        assert_eq!(state.page, 1);
        assert_eq!(state.total, 0);
    }
}
