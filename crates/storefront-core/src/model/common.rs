// Shared model vocabulary: lifecycle status and the filter shape the
// store tracks per collection.

use serde::{Deserialize, Serialize};

/// Lifecycle status shared by users and products.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Inactive,
    Pending,
    Deleted,
}

impl Status {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
            Self::Deleted => "deleted",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter criteria tracked by the store for one collection. The search
/// term and the facet value (role or category) participate in view
/// derivation; page and page size live in [`crate::query::ListQuery`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring search. Empty means "match all".
    #[serde(default)]
    pub search: String,
    /// Exact facet match (user role / product category). `None` means
    /// "match all".
    #[serde(default)]
    pub facet: Option<String>,
}

impl FilterCriteria {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.facet.is_none()
    }
}

/// Shallow merge applied onto [`FilterCriteria`]: a `None` field leaves
/// the stored value untouched, a `Some` field replaces it. The facet is
/// doubly optional so callers can distinguish "leave alone" from
/// "clear".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub search: Option<String>,
    pub facet: Option<Option<String>>,
}

impl FilterPatch {
    #[must_use]
    pub fn search(search: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn facet(facet: Option<String>) -> Self {
        Self {
            facet: Some(facet),
            ..Self::default()
        }
    }

    pub fn apply_to(&self, criteria: &mut FilterCriteria) {
        if let Some(search) = &self.search {
            criteria.search.clone_from(search);
        }
        if let Some(facet) = &self.facet {
            criteria.facet.clone_from(facet);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_merges_shallowly() {
        let mut criteria = FilterCriteria {
            search: "lamp".into(),
            facet: Some("home".into()),
        };

        FilterPatch::search("desk").apply_to(&mut criteria);
        assert_eq!(criteria.search, "desk");
        assert_eq!(criteria.facet.as_deref(), Some("home"));

        FilterPatch::facet(None).apply_to(&mut criteria);
        assert_eq!(criteria.search, "desk");
        assert!(criteria.facet.is_none());
    }

    #[test]
    fn empty_patch_is_identity() {
        let mut criteria = FilterCriteria {
            search: "x".into(),
            facet: Some("y".into()),
        };
        let before = criteria.clone();
        FilterPatch::default().apply_to(&mut criteria);
        assert_eq!(criteria, before);
    }
}
