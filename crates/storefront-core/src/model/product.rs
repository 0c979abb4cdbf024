// Canonical product model, normalized from the upstream catalog shape
// in `crate::convert`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, Matchable, Status};

/// Canonical product. Upstream `title` becomes `name`; `stock` is
/// synthesized at normalization time because the catalog carries none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub category: String,
    pub status: Status,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

impl Entity for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Matchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn facet(&self) -> Option<&str> {
        Some(&self.category)
    }
}

#[derive(Debug, Clone)]
pub struct CreateProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
}

/// Partial update; `None` fields are left unchanged upstream.
#[derive(Debug, Clone, Default)]
pub struct UpdateProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub image: Option<String>,
}

impl UpdateProductInput {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.image.is_none()
    }
}
