// Raw response shapes for the product-catalog upstream.
//
// Numeric identifiers and the `title` field name are upstream quirks;
// normalization into the canonical `Product` shape happens in
// `storefront-core`. Text fields default to empty because write
// operations echo partial bodies.

use serde::{Deserialize, Serialize};

/// A product record as returned by the catalog upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Write body for product create/update, in upstream field names.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductWriteBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
