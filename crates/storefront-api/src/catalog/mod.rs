// Product-catalog client for a Fake-Store-shaped upstream.
//
// Hand-crafted async HTTP client over the `/products` resource.

pub mod client;
pub mod types;

pub use client::{CatalogClient, DEFAULT_BASE_URL};
