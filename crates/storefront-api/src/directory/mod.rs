// User-directory client for a JSONPlaceholder-shaped upstream.
//
// Hand-crafted async HTTP client over the `/users` resource.
// No auth required by the public instance; an optional session token
// is attached when one is installed.

pub mod client;
pub mod types;

pub use client::{DEFAULT_BASE_URL, DirectoryClient};
