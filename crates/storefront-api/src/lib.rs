// storefront-api: Async Rust clients for the upstream REST resources
// (user directory + product catalog).

pub mod catalog;
pub mod directory;
pub mod error;
mod http;
pub mod transport;

pub use catalog::CatalogClient;
pub use directory::DirectoryClient;
pub use error::Error;
pub use transport::{Session, TransportConfig};
