// ── Canonical domain model ──

mod common;
mod product;
mod user;

pub use common::{FilterCriteria, FilterPatch, Status};
pub use product::{CreateProductInput, Product, UpdateProductInput};
pub use user::{Address, Company, CreateUserInput, Geo, UpdateUserInput, User, UserRole};

/// Anything stored in a [`crate::store::CollectionState`]. Identity is a
/// string key; upstream numeric ids are normalized to strings at the
/// access boundary.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// Entities the query layer can search and facet over.
pub trait Matchable: Entity {
    /// Fields scanned by the case-insensitive substring search.
    fn search_fields(&self) -> Vec<&str>;

    /// The single facet value this entity carries (role for users,
    /// category for products).
    fn facet(&self) -> Option<&str>;
}
