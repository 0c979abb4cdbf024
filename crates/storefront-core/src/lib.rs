// storefront-core: Synchronization layer between storefront-api and
// consumers (CLI). Canonical domain model, envelope-producing access
// operations, the resource store, and derived views.

pub mod access;
pub mod actions;
pub mod convert;
pub mod envelope;
pub mod error;
pub mod model;
pub mod query;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use access::{ProductCatalog, ProductFilters, UserDirectory, UserFilters};
pub use actions::{Notify, ProductActions, TracingNotifier, UserActions};
pub use envelope::{ApiResponse, PageMeta};
pub use error::CoreError;
pub use query::{ListQuery, PageView};
pub use store::{CollectionState, ResourceStore, StateCell};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    CreateProductInput, CreateUserInput, Entity, FilterCriteria, FilterPatch, Matchable, Product,
    Status, UpdateProductInput, UpdateUserInput, User, UserRole,
};
