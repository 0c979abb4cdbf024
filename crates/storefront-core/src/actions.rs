// ── Action layer ──
//
// Async operations that drive the store through its transitions.
// Fetches follow a strict protocol: begin_load before the request, then
// exactly one of load_succeeded / detail_succeeded / load_failed.
// Mutations never touch the loading flag; they upsert or remove on
// success and emit exactly one notification either way.
//
// Each fetch carries a generation token. A fetch that resolves after a
// newer one has started is stale and its resolution is discarded, so
// the store always reflects the latest request rather than the last one
// to land.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, error, info};

use crate::access::{ProductCatalog, ProductFilters, UserDirectory, UserFilters};
use crate::error::CoreError;
use crate::model::{
    CreateProductInput, CreateUserInput, FilterPatch, Product, UpdateProductInput,
    UpdateUserInput, User,
};
use crate::store::StateCell;

/// Notification sink for mutation outcomes. The action layer reports
/// here; presentation (toasts, colored CLI lines) lives with the
/// implementor.
pub trait Notify: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default sink that routes notifications into the log stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notify for TracingNotifier {
    fn success(&self, message: &str) {
        info!("{message}");
    }

    fn error(&self, message: &str) {
        error!("{message}");
    }
}

/// Monotonic token source; one per fetch slot.
#[derive(Debug, Default)]
struct Generation(AtomicU64);

impl Generation {
    /// Start a new request and return its token.
    fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `token` still identifies the newest request.
    fn is_current(&self, token: u64) -> bool {
        self.0.load(Ordering::SeqCst) == token
    }
}

// ── User actions ─────────────────────────────────────────────────────

pub struct UserActions {
    directory: UserDirectory,
    store: StateCell<User>,
    notifier: Arc<dyn Notify>,
    list_generation: Generation,
    detail_generation: Generation,
}

impl UserActions {
    #[must_use]
    pub fn new(directory: UserDirectory, store: StateCell<User>, notifier: Arc<dyn Notify>) -> Self {
        Self {
            directory,
            store,
            notifier,
            list_generation: Generation::default(),
            detail_generation: Generation::default(),
        }
    }

    /// Fetch the user collection into the store.
    pub async fn fetch_users(&self, filters: &UserFilters) -> Result<Vec<User>, CoreError> {
        let token = self.list_generation.begin();
        self.store.update(|s| s.begin_load());

        match self.directory.get_all(filters).await {
            Ok(envelope) => {
                let users = envelope.into_data().unwrap_or_default();
                if self.list_generation.is_current(token) {
                    let snapshot = users.clone();
                    self.store.update(|s| s.load_succeeded(snapshot));
                } else {
                    debug!("discarding stale user list response");
                }
                Ok(users)
            }
            Err(err) => {
                if self.list_generation.is_current(token) {
                    let message = err.to_string();
                    self.store.update(|s| s.load_failed(message));
                }
                Err(err)
            }
        }
    }

    /// Fetch one user into the current slot.
    pub async fn fetch_user(&self, id: &str) -> Result<User, CoreError> {
        let token = self.detail_generation.begin();
        self.store.update(|s| s.begin_load());

        match self.directory.get_by_id(id).await {
            Ok(envelope) => {
                let user = envelope
                    .into_data()
                    .ok_or_else(|| CoreError::Parse {
                        message: "Envelope carried no user".to_owned(),
                    })?;
                if self.detail_generation.is_current(token) {
                    let snapshot = user.clone();
                    self.store.update(|s| s.detail_succeeded(snapshot));
                }
                Ok(user)
            }
            Err(err) => {
                if self.detail_generation.is_current(token) {
                    let message = err.to_string();
                    self.store.update(|s| s.load_failed(message));
                }
                Err(err)
            }
        }
    }

    /// Create a user; the result is upserted and announced.
    pub async fn create_user(&self, input: &CreateUserInput) -> Result<User, CoreError> {
        match self.directory.create(input).await {
            Ok(envelope) => {
                let message = envelope.message.clone();
                let user = envelope.into_data().ok_or_else(|| CoreError::Parse {
                    message: "Envelope carried no user".to_owned(),
                })?;
                let snapshot = user.clone();
                self.store.update(|s| s.upsert_one(snapshot));
                self.notifier.success(&message);
                Ok(user)
            }
            Err(err) => {
                self.notifier.error(&err.to_string());
                Err(err)
            }
        }
    }

    pub async fn update_user(
        &self,
        id: &str,
        input: &UpdateUserInput,
    ) -> Result<User, CoreError> {
        match self.directory.update(id, input).await {
            Ok(envelope) => {
                let message = envelope.message.clone();
                let user = envelope.into_data().ok_or_else(|| CoreError::Parse {
                    message: "Envelope carried no user".to_owned(),
                })?;
                let snapshot = user.clone();
                self.store.update(|s| s.upsert_one(snapshot));
                self.notifier.success(&message);
                Ok(user)
            }
            Err(err) => {
                self.notifier.error(&err.to_string());
                Err(err)
            }
        }
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), CoreError> {
        match self.directory.delete(id).await {
            Ok(envelope) => {
                self.store.update(|s| s.remove_one(id));
                self.notifier.success(&envelope.message);
                Ok(())
            }
            Err(err) => {
                self.notifier.error(&err.to_string());
                Err(err)
            }
        }
    }

    pub fn set_filters(&self, patch: &FilterPatch) {
        self.store.update(|s| s.set_filters(patch));
    }

    pub fn set_current(&self, user: Option<User>) {
        self.store.update(|s| s.set_current(user));
    }

    pub fn reset(&self) {
        self.store.update(crate::store::CollectionState::reset);
    }
}

// ── Product actions ──────────────────────────────────────────────────

pub struct ProductActions {
    catalog: ProductCatalog,
    store: StateCell<Product>,
    notifier: Arc<dyn Notify>,
    list_generation: Generation,
    detail_generation: Generation,
}

impl ProductActions {
    #[must_use]
    pub fn new(
        catalog: ProductCatalog,
        store: StateCell<Product>,
        notifier: Arc<dyn Notify>,
    ) -> Self {
        Self {
            catalog,
            store,
            notifier,
            list_generation: Generation::default(),
            detail_generation: Generation::default(),
        }
    }

    pub async fn fetch_products(
        &self,
        filters: &ProductFilters,
    ) -> Result<Vec<Product>, CoreError> {
        let token = self.list_generation.begin();
        self.store.update(|s| s.begin_load());

        match self.catalog.get_all(filters).await {
            Ok(envelope) => {
                let products = envelope.into_data().unwrap_or_default();
                if self.list_generation.is_current(token) {
                    let snapshot = products.clone();
                    self.store.update(|s| s.load_succeeded(snapshot));
                } else {
                    debug!("discarding stale product list response");
                }
                Ok(products)
            }
            Err(err) => {
                if self.list_generation.is_current(token) {
                    let message = err.to_string();
                    self.store.update(|s| s.load_failed(message));
                }
                Err(err)
            }
        }
    }

    pub async fn fetch_product(&self, id: &str) -> Result<Product, CoreError> {
        let token = self.detail_generation.begin();
        self.store.update(|s| s.begin_load());

        match self.catalog.get_by_id(id).await {
            Ok(envelope) => {
                let product = envelope.into_data().ok_or_else(|| CoreError::Parse {
                    message: "Envelope carried no product".to_owned(),
                })?;
                if self.detail_generation.is_current(token) {
                    let snapshot = product.clone();
                    self.store.update(|s| s.detail_succeeded(snapshot));
                }
                Ok(product)
            }
            Err(err) => {
                if self.detail_generation.is_current(token) {
                    let message = err.to_string();
                    self.store.update(|s| s.load_failed(message));
                }
                Err(err)
            }
        }
    }

    pub async fn create_product(&self, input: &CreateProductInput) -> Result<Product, CoreError> {
        match self.catalog.create(input).await {
            Ok(envelope) => {
                let message = envelope.message.clone();
                let product = envelope.into_data().ok_or_else(|| CoreError::Parse {
                    message: "Envelope carried no product".to_owned(),
                })?;
                let snapshot = product.clone();
                self.store.update(|s| s.upsert_one(snapshot));
                self.notifier.success(&message);
                Ok(product)
            }
            Err(err) => {
                self.notifier.error(&err.to_string());
                Err(err)
            }
        }
    }

    pub async fn update_product(
        &self,
        id: &str,
        input: &UpdateProductInput,
    ) -> Result<Product, CoreError> {
        match self.catalog.update(id, input).await {
            Ok(envelope) => {
                let message = envelope.message.clone();
                let product = envelope.into_data().ok_or_else(|| CoreError::Parse {
                    message: "Envelope carried no product".to_owned(),
                })?;
                let snapshot = product.clone();
                self.store.update(|s| s.upsert_one(snapshot));
                self.notifier.success(&message);
                Ok(product)
            }
            Err(err) => {
                self.notifier.error(&err.to_string());
                Err(err)
            }
        }
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), CoreError> {
        match self.catalog.delete(id).await {
            Ok(envelope) => {
                self.store.update(|s| s.remove_one(id));
                self.notifier.success(&envelope.message);
                Ok(())
            }
            Err(err) => {
                self.notifier.error(&err.to_string());
                Err(err)
            }
        }
    }

    pub fn set_filters(&self, patch: &FilterPatch) {
        self.store.update(|s| s.set_filters(patch));
    }

    pub fn set_current(&self, product: Option<Product>) {
        self.store.update(|s| s.set_current(product));
    }

    pub fn reset(&self) {
        self.store.update(crate::store::CollectionState::reset);
    }
}
