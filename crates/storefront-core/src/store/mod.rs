// ── Resource store ──
//
// Reactive container for collection state. Each collection lives in a
// watch channel; mutations go through `StateCell::update`, readers take
// cheap snapshots or subscribe for change notifications.

mod collection;

pub use collection::CollectionState;

use std::sync::Arc;

use tokio::sync::watch;

use crate::model::{Product, User};

/// One watched collection. Cloning shares the underlying channel.
#[derive(Debug, Clone)]
pub struct StateCell<T> {
    tx: Arc<watch::Sender<CollectionState<T>>>,
}

impl<T: Clone> Default for StateCell<T> {
    fn default() -> Self {
        let (tx, _rx) = watch::channel(CollectionState::default());
        Self { tx: Arc::new(tx) }
    }
}

impl<T: Clone> StateCell<T> {
    /// Apply a transition and notify subscribers.
    pub fn update(&self, f: impl FnOnce(&mut CollectionState<T>)) {
        self.tx.send_modify(f);
    }

    /// Clone of the current state.
    #[must_use]
    pub fn snapshot(&self) -> CollectionState<T> {
        self.tx.borrow().clone()
    }

    /// Read without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&CollectionState<T>) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Receiver that observes every subsequent transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CollectionState<T>> {
        self.tx.subscribe()
    }
}

/// The application-wide store: one cell per resource collection.
/// Cloning is cheap and shares state, so action layers and view code
/// can each hold their own handle.
#[derive(Debug, Clone, Default)]
pub struct ResourceStore {
    pub users: StateCell<User>,
    pub products: StateCell<Product>,
}

impl ResourceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every collection. Filter criteria survive.
    pub fn reset(&self) {
        self.users.update(CollectionState::reset);
        self.products.update(CollectionState::reset);
    }
}
