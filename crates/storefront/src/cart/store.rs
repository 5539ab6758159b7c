//! The shared cart store.

use std::sync::{Arc, Mutex, PoisonError};

use elitestore_core::cart::CartState;
use elitestore_core::types::{Product, ProductId};

use super::storage::CartStorage;

/// A point-in-time view of the cart handed to request handlers.
#[derive(Debug, Clone)]
pub struct CartSnapshot {
    pub cart: CartState,
    /// False until the store has attempted to load persisted state.
    pub is_hydrated: bool,
}

struct HydratedState {
    cart: CartState,
    hydrated: bool,
}

struct CartStoreInner {
    storage: Box<dyn CartStorage>,
    state: Mutex<HydratedState>,
}

/// Cart state shared across the application, persisted through a
/// [`CartStorage`] backend.
///
/// Every mutation rewrites the persisted record wholesale. Persistence
/// failures are logged and swallowed so the cart keeps working in
/// memory.
///
/// Cloning is cheap; all clones operate on the same cart.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

impl CartStore {
    /// Create a store over the given storage backend. The cart starts
    /// empty and unhydrated; call [`hydrate`](Self::hydrate) to load
    /// whatever was persisted previously.
    #[must_use]
    pub fn new(storage: impl CartStorage + 'static) -> Self {
        Self {
            inner: Arc::new(CartStoreInner {
                storage: Box::new(storage),
                state: Mutex::new(HydratedState {
                    cart: CartState::new(),
                    hydrated: false,
                }),
            }),
        }
    }

    /// Load persisted cart state, replacing the in-memory cart.
    ///
    /// Runs at most once; later calls are no-ops. A failed load leaves
    /// the cart empty but still marks the store hydrated, since waiting
    /// for a broken backend would block the cart forever.
    pub fn hydrate(&self) {
        let mut guard = self.lock_state();
        if guard.hydrated {
            return;
        }
        match self.inner.storage.load() {
            Ok(Some(cart)) => guard.cart = cart,
            Ok(None) => {}
            Err(error) => {
                tracing::warn!(error = %error, "Failed to load persisted cart; starting empty");
            }
        }
        guard.hydrated = true;
    }

    /// Add one unit of `product`, merging with an existing line.
    pub fn add(&self, product: Product) {
        let mut guard = self.lock_state();
        guard.cart.add(product);
        self.persist(&guard.cart);
    }

    /// Set the quantity for a product line. Zero or negative removes
    /// the line; an unknown id leaves the cart unchanged.
    pub fn update_quantity(&self, id: ProductId, new_quantity: i64) {
        let mut guard = self.lock_state();
        guard.cart.update_quantity(id, new_quantity);
        self.persist(&guard.cart);
    }

    /// Remove a product's line entirely.
    pub fn remove(&self, id: ProductId) {
        let mut guard = self.lock_state();
        guard.cart.remove(id);
        self.persist(&guard.cart);
    }

    /// Empty the cart.
    pub fn clear(&self) {
        let mut guard = self.lock_state();
        guard.cart.clear();
        self.persist(&guard.cart);
    }

    /// Current cart contents and hydration status.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        let guard = self.lock_state();
        CartSnapshot {
            cart: guard.cart.clone(),
            is_hydrated: guard.hydrated,
        }
    }

    fn persist(&self, cart: &CartState) {
        if let Err(error) = self.inner.storage.save(cart) {
            tracing::warn!(error = %error, "Failed to persist cart; continuing in memory");
        }
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, HydratedState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let guard = self.lock_state();
        f.debug_struct("CartStore")
            .field("items", &guard.cart.item_count())
            .field("hydrated", &guard.hydrated)
            .finish()
    }
}
