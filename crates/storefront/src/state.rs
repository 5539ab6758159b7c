//! Application state shared across handlers.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::cart::{CartStore, FileStorage};
use crate::catalog::CatalogClient;
use crate::checkout::{CheckoutProcessor, OrderConfirmation};
use crate::config::StorefrontConfig;
use crate::content::{ContentError, ContentStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the catalog client and the cart store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogClient,
    cart: CartStore,
    checkout: CheckoutProcessor,
    content: ContentStore,
    /// The confirmation shown on the order-success page.
    last_order: Mutex<Option<OrderConfirmation>>,
}

impl AppState {
    /// Create application state from configuration.
    ///
    /// Builds the catalog client, a file-backed cart store, and the
    /// content store. The cart is not hydrated here; call
    /// [`CartStore::hydrate`] once at startup.
    ///
    /// # Errors
    ///
    /// Returns an error if the content directory exists but cannot be
    /// read.
    pub fn new(config: StorefrontConfig) -> Result<Self, ContentError> {
        let catalog = CatalogClient::new(&config.catalog_base_url);
        let cart = CartStore::new(FileStorage::new(config.cart_storage_path.clone()));
        let content = ContentStore::load(&config.content_dir)?;

        Ok(Self::with_parts(config, catalog, cart, content))
    }

    /// Assemble state from pre-built components.
    ///
    /// Tests use this to swap in an in-memory cart store.
    #[must_use]
    pub fn with_parts(
        config: StorefrontConfig,
        catalog: CatalogClient,
        cart: CartStore,
        content: ContentStore,
    ) -> Self {
        let checkout = CheckoutProcessor::new(Duration::from_millis(
            config.checkout_processing_delay_ms,
        ));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart,
                checkout,
                content,
                last_order: Mutex::new(None),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog API client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a reference to the shared cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Get a reference to the checkout processor.
    #[must_use]
    pub fn checkout(&self) -> &CheckoutProcessor {
        &self.inner.checkout
    }

    /// Get a reference to the static page content store.
    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }

    /// Record the confirmation for the most recently placed order.
    pub fn set_last_order(&self, confirmation: OrderConfirmation) {
        let mut guard = self
            .inner
            .last_order
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Some(confirmation);
    }

    /// The most recently placed order, if any.
    #[must_use]
    pub fn last_order(&self) -> Option<OrderConfirmation> {
        self.inner
            .last_order
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
