//! Integration tests for EliteStore.
//!
//! Each test boots the real storefront router against a stub catalog
//! server, both bound to ephemeral localhost ports, and drives the
//! storefront over HTTP with `reqwest`. No external services are
//! involved, so the suite runs anywhere `cargo test` does.
//!
//! # Test Categories
//!
//! - `storefront_catalog` - browsing: home, products, categories, pages
//! - `storefront_cart` - cart mutations and totals
//! - `storefront_checkout` - checkout, orders, contact and newsletter forms
//!
//! Every test builds its own [`TestContext`], so carts never leak
//! between tests.

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use axum::extract::{Path, Query};
use axum::routing::get;
use axum::{Json, Router};
use reqwest::StatusCode;
use rust_decimal::{Decimal, dec};
use serde::Deserialize;
use serde_json::{Value, json};

use elitestore_core::types::{Product, ProductId, Rating};
use elitestore_storefront::cart::{CartStore, MemoryStorage};
use elitestore_storefront::catalog::CatalogClient;
use elitestore_storefront::config::{LogFormat, StorefrontConfig};
use elitestore_storefront::content::ContentStore;
use elitestore_storefront::state::AppState;

// ============================================================================
// Stub Catalog
// ============================================================================

/// The products the stub catalog serves, in catalog order.
///
/// Spread over three categories with distinct prices, ratings, and
/// title casing so every sort order is distinguishable.
#[must_use]
pub fn fixture_products() -> Vec<Product> {
    vec![
        fixture(1, "Canvas Weekend Bag", dec!(45.00), "men's clothing", dec!(4.3), 57),
        fixture(2, "aurora desk lamp", dec!(10.00), "electronics", dec!(3.8), 214),
        fixture(3, "USB Microphone", dec!(25.00), "electronics", dec!(4.7), 89),
        fixture(4, "Braided Leather Bracelet", dec!(16.50), "jewelery", dec!(4.0), 33),
        fixture(5, "Noise Cancelling Earbuds", dec!(120.00), "electronics", dec!(4.9), 412),
        fixture(6, "Trail Running Jacket", dec!(64.99), "men's clothing", dec!(4.1), 152),
        fixture(7, "Smart Power Strip", dec!(32.50), "electronics", dec!(4.4), 66),
        fixture(8, "Portable SSD 1TB", dec!(99.95), "electronics", dec!(4.6), 301),
        fixture(9, "Mini Projector", dec!(150.00), "electronics", dec!(3.5), 48),
    ]
}

fn fixture(
    id: i32,
    title: &str,
    price: Decimal,
    category: &str,
    rate: Decimal,
    count: u32,
) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        price,
        description: format!("{title} from the test catalog."),
        category: category.to_string(),
        image: format!("https://cdn.example.com/products/{id}.jpg"),
        rating: Rating { rate, count },
    }
}

#[derive(Debug, Deserialize)]
struct LimitQuery {
    limit: Option<usize>,
}

async fn categories() -> Json<Vec<String>> {
    let mut names: Vec<String> = Vec::new();
    for product in fixture_products() {
        if !names.contains(&product.category) {
            names.push(product.category);
        }
    }
    Json(names)
}

async fn list_products(Query(query): Query<LimitQuery>) -> Json<Vec<Product>> {
    let mut products = fixture_products();
    if let Some(limit) = query.limit {
        products.truncate(limit);
    }
    Json(products)
}

async fn get_product(Path(id): Path<i32>) -> Result<Json<Product>, StatusCode> {
    let id = ProductId::new(id);
    fixture_products()
        .into_iter()
        .find(|product| product.id == id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn products_by_category(Path(category): Path<String>) -> Json<Vec<Product>> {
    Json(
        fixture_products()
            .into_iter()
            .filter(|product| product.category == category)
            .collect(),
    )
}

/// A stand-in catalog speaking the same wire contract as the real one.
#[must_use]
pub fn catalog_stub() -> Router {
    Router::new()
        .route("/categories", get(categories))
        .route("/products", get(list_products))
        .route("/products/{id}", get(get_product))
        .route("/products/category/{category}", get(products_by_category))
}

// ============================================================================
// Test Context
// ============================================================================

/// A running storefront wired to a stub catalog.
pub struct TestContext {
    pub client: reqwest::Client,
    pub storefront_url: String,
    pub catalog_url: String,
}

impl TestContext {
    /// Boot the stub catalog and the real storefront router.
    ///
    /// # Panics
    ///
    /// Panics if a listener cannot be bound or the content pages fail
    /// to load.
    pub async fn new() -> Self {
        let catalog_url = spawn_server(catalog_stub()).await;
        Self::boot(catalog_url).await
    }

    /// Boot the storefront against a catalog URL nothing listens on.
    ///
    /// Exercises the degraded paths: listing pages soft-fail to empty
    /// while detail pages surface an upstream error.
    ///
    /// # Panics
    ///
    /// Panics if a listener cannot be bound or the content pages fail
    /// to load.
    pub async fn with_unreachable_catalog() -> Self {
        // Bind and immediately drop a listener so the port is closed.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind probe listener");
        let addr = listener.local_addr().expect("Listener has no local addr");
        drop(listener);

        Self::boot(format!("http://{addr}")).await
    }

    async fn boot(catalog_url: String) -> Self {
        let config = test_config(&catalog_url);
        let catalog = CatalogClient::new(&config.catalog_base_url);
        let cart = CartStore::new(MemoryStorage::new());
        cart.hydrate();
        let content =
            ContentStore::load(&config.content_dir).expect("Failed to load content pages");

        let state = AppState::with_parts(config, catalog, cart, content);
        let storefront_url = spawn_server(elitestore_storefront::app(state)).await;

        Self {
            client: reqwest::Client::new(),
            storefront_url,
            catalog_url,
        }
    }

    /// GET a storefront path, asserting success, and parse the JSON body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails, the status is not 2xx, or the body
    /// is not JSON.
    pub async fn get_json(&self, path: &str) -> Value {
        let resp = self
            .client
            .get(format!("{}{path}", self.storefront_url))
            .send()
            .await
            .expect("Failed to send GET request");
        assert!(
            resp.status().is_success(),
            "GET {path} returned {}",
            resp.status()
        );
        resp.json().await.expect("Failed to parse response body")
    }

    /// GET a storefront path, returning just the status code.
    ///
    /// # Panics
    ///
    /// Panics if the request fails to complete.
    pub async fn get_status(&self, path: &str) -> StatusCode {
        self.client
            .get(format!("{}{path}", self.storefront_url))
            .send()
            .await
            .expect("Failed to send GET request")
            .status()
    }

    /// POST a JSON body to a storefront path, returning the status and
    /// parsed response body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the response body is not JSON.
    pub async fn post_json(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let resp = self
            .client
            .post(format!("{}{path}", self.storefront_url))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");
        let status = resp.status();
        let body = resp.json().await.expect("Failed to parse response body");
        (status, body)
    }

    /// POST a JSON body to a storefront path, returning just the status
    /// code. Use this for error responses whose bodies are plain text.
    ///
    /// # Panics
    ///
    /// Panics if the request fails to complete.
    pub async fn post_status(&self, path: &str, body: &Value) -> StatusCode {
        self.client
            .post(format!("{}{path}", self.storefront_url))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request")
            .status()
    }

    /// Add one unit of a product to the cart, returning the cart view.
    ///
    /// # Panics
    ///
    /// Panics if the add does not succeed.
    pub async fn add_to_cart(&self, product_id: i32) -> Value {
        let (status, body) = self
            .post_json("/cart/add", &json!({ "productId": product_id }))
            .await;
        assert_eq!(status, StatusCode::OK, "add to cart failed: {body}");
        body
    }
}

/// A checkout form that passes every validation rule.
#[must_use]
pub fn valid_checkout_form() -> Value {
    json!({
        "firstName": "Avery",
        "lastName": "Quinn",
        "email": "avery.quinn@example.com",
        "phone": "+1 (555) 010-7788",
        "address": "742 Commerce Street",
        "city": "Springfield",
        "zipCode": "62704",
        "country": "United States",
        "paymentMethod": "card"
    })
}

/// Configuration pointing at the stub catalog, with the simulated
/// processing delays disabled.
fn test_config(catalog_url: &str) -> StorefrontConfig {
    StorefrontConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        catalog_base_url: catalog_url.to_string(),
        // Never touched: the harness injects MemoryStorage.
        cart_storage_path: PathBuf::from("data/cart.json"),
        content_dir: PathBuf::from(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../storefront/content"
        )),
        checkout_processing_delay_ms: 0,
        contact_processing_delay_ms: 0,
        log_format: LogFormat::Pretty,
    }
}

/// Serve `app` on an ephemeral localhost port in the background,
/// returning its base URL.
async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no local addr");
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Test server stopped unexpectedly");
    });
    format!("http://{addr}")
}
