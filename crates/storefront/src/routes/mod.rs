//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Liveness probe
//! GET  /ready                  - Readiness probe (cart hydration)
//!
//! # Products
//! GET  /products               - Product listing
//! GET  /products/{id}          - Product detail with related products
//!
//! # Categories
//! GET  /categories             - Category listing with descriptions
//! GET  /categories/{category}  - One category's products
//!                                (?sort=name|price-asc|price-desc|rating)
//!
//! # Cart
//! GET  /cart                   - Cart contents with totals
//! POST /cart/add               - Add one unit of a product
//! POST /cart/update            - Set a line's quantity
//! POST /cart/remove            - Remove a line
//! POST /cart/clear             - Empty the cart
//! GET  /cart/count             - Item count badge
//!
//! # Checkout
//! GET  /checkout               - Order summary for the current cart
//! POST /checkout               - Place an order
//! GET  /order-success          - Most recent order confirmation
//!
//! # Content
//! GET  /about                  - About page
//! GET  /contact                - Contact page
//! POST /contact                - Submit the contact form
//! POST /newsletter/subscribe   - Subscribe to the newsletter
//! ```

pub mod cart;
pub mod categories;
pub mod checkout;
pub mod contact;
pub mod home;
pub mod newsletter;
pub mod pages;
pub mod products;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Ready once the cart store has completed its startup hydration, so
/// traffic arriving early never sees a cart that is about to be
/// replaced by persisted state.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.cart().snapshot().is_hydrated {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::index))
        .route("/{category}", get(categories::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Probes
        .route("/health", get(health))
        .route("/ready", get(readiness))
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Category routes
        .nest("/categories", category_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout flow
        .route("/checkout", get(checkout::show).post(checkout::submit))
        .route("/order-success", get(checkout::order_success))
        // Content pages
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact).post(contact::submit))
        // Newsletter
        .route("/newsletter/subscribe", post(newsletter::subscribe))
}
