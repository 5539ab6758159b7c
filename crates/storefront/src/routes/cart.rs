//! Cart route handlers.
//!
//! The cart lives server-side in the shared [`CartStore`](crate::cart::CartStore);
//! every mutation responds with the full cart view so the client can
//! rerender without a follow-up request.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use elitestore_core::cart::CartLine;
use elitestore_core::totals::{OrderTotals, free_shipping_remainder};
use elitestore_core::types::ProductId;

use crate::cart::CartSnapshot;
use crate::error::Result;
use crate::state::AppState;

use super::products::format_price;

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub id: ProductId,
    pub title: String,
    /// Unit price, e.g. `$109.95`.
    pub price: String,
    pub category: String,
    pub image: String,
    pub quantity: u32,
    /// Unit price times quantity.
    pub line_total: String,
}

/// Order cost breakdown with display formatting applied.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsView {
    pub subtotal: String,
    /// `Free` once the subtotal qualifies, otherwise the flat rate.
    pub shipping: String,
    pub tax: String,
    pub total: String,
}

/// Full cart display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub item_count: u64,
    pub totals: TotalsView,
    /// Present only while the cart is between empty and the
    /// free-shipping threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_shipping_nudge: Option<String>,
    pub is_hydrated: bool,
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.product.id,
            title: line.product.title.clone(),
            price: format_price(line.product.price),
            category: line.product.category.clone(),
            image: line.product.image.clone(),
            quantity: line.quantity,
            line_total: format_price(line.line_total()),
        }
    }
}

impl From<OrderTotals> for TotalsView {
    fn from(totals: OrderTotals) -> Self {
        let shipping = if totals.shipping.is_zero() {
            "Free".to_string()
        } else {
            format_price(totals.shipping)
        };
        Self {
            subtotal: format_price(totals.subtotal),
            shipping,
            tax: format_price(totals.tax),
            total: format_price(totals.total),
        }
    }
}

impl From<&CartSnapshot> for CartView {
    fn from(snapshot: &CartSnapshot) -> Self {
        let subtotal = snapshot.cart.total();
        let free_shipping_nudge = free_shipping_remainder(subtotal)
            .map(|remaining| format!("Add {} more for free shipping!", format_price(remaining)));
        Self {
            lines: snapshot.cart.lines().iter().map(CartLineView::from).collect(),
            item_count: snapshot.cart.item_count(),
            totals: TotalsView::from(OrderTotals::from_subtotal(subtotal)),
            free_shipping_nudge,
            is_hydrated: snapshot.is_hydrated,
        }
    }
}

// =============================================================================
// Request/Response Types
// =============================================================================

/// Add to cart request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: ProductId,
}

/// Update cart quantity request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartRequest {
    pub product_id: ProductId,
    /// Zero or negative removes the line.
    pub quantity: i64,
}

/// Remove from cart request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartRequest {
    pub product_id: ProductId,
}

/// Cart badge count response.
#[derive(Debug, Serialize)]
pub struct CartCountResponse {
    pub count: u64,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart.
///
/// GET /cart
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    Json(CartView::from(&state.cart().snapshot()))
}

/// Add one unit of a product to the cart.
///
/// POST /cart/add
///
/// The product is fetched from the catalog so the line carries its
/// current title and price; an unknown id is a 404.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<CartView>> {
    let product = state.catalog().get_product(request.product_id).await?;
    state.cart().add(product);
    Ok(Json(CartView::from(&state.cart().snapshot())))
}

/// Set a cart line's quantity.
///
/// POST /cart/update
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<UpdateCartRequest>,
) -> Json<CartView> {
    state
        .cart()
        .update_quantity(request.product_id, request.quantity);
    Json(CartView::from(&state.cart().snapshot()))
}

/// Remove a product's line from the cart.
///
/// POST /cart/remove
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Json(request): Json<RemoveFromCartRequest>,
) -> Json<CartView> {
    state.cart().remove(request.product_id);
    Json(CartView::from(&state.cart().snapshot()))
}

/// Empty the cart.
///
/// POST /cart/clear
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Json<CartView> {
    state.cart().clear();
    Json(CartView::from(&state.cart().snapshot()))
}

/// Number of items in the cart, for the header badge.
///
/// GET /cart/count
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Json<CartCountResponse> {
    Json(CartCountResponse {
        count: state.cart().snapshot().cart.item_count(),
    })
}
