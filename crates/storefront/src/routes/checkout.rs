//! Checkout route handlers.
//!
//! Submission is the one mutating flow with ceremony: validate the form,
//! run the simulated processor, clear the cart, and remember the
//! confirmation for the order-success page.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::instrument;

use elitestore_core::checkout::{CheckoutForm, FieldErrors};
use elitestore_core::totals::OrderTotals;

use crate::checkout::OrderConfirmation;
use crate::error::{AppError, Result};
use crate::state::AppState;

use super::cart::{CartLineView, TotalsView};

/// Message shown when checkout is attempted with an empty cart.
const EMPTY_CART_MESSAGE: &str = "You need items in your cart to proceed to checkout.";

/// Checkout page: the order summary for the current cart.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutView {
    pub lines: Vec<CartLineView>,
    pub item_count: u64,
    pub totals: TotalsView,
}

/// Per-field validation failures, keyed by wire field name.
#[derive(Debug, Serialize)]
pub struct ValidationErrors {
    pub errors: FieldErrors,
}

/// A placed order, formatted for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationView {
    pub order_number: String,
    pub email: String,
    pub item_count: u64,
    pub totals: TotalsView,
    /// e.g. `Monday, September 1, 2026`.
    pub estimated_delivery: String,
}

impl From<&OrderConfirmation> for ConfirmationView {
    fn from(confirmation: &OrderConfirmation) -> Self {
        Self {
            order_number: confirmation.order_number.clone(),
            email: confirmation.email.clone(),
            item_count: confirmation.item_count,
            totals: TotalsView::from(confirmation.totals),
            estimated_delivery: confirmation
                .estimated_delivery
                .format("%A, %B %-d, %Y")
                .to_string(),
        }
    }
}

fn validation_failure(errors: FieldErrors) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ValidationErrors { errors }),
    )
        .into_response()
}

/// Display the checkout summary for the current cart.
///
/// GET /checkout
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CheckoutView> {
    let snapshot = state.cart().snapshot();
    Json(CheckoutView {
        lines: snapshot.cart.lines().iter().map(CartLineView::from).collect(),
        item_count: snapshot.cart.item_count(),
        totals: TotalsView::from(OrderTotals::from_subtotal(snapshot.cart.total())),
    })
}

/// Place an order.
///
/// POST /checkout
///
/// Field validation failures and an empty cart both come back as 422
/// with per-field messages. A valid submission runs the simulated
/// processor, clears the cart, and responds with the confirmation.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn submit(State(state): State<AppState>, Json(form): Json<CheckoutForm>) -> Response {
    let errors = form.validate();
    if !errors.is_empty() {
        return validation_failure(errors);
    }

    let snapshot = state.cart().snapshot();
    if snapshot.cart.is_empty() {
        let mut errors = FieldErrors::new();
        errors.insert("cart", EMPTY_CART_MESSAGE);
        return validation_failure(errors);
    }

    let totals = OrderTotals::from_subtotal(snapshot.cart.total());
    let confirmation = state
        .checkout()
        .process_order(&form, snapshot.cart.item_count(), totals)
        .await;

    state.cart().clear();
    state.set_last_order(confirmation.clone());

    Json(ConfirmationView::from(&confirmation)).into_response()
}

/// Display the confirmation for the most recently placed order.
///
/// GET /order-success
///
/// 404 until an order has been placed this session.
#[instrument(skip(state))]
pub async fn order_success(State(state): State<AppState>) -> Result<Json<ConfirmationView>> {
    state
        .last_order()
        .map(|confirmation| Json(ConfirmationView::from(&confirmation)))
        .ok_or_else(|| AppError::NotFound("No recent order to show".to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::dec;

    use super::*;

    #[test]
    fn test_confirmation_view_formats_delivery_date() {
        let confirmation = OrderConfirmation {
            order_number: "ORD-A1B2C3D4E".into(),
            email: "jane@example.com".into(),
            item_count: 3,
            totals: OrderTotals::from_subtotal(dec!(45.00)),
            estimated_delivery: Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap(),
        };

        let view = ConfirmationView::from(&confirmation);
        assert_eq!(view.estimated_delivery, "Tuesday, September 1, 2026");
        assert_eq!(view.totals.total, "$58.59");
        assert_eq!(view.item_count, 3);
    }

    #[test]
    fn test_confirmation_wire_shape() {
        let confirmation = OrderConfirmation {
            order_number: "ORD-XYZXYZXYZ".into(),
            email: "jane@example.com".into(),
            item_count: 1,
            totals: OrderTotals::from_subtotal(dec!(60.00)),
            estimated_delivery: Utc.with_ymd_and_hms(2026, 8, 30, 0, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(ConfirmationView::from(&confirmation)).unwrap();
        assert_eq!(value["orderNumber"], "ORD-XYZXYZXYZ");
        assert_eq!(value["estimatedDelivery"], "Sunday, August 30, 2026");
        assert_eq!(value["totals"]["shipping"], "Free");
    }

    #[test]
    fn test_validation_errors_serialize_by_field() {
        let mut errors = FieldErrors::new();
        errors.insert("email", "Please enter a valid email address");
        errors.insert("cart", EMPTY_CART_MESSAGE);

        let value = serde_json::to_value(ValidationErrors { errors }).unwrap();
        assert_eq!(
            value["errors"]["email"],
            "Please enter a valid email address"
        );
        assert_eq!(
            value["errors"]["cart"],
            "You need items in your cart to proceed to checkout."
        );
    }
}
