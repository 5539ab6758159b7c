//! Integration tests for checkout, orders, and the outreach forms.

#![allow(clippy::indexing_slicing)]

use elitestore_integration_tests::{TestContext, valid_checkout_form};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Checkout Summary
// ============================================================================

#[tokio::test]
async fn test_checkout_summary_reflects_cart() {
    let ctx = TestContext::new().await;
    ctx.add_to_cart(3).await;

    let body = ctx.get_json("/checkout").await;
    assert_eq!(body["itemCount"], 1);
    assert_eq!(body["lines"][0]["title"], "USB Microphone");
    assert_eq!(body["totals"]["subtotal"], "$25.00");
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn test_submit_reports_field_errors() {
    let ctx = TestContext::new().await;
    ctx.add_to_cart(3).await;

    let (status, body) = ctx
        .post_json("/checkout", &json!({ "email": "not-an-email" }))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = &body["errors"];
    assert_eq!(errors["email"], "Please enter a valid email address");
    assert_eq!(errors["firstName"], "First name is required");
    assert_eq!(errors["zipCode"], "ZIP code is required");
    assert_eq!(errors.as_object().expect("errors object").len(), 8);

    // Nothing was placed; the cart is untouched.
    assert_eq!(ctx.get_json("/cart").await["itemCount"], 1);
}

#[tokio::test]
async fn test_submit_with_empty_cart_is_rejected() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx.post_json("/checkout", &valid_checkout_form()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["errors"]["cart"],
        "You need items in your cart to proceed to checkout."
    );
}

// ============================================================================
// Order Flow
// ============================================================================

#[tokio::test]
async fn test_order_flow_confirms_and_clears_cart() {
    let ctx = TestContext::new().await;
    ctx.add_to_cart(2).await;
    ctx.add_to_cart(2).await;
    ctx.add_to_cart(3).await;

    let (status, body) = ctx.post_json("/checkout", &valid_checkout_form()).await;
    assert_eq!(status, StatusCode::OK, "checkout failed: {body}");

    let order_number = body["orderNumber"].as_str().expect("orderNumber");
    assert!(order_number.starts_with("ORD-"));
    assert_eq!(order_number.len(), "ORD-".len() + 9);
    assert_eq!(body["email"], "avery.quinn@example.com");
    assert_eq!(body["itemCount"], 3);
    assert_eq!(body["totals"]["total"], "$58.59");
    let delivery = body["estimatedDelivery"].as_str().expect("estimatedDelivery");
    assert!(!delivery.is_empty());

    // Placing the order emptied the cart.
    assert_eq!(ctx.get_json("/cart").await["itemCount"], 0);

    // The confirmation stays available on the order-success page.
    let success = ctx.get_json("/order-success").await;
    assert_eq!(success["orderNumber"], order_number);
}

#[tokio::test]
async fn test_order_success_is_404_before_any_order() {
    let ctx = TestContext::new().await;
    assert_eq!(
        ctx.get_status("/order-success").await,
        StatusCode::NOT_FOUND
    );
}

// ============================================================================
// Contact & Newsletter
// ============================================================================

#[tokio::test]
async fn test_contact_form_round_trip() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx
        .post_json(
            "/contact",
            &json!({
                "name": "Jordan Lee",
                "email": "jordan@example.com",
                "subject": "Order question",
                "message": "Where is my order?"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Thank you! Your message has been sent successfully."
    );
}

#[tokio::test]
async fn test_contact_form_validation() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx
        .post_json("/contact", &json!({ "email": "not-an-email" }))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"]["name"], "Name is required");
    assert_eq!(body["errors"]["email"], "Please enter a valid email address");
    assert_eq!(body["errors"]["message"], "Message is required");
}

#[tokio::test]
async fn test_newsletter_subscribe() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx
        .post_json("/newsletter/subscribe", &json!({ "email": "Fan@Example.COM" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Thanks for subscribing!");

    let (status, body) = ctx
        .post_json("/newsletter/subscribe", &json!({ "email": "nope" }))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
}
