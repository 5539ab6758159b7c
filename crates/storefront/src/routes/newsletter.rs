//! Newsletter subscription route handlers.
//!
//! Accepts an email, validates its shape, and confirms. There is no
//! mailing-list backend; accepted addresses are logged and the client
//! shows the confirmation message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use elitestore_core::checkout::is_valid_email;

/// Newsletter subscription request.
#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    #[serde(default)]
    pub email: String,
}

/// Response for a subscription attempt.
#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
    pub success: bool,
    pub message: String,
}

/// Subscribe to the newsletter.
///
/// POST /newsletter/subscribe
///
/// A malformed email is a 422; anything else is accepted.
#[instrument(skip(request), fields(email = %request.email))]
pub async fn subscribe(Json(request): Json<SubscribeRequest>) -> Response {
    let email = request.email.trim().to_lowercase();

    if !is_valid_email(&email) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(SubscribeResponse {
                success: false,
                message: "Please enter a valid email address".to_string(),
            }),
        )
            .into_response();
    }

    tracing::info!(email = %email, "Newsletter subscription recorded");

    Json(SubscribeResponse {
        success: true,
        message: "Thanks for subscribing!".to_string(),
    })
    .into_response()
}
