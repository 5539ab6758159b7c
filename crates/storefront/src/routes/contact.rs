//! Contact form route handlers.
//!
//! Submissions are validated per field, run through a simulated
//! processing delay, and logged. Nothing is stored and no email is
//! sent; the log line is the paper trail.

use std::time::Duration;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use elitestore_core::checkout::{FieldErrors, is_valid_email};

use crate::state::AppState;

use super::checkout::ValidationErrors;

/// Message returned for an accepted submission.
const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

/// Contact form data.
///
/// Fields default so a partial submission still deserializes and gets
/// per-field messages back.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Validate every field, collecting one message per failing field.
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert("name", "Name is required");
        }
        if self.email.trim().is_empty() {
            errors.insert("email", "Email is required");
        }
        if self.subject.trim().is_empty() {
            errors.insert("subject", "Subject is required");
        }
        if self.message.trim().is_empty() {
            errors.insert("message", "Message is required");
        }

        if !self.email.is_empty() && !is_valid_email(self.email.trim()) {
            errors.insert("email", "Please enter a valid email address");
        }

        errors
    }
}

/// Response for an accepted submission.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

/// Submit the contact form.
///
/// POST /contact
///
/// Validation failures come back as 422 with per-field messages. An
/// accepted submission waits the simulated processing delay and is
/// logged.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn submit(State(state): State<AppState>, Json(form): Json<ContactForm>) -> Response {
    let errors = form.validate();
    if !errors.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrors { errors }),
        )
            .into_response();
    }

    tokio::time::sleep(Duration::from_millis(
        state.config().contact_processing_delay_ms,
    ))
    .await;

    tracing::info!(
        name = %form.name.trim(),
        subject = %form.subject.trim(),
        "Contact form submitted"
    );

    Json(ContactResponse {
        success: true,
        message: SUCCESS_MESSAGE.to_string(),
    })
    .into_response()
}
