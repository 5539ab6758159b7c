//! Unified error handling for route handlers.
//!
//! Provides a unified `AppError` type that logs server-side failures
//! before responding to the client. All route handlers should return
//! `Result<T, AppError>`. Nothing here is fatal: the worst outcome for
//! the client is a degraded or empty view.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::catalog::CatalogError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog query failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Upstream and internal failures are logged server-side; the
        // client only ever sees the generic message below.
        if matches!(self, Self::Internal(_)) || matches!(&self, Self::Catalog(e) if !e.is_not_found())
        {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Catalog(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            Self::Catalog(_) => StatusCode::BAD_GATEWAY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Catalog(err) if err.is_not_found() => "Not found".to_string(),
            Self::Catalog(_) => "Could not load catalog data".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
            Self::NotFound(_) => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
