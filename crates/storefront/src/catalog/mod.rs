//! Remote product catalog client.
//!
//! # Architecture
//!
//! - Plain REST JSON over `reqwest`; the catalog is a passive external
//!   dependency, not part of the storefront
//! - Every call is a single request/response round trip: no retries, no
//!   backoff, no caching
//! - The catalog owns all filtering and ordering; this client never
//!   re-sorts or re-filters what it receives
//!
//! # Endpoints
//!
//! - `GET /categories` - category names
//! - `GET /products` and `GET /products?limit=n` - product listings
//! - `GET /products/category/{category}` - products of one category
//! - `GET /products/{id}` - a single product, or a not-found status

mod client;

pub use client::CatalogClient;

use thiserror::Error;

/// Errors that can occur when querying the catalog.
///
/// `NotFound` is the one distinguished failure; everything else is the
/// generic fetch-failure the view layer renders as "could not load".
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Catalog returned a non-success status other than 404.
    #[error("Catalog returned status {0}")]
    Status(u16),

    /// Resource not found upstream.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl CatalogError {
    /// True when the failure means the requested resource does not exist,
    /// as opposed to the catalog being unreachable or misbehaving.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = CatalogError::NotFound("/products/999999".to_string());
        assert_eq!(err.to_string(), "Not found: /products/999999");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_status_display() {
        let err = CatalogError::Status(503);
        assert_eq!(err.to_string(), "Catalog returned status 503");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_parse_error_is_not_not_found() {
        let parse_err = serde_json::from_str::<i32>("not json").unwrap_err();
        let err = CatalogError::from(parse_err);
        assert!(!err.is_not_found());
        assert!(err.to_string().starts_with("JSON parse error"));
    }
}
