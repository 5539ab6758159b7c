//! Catalog API client implementation.
//!
//! One `GET` per call against the catalog's REST endpoints, parsed
//! straight into the core product types. Cheap to clone; handlers share
//! one client through application state.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::instrument;

use elitestore_core::types::{Product, ProductId};

use crate::catalog::CatalogError;

/// Client for the remote product catalog.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// `base_url` is the catalog root without a trailing slash, as
    /// produced by configuration loading.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
        }
    }

    /// Issue one GET round trip and parse the JSON response.
    ///
    /// A 404 maps to [`CatalogError::NotFound`] carrying the request
    /// path; any other non-success status maps to
    /// [`CatalogError::Status`].
    async fn get_json<T: DeserializeOwned>(
        &self,
        path_and_query: &str,
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.inner.base_url, path_and_query);

        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(path_and_query.to_string()));
        }

        // Read the body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(200).collect::<String>(),
                "Catalog returned non-success status"
            );
            return Err(CatalogError::Status(status.as_u16()));
        }

        // Some catalogs answer an unknown id with 200 and an empty
        // body; map that to JSON null so optional decodes see None.
        let body = if response_text.trim().is_empty() {
            "null"
        } else {
            response_text.as_str()
        };

        serde_json::from_str(body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %response_text.chars().take(200).collect::<String>(),
                "Failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })
    }

    /// Get all category names, in the catalog's own order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self))]
    pub async fn get_categories(&self) -> Result<Vec<String>, CatalogError> {
        self.get_json("/categories").await
    }

    /// Get all products, in the catalog's own order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.get_json("/products").await
    }

    /// Get the first `limit` products, per the catalog's own ordering.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self))]
    pub async fn get_limited_products(&self, limit: u32) -> Result<Vec<Product>, CatalogError> {
        self.get_json(&format!("/products?limit={limit}")).await
    }

    /// Get the products of one category.
    ///
    /// Matching is exact and delegated to the catalog; a category with
    /// no products yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self), fields(category = %category))]
    pub async fn get_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, CatalogError> {
        self.get_json(&format!(
            "/products/category/{}",
            urlencoding::encode(category)
        ))
        .await
    }

    /// Get a single product by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when the id does not exist
    /// upstream, whether the catalog signals that with a 404 or with an
    /// empty body.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let path = format!("/products/{}", id.as_i32());
        let product: Option<Product> = self.get_json(&path).await?;
        product.ok_or(CatalogError::NotFound(path))
    }
}
