//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use elitestore_core::types::{Product, ProductId, Rating};

use crate::error::Result;
use crate::state::AppState;

/// Maximum number of related products on the detail page.
const RELATED_PRODUCTS_LIMIT: usize = 4;

/// Product display data for catalog pages.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: ProductId,
    pub title: String,
    /// Display price, e.g. `$109.95`.
    pub price: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

/// Product listing page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsIndexView {
    pub products: Vec<ProductView>,
}

/// Product detail page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductShowView {
    pub product: ProductView,
    /// Up to four other products from the same category.
    pub related_products: Vec<ProductView>,
}

// =============================================================================
// Type Conversions
// =============================================================================

/// Format a decimal amount as a display price string.
pub fn format_price(amount: Decimal) -> String {
    format!("${amount:.2}")
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: format_price(product.price),
            description: product.description.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            rating: product.rating.clone(),
        }
    }
}

/// Display the product listing page.
///
/// GET /products
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<ProductsIndexView>> {
    let products = state.catalog().get_products().await?;

    Ok(Json(ProductsIndexView {
        products: products.iter().map(ProductView::from).collect(),
    }))
}

/// Display a product detail page with related products.
///
/// GET /products/{id}
///
/// Related products come from the product's own category, excluding
/// the product itself. A failed related-products fetch degrades to an
/// empty list rather than failing the page.
#[instrument(skip(state), fields(product_id = %id))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ProductShowView>> {
    let product = state.catalog().get_product(id).await?;

    let related_products = state
        .catalog()
        .get_products_by_category(&product.category)
        .await
        .map_or_else(
            |e| {
                tracing::error!("Failed to fetch related products: {e}");
                Vec::new()
            },
            |products| {
                products
                    .iter()
                    .filter(|p| p.id != id)
                    .take(RELATED_PRODUCTS_LIMIT)
                    .map(ProductView::from)
                    .collect()
            },
        );

    Ok(Json(ProductShowView {
        product: ProductView::from(&product),
        related_products,
    }))
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    fn product(id: i32, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: dec!(9.99),
            description: String::new(),
            category: category.into(),
            image: format!("https://example.com/{id}.jpg"),
            rating: Rating {
                rate: dec!(4.5),
                count: 10,
            },
        }
    }

    #[test]
    fn test_format_price_pads_cents() {
        assert_eq!(format_price(dec!(109.95)), "$109.95");
        assert_eq!(format_price(dec!(5)), "$5.00");
        assert_eq!(format_price(dec!(0.5)), "$0.50");
    }

    #[test]
    fn test_related_selection_excludes_self_and_caps_at_four() {
        let category: Vec<Product> = (1..=6).map(|id| product(id, "electronics")).collect();
        let own_id = ProductId::new(3);

        let related: Vec<ProductView> = category
            .iter()
            .filter(|p| p.id != own_id)
            .take(RELATED_PRODUCTS_LIMIT)
            .map(ProductView::from)
            .collect();

        assert_eq!(related.len(), 4);
        assert!(related.iter().all(|p| p.id != own_id));
        let ids: Vec<i32> = related.iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2, 4, 5]);
    }

    #[test]
    #[allow(clippy::unwrap_used, clippy::indexing_slicing)]
    fn test_product_view_wire_shape() {
        let view = ProductView::from(&product(7, "jewelery"));
        let value = serde_json::to_value(&view).unwrap();

        assert_eq!(value["id"], serde_json::json!(7));
        assert_eq!(value["price"], serde_json::json!("$9.99"));
        assert_eq!(value["rating"]["count"], serde_json::json!(10));
    }
}
