//! Product types matching the remote catalog's wire shape.
//!
//! The catalog serves prices and rating scores as JSON numbers, so the
//! decimal fields opt into float serde rather than the string form.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// A product as served by the remote catalog.
///
/// Read-only: the catalog owns this data and the storefront never writes
/// it back. Held transiently in memory by the view layer and denormalized
/// into cart lines when added to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog-assigned identifier, unique across all products.
    pub id: ProductId,
    pub title: String,
    /// Non-negative amount in currency units (dollars, not cents).
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: String,
    /// One of an open set of category names returned by the catalog.
    pub category: String,
    /// URI of the product image.
    pub image: String,
    pub rating: Rating,
}

/// Aggregate customer rating for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score, 0 to 5.
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    /// Number of ratings the average is built from.
    pub count: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const PRODUCT_JSON: &str = r#"{
        "id": 1,
        "title": "Fjallraven - Foldsack No. 1 Backpack",
        "price": 109.95,
        "description": "Your perfect pack for everyday use.",
        "category": "men's clothing",
        "image": "https://example.com/img/81fPKd-2AYL.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    }"#;

    #[test]
    fn test_deserialize_wire_shape() {
        let product: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price, Decimal::new(10995, 2));
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating.rate, Decimal::new(39, 1));
        assert_eq!(product.rating.count, 120);
    }

    #[test]
    fn test_price_serializes_as_number() {
        let product: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        let value = serde_json::to_value(&product).unwrap();
        assert!(value["price"].is_number());
        assert!(value["rating"]["rate"].is_number());
    }

    #[test]
    fn test_roundtrip() {
        let product: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
