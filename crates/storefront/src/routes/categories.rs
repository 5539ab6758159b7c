//! Category route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use elitestore_core::types::Product;

use crate::error::{AppError, Result};
use crate::state::AppState;

pub use super::products::ProductView;

/// Category display data for the categories index.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub name: String,
    pub description: String,
}

/// Categories index page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesIndexView {
    pub categories: Vec<CategoryView>,
}

/// Single category page with its sorted products.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShowView {
    pub category: String,
    pub products: Vec<ProductView>,
}

/// Sort query parameters for the category page.
#[derive(Debug, Deserialize)]
pub struct SortQuery {
    pub sort: Option<String>,
}

/// Product ordering for a category page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Case-insensitive title order.
    #[default]
    Name,
    PriceAsc,
    PriceDesc,
    /// Highest rated first.
    Rating,
}

impl SortKey {
    /// Parse the `sort` query value, defaulting to name order for
    /// anything unrecognized.
    fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("price-asc") => Self::PriceAsc,
            Some("price-desc") => Self::PriceDesc,
            Some("rating") => Self::Rating,
            _ => Self::Name,
        }
    }

    /// Sort products in place according to this key.
    fn apply(self, products: &mut [Product]) {
        match self {
            Self::Name => {
                products.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
            }
            Self::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
            Self::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
            Self::Rating => products.sort_by(|a, b| b.rating.rate.cmp(&a.rating.rate)),
        }
    }
}

/// Per-category marketing blurbs. Categories come from the catalog,
/// so unknown names fall back to a generic line.
fn category_description(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "men's clothing" => "Discover the latest trends in men's fashion",
        "women's clothing" => "Elegant and stylish clothing for women",
        "jewelery" => "Beautiful jewelry pieces for every occasion",
        "electronics" => "Latest gadgets and electronic devices",
        _ => "Explore our premium collection",
    }
}

/// Display the categories index.
///
/// GET /categories
///
/// A failed catalog fetch degrades to an empty grid.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<CategoriesIndexView> {
    let categories = state.catalog().get_categories().await.map_or_else(
        |e| {
            tracing::error!("Failed to fetch categories: {e}");
            Vec::new()
        },
        |names| {
            names
                .into_iter()
                .map(|name| {
                    let description = category_description(&name).to_string();
                    CategoryView { name, description }
                })
                .collect()
        },
    );

    Json(CategoriesIndexView { categories })
}

/// Display one category's products, sorted per the `sort` query
/// parameter: `name` (default), `price-asc`, `price-desc`, `rating`.
///
/// GET /categories/{category}?sort=...
///
/// A category the catalog has no products for is a 404.
#[instrument(skip(state), fields(category = %category))]
pub async fn show(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<SortQuery>,
) -> Result<Json<CategoryShowView>> {
    let mut products = state.catalog().get_products_by_category(&category).await?;

    if products.is_empty() {
        return Err(AppError::NotFound(format!("Category not found: {category}")));
    }

    SortKey::from_query(query.sort.as_deref()).apply(&mut products);

    Ok(Json(CategoryShowView {
        category,
        products: products.iter().map(ProductView::from).collect(),
    }))
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use rust_decimal::{Decimal, dec};

    use elitestore_core::types::{ProductId, Rating};

    use super::*;

    fn product(id: i32, title: &str, price: Decimal, rate: Decimal) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.into(),
            price,
            description: String::new(),
            category: "electronics".into(),
            image: String::new(),
            rating: Rating { rate, count: 10 },
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product(1, "zebra speaker", dec!(30.00), dec!(3.0)),
            product(2, "Amp", dec!(10.00), dec!(4.8)),
            product(3, "monitor", dec!(20.00), dec!(4.1)),
        ]
    }

    fn titles(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_sort_key_parsing_defaults_to_name() {
        assert_eq!(SortKey::from_query(None), SortKey::Name);
        assert_eq!(SortKey::from_query(Some("name")), SortKey::Name);
        assert_eq!(SortKey::from_query(Some("price-asc")), SortKey::PriceAsc);
        assert_eq!(SortKey::from_query(Some("price-desc")), SortKey::PriceDesc);
        assert_eq!(SortKey::from_query(Some("rating")), SortKey::Rating);
        assert_eq!(SortKey::from_query(Some("bogus")), SortKey::Name);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let mut products = fixture();
        SortKey::Name.apply(&mut products);
        assert_eq!(titles(&products), vec!["Amp", "monitor", "zebra speaker"]);
    }

    #[test]
    fn test_price_sorts() {
        let mut products = fixture();
        SortKey::PriceAsc.apply(&mut products);
        assert_eq!(titles(&products), vec!["Amp", "monitor", "zebra speaker"]);

        SortKey::PriceDesc.apply(&mut products);
        assert_eq!(titles(&products), vec!["zebra speaker", "monitor", "Amp"]);
    }

    #[test]
    fn test_rating_sorts_highest_first() {
        let mut products = fixture();
        SortKey::Rating.apply(&mut products);
        assert_eq!(titles(&products), vec!["Amp", "monitor", "zebra speaker"]);
        assert_eq!(products[0].rating.rate, dec!(4.8));
    }

    #[test]
    fn test_unknown_category_gets_generic_description() {
        assert_eq!(
            category_description("jewelery"),
            "Beautiful jewelry pieces for every occasion"
        );
        assert_eq!(
            category_description("Electronics"),
            "Latest gadgets and electronic devices"
        );
        assert_eq!(
            category_description("stationery"),
            "Explore our premium collection"
        );
    }
}
