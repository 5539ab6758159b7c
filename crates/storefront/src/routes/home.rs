//! Home page route handler.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::state::AppState;

pub use super::products::ProductView;

/// Number of featured products on the home page.
const FEATURED_PRODUCTS_LIMIT: u32 = 8;

// =============================================================================
// Static content
// =============================================================================

/// Hero banner copy.
#[derive(Debug, Clone, Serialize)]
pub struct HeroView {
    pub title: String,
    pub subtitle: String,
}

impl Default for HeroView {
    fn default() -> Self {
        Self {
            title: "Welcome to EliteStore".to_string(),
            subtitle: "Discover premium quality products at unbeatable prices".to_string(),
        }
    }
}

/// A store-feature blurb for the home page strip.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureView {
    pub title: String,
    pub description: String,
}

/// Newsletter call-to-action copy at the bottom of the page.
#[derive(Debug, Clone, Serialize)]
pub struct NewsletterView {
    pub title: String,
    pub subtitle: String,
}

impl Default for NewsletterView {
    fn default() -> Self {
        Self {
            title: "Join Our Newsletter".to_string(),
            subtitle: "Get exclusive deals and updates delivered to your inbox".to_string(),
        }
    }
}

/// Static store features shown below the hero.
fn store_features() -> Vec<FeatureView> {
    vec![
        FeatureView {
            title: "Free Shipping".to_string(),
            description: "Free shipping on orders over $50".to_string(),
        },
        FeatureView {
            title: "Secure Payment".to_string(),
            description: "100% secure payment processing".to_string(),
        },
        FeatureView {
            title: "24/7 Support".to_string(),
            description: "Round the clock customer support".to_string(),
        },
        FeatureView {
            title: "Easy Returns".to_string(),
            description: "30-day return policy".to_string(),
        },
    ]
}

/// Home page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub hero: HeroView,
    pub features: Vec<FeatureView>,
    /// First eight products per catalog order.
    pub featured_products: Vec<ProductView>,
    pub newsletter: NewsletterView,
}

/// Display the home page.
///
/// GET /
///
/// A failed catalog fetch degrades to an empty featured grid so the
/// static sections still render.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Json<HomeView> {
    let featured_products = state
        .catalog()
        .get_limited_products(FEATURED_PRODUCTS_LIMIT)
        .await
        .map_or_else(
            |e| {
                tracing::error!("Failed to fetch featured products: {e}");
                Vec::new()
            },
            |products| products.iter().map(ProductView::from).collect(),
        );

    Json(HomeView {
        hero: HeroView::default(),
        features: store_features(),
        featured_products,
        newsletter: NewsletterView::default(),
    })
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_store_features_cover_the_policy_strip() {
        let features = store_features();
        assert_eq!(features.len(), 4);
        assert_eq!(features[0].title, "Free Shipping");
        assert!(features[0].description.contains("$50"));
    }
}
