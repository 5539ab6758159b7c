//! Static content page route handlers.
//!
//! Serves the markdown-based marketing pages (about, contact details)
//! out of the content store.

use axum::{Json, extract::State};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Content page view with the markdown body rendered to HTML.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDate>,
    pub content_html: String,
}

/// Serve a content page by slug.
fn serve_page(state: &AppState, slug: &str) -> Result<Json<PageView>> {
    let page = state
        .content()
        .get_page(slug)
        .ok_or_else(|| AppError::NotFound(format!("Page not found: {slug}")))?;

    Ok(Json(PageView {
        slug: page.slug.clone(),
        title: page.meta.title.clone(),
        description: page.meta.description.clone().unwrap_or_default(),
        updated_at: page.meta.updated_at,
        content_html: page.content_html.clone(),
    }))
}

/// Display the About page.
///
/// GET /about
///
/// # Errors
///
/// Returns 404 if the page content was not loaded at startup.
#[instrument(skip(state))]
pub async fn about(State(state): State<AppState>) -> Result<Json<PageView>> {
    serve_page(&state, "about")
}

/// Display the Contact page.
///
/// GET /contact
///
/// # Errors
///
/// Returns 404 if the page content was not loaded at startup.
#[instrument(skip(state))]
pub async fn contact(State(state): State<AppState>) -> Result<Json<PageView>> {
    serve_page(&state, "contact")
}
