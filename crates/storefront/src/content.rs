//! Markdown content for the static marketing pages.
//!
//! Pages live as markdown files with YAML frontmatter under
//! `content/pages/`, loaded once at startup and rendered to HTML. The
//! store degrades gracefully: a missing directory yields an empty
//! store, a malformed file is skipped, and both are logged.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use comrak::{Options, markdown_to_html};
use gray_matter::{Matter, ParsedEntity, engine::YAML};
use serde::Deserialize;

/// Frontmatter metadata for a static page.
#[derive(Debug, Clone, Deserialize)]
pub struct PageMeta {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub updated_at: Option<NaiveDate>,
}

/// A rendered page with metadata and HTML content.
#[derive(Debug, Clone)]
pub struct Page {
    pub slug: String,
    pub meta: PageMeta,
    pub content_html: String,
}

/// Content store that holds all loaded pages in memory.
#[derive(Debug, Clone)]
pub struct ContentStore {
    pages: Arc<HashMap<String, Page>>,
}

impl ContentStore {
    /// Load all content from the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if the pages directory exists but cannot be
    /// read.
    pub fn load(content_dir: &Path) -> Result<Self, ContentError> {
        let pages = Self::load_pages(&content_dir.join("pages"))?;

        Ok(Self {
            pages: Arc::new(pages),
        })
    }

    /// Load all pages from the pages directory
    fn load_pages(dir: &Path) -> Result<HashMap<String, Page>, ContentError> {
        let mut pages = HashMap::new();

        if !dir.exists() {
            tracing::warn!("Pages directory does not exist: {:?}", dir);
            return Ok(pages);
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ContentError::Io(e.to_string()))?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "md") {
                match Self::load_page(&path) {
                    Ok(page) => {
                        tracing::info!("Loaded page: {}", page.slug);
                        pages.insert(page.slug.clone(), page);
                    }
                    Err(e) => {
                        tracing::error!("Failed to load page {:?}: {}", path, e);
                    }
                }
            }
        }

        Ok(pages)
    }

    /// Load a single page from a markdown file
    fn load_page(path: &Path) -> Result<Page, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|e| ContentError::Io(e.to_string()))?;

        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ContentError::Parse("Invalid filename".to_string()))?
            .to_string();

        let matter = Matter::<YAML>::new();
        let parsed: ParsedEntity<PageMeta> = matter
            .parse(&content)
            .map_err(|e| ContentError::Parse(format!("Failed to parse frontmatter: {e}")))?;
        let meta = parsed
            .data
            .ok_or_else(|| ContentError::Parse("Missing frontmatter".to_string()))?;

        let content_html = render_markdown(&parsed.content);

        Ok(Page {
            slug,
            meta,
            content_html,
        })
    }

    /// Get a page by slug
    #[must_use]
    pub fn get_page(&self, slug: &str) -> Option<&Page> {
        self.pages.get(slug)
    }

    /// Number of loaded pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Render markdown to HTML with GitHub Flavored Markdown support.
fn render_markdown(content: &str) -> String {
    let mut options = Options::default();

    // Enable GFM extensions
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;

    markdown_to_html(content, &options)
}

/// Content loading errors
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn temp_content_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("elitestore-content-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_missing_directory_yields_empty_store() {
        let store = ContentStore::load(&temp_content_dir("missing")).unwrap();
        assert_eq!(store.page_count(), 0);
        assert!(store.get_page("about").is_none());
    }

    #[test]
    fn test_loads_page_and_skips_malformed_file() {
        let dir = temp_content_dir("mixed");
        let pages = dir.join("pages");
        std::fs::create_dir_all(&pages).unwrap();
        std::fs::write(
            pages.join("about.md"),
            "---\ntitle: About Us\ndescription: Who we are\n---\n\n# Our Story\n\nHello.\n",
        )
        .unwrap();
        std::fs::write(pages.join("broken.md"), "no frontmatter here").unwrap();
        std::fs::write(pages.join("notes.txt"), "not markdown").unwrap();

        let store = ContentStore::load(&dir).unwrap();
        assert_eq!(store.page_count(), 1);

        let page = store.get_page("about").unwrap();
        assert_eq!(page.meta.title, "About Us");
        assert_eq!(page.meta.description.as_deref(), Some("Who we are"));
        assert!(page.content_html.contains("<h1>"));
        assert!(page.content_html.contains("Our Story"));

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_render_markdown_supports_tables() {
        let html = render_markdown("| a | b |\n| - | - |\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }
}
