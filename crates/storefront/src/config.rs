//! Storefront configuration loaded from environment variables.
//!
//! Every variable has a default, so the binary starts with no
//! configuration at all and talks to the public catalog.
//!
//! # Environment Variables
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `CATALOG_BASE_URL` - Remote product catalog root (default: <https://fakestoreapi.com>)
//! - `CART_STORAGE_PATH` - JSON file holding the persisted cart (default: data/cart.json)
//! - `CONTENT_DIR` - Markdown content pages directory (default: content)
//! - `CHECKOUT_PROCESSING_DELAY_MS` - Simulated payment processing delay (default: 2000)
//! - `CONTACT_PROCESSING_DELAY_MS` - Simulated contact form delay (default: 1000)
//! - `LOG_FORMAT` - `pretty` or `json` (default: pretty)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// How log lines are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Base URL of the remote product catalog, no trailing slash
    pub catalog_base_url: String,
    /// Path of the JSON file the cart persists to
    pub cart_storage_path: PathBuf,
    /// Directory holding markdown content pages
    pub content_dir: PathBuf,
    /// Simulated payment processing delay in milliseconds
    pub checkout_processing_delay_ms: u64,
    /// Simulated contact form processing delay in milliseconds
    pub contact_processing_delay_ms: u64,
    /// Log output format
    pub log_format: LogFormat,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but malformed
    /// (unparseable address, port, delay, or catalog URL).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let catalog_base_url = parse_base_url(
            "CATALOG_BASE_URL",
            &get_env_or_default("CATALOG_BASE_URL", "https://fakestoreapi.com"),
        )?;
        let cart_storage_path =
            PathBuf::from(get_env_or_default("CART_STORAGE_PATH", "data/cart.json"));
        let content_dir = PathBuf::from(get_env_or_default("CONTENT_DIR", "content"));
        let checkout_processing_delay_ms =
            parse_delay_ms("CHECKOUT_PROCESSING_DELAY_MS", "2000")?;
        let contact_processing_delay_ms = parse_delay_ms("CONTACT_PROCESSING_DELAY_MS", "1000")?;
        let log_format = parse_log_format(&get_env_or_default("LOG_FORMAT", "pretty"))?;

        Ok(Self {
            host,
            port,
            catalog_base_url,
            cart_storage_path,
            content_dir,
            checkout_processing_delay_ms,
            contact_processing_delay_ms,
            log_format,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate a catalog base URL and strip any trailing slash.
fn parse_base_url(key: &str, value: &str) -> Result<String, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(value.trim_end_matches('/').to_string())
}

/// Parse a millisecond delay variable.
fn parse_delay_ms(key: &str, default: &str) -> Result<u64, ConfigError> {
    get_env_or_default(key, default)
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse the log format variable.
fn parse_log_format(value: &str) -> Result<LogFormat, ConfigError> {
    match value {
        "pretty" => Ok(LogFormat::Pretty),
        "json" => Ok(LogFormat::Json),
        other => Err(ConfigError::InvalidEnvVar(
            "LOG_FORMAT".to_string(),
            format!("expected 'pretty' or 'json', got '{other}'"),
        )),
    }
}
