//! EliteStore Storefront - Public e-commerce service.
//!
//! This binary serves the storefront's pages as JSON view models on
//! port 3000.
//!
//! # Architecture
//!
//! - Axum web framework serving JSON view models
//! - Remote product catalog consumed read-only over HTTP
//! - Cart state held in memory and persisted to a local JSON file
//! - Markdown content pages loaded once at startup

#![cfg_attr(not(test), forbid(unsafe_code))]

use elitestore_storefront::config::{LogFormat, StorefrontConfig};
use elitestore_storefront::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    init_tracing(&config);

    // Build application state and hydrate the cart from storage
    let state =
        AppState::new(config.clone()).expect("Failed to initialize application state");
    state.cart().hydrate();
    tracing::info!(pages = state.content().page_count(), "Content pages loaded");

    let app = elitestore_storefront::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Initialize tracing with `EnvFilter`.
///
/// Defaults to info level for our crate if `RUST_LOG` is not set.
fn init_tracing(config: &StorefrontConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "elitestore_storefront=info,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
