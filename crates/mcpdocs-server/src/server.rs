//! API server implementation.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use mcpdocs_catalog::Catalog;

use crate::handlers;
use crate::mapping;

/// Configuration for the API server.
#[derive(Debug, Clone)]
pub struct ApiServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address {0}: {1}")]
    InvalidAddress(String, String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("Server error: {0}")]
    ServeError(String),
}

/// Shared, read-only state of the request handlers.
pub type SharedCatalog = Arc<Catalog>;

/// Build the API router over a catalog.
pub fn build_router(catalog: SharedCatalog) -> Router {
    Router::new()
        .route("/components", get(handlers::list_components))
        .route("/components/{name}", get(handlers::show_component))
        .route("/mapping/{name}", get(handlers::component_mapping))
        .route("/assets", get(handlers::list_assets))
        .route("/assets/{name}", get(handlers::show_asset))
        .route("/tokens", get(handlers::list_tokens))
        .route("/tokens/{name}", get(handlers::show_token))
        .route("/map-figma-to-rails", post(mapping::figma_to_rails))
        .route("/map-figma-to-vue", post(mapping::figma_to_vue))
        .layer(CorsLayer::permissive())
        .with_state(catalog)
}

/// JSON API server.
pub struct ApiServer {
    config: ApiServerConfig,
    catalog: SharedCatalog,
}

impl ApiServer {
    /// Create a new API server.
    pub fn new(config: ApiServerConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
        }
    }

    /// Address the server will listen on.
    pub fn addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        addr.parse()
            .map_err(|e: std::net::AddrParseError| ServerError::InvalidAddress(addr, e.to_string()))
    }

    /// Start serving until the process is stopped.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr = self.addr()?;
        let app = build_router(Arc::clone(&self.catalog));

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        tracing::info!("Serving component docs at http://{}", addr);

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::ServeError(e.to_string()))?;

        Ok(())
    }
}
