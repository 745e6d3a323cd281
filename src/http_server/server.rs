//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.
//!
//! The stores are constructed by the caller and handed to the server; routers
//! receive them as axum state.

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::basics_routes::basics_routes;
use super::comments_routes::comments_routes;
use super::config::HttpServerConfig;
use super::messages_routes::messages_routes;
use super::observability_routes::{health_routes, HealthState};
use super::pagination_routes::pagination_routes;
use super::web_routes::web_routes;
use crate::store::{RecordStore, SharedStore};

/// Seed content of the messages store
pub const SEED_MESSAGE: &str = "First message";

/// Seed content of the comments store
pub const SEED_COMMENT: &str = "First comment";

/// The process-lifetime stores served over HTTP
#[derive(Debug, Clone, Default)]
pub struct Stores {
    /// Shared by the JSON API and the HTML views
    pub messages: SharedStore,
    pub comments: SharedStore,
}

impl Stores {
    /// Empty stores
    pub fn empty() -> Self {
        Self::default()
    }

    /// Stores holding one seed record each
    pub fn seeded() -> Self {
        Self {
            messages: RecordStore::with_seed(SEED_MESSAGE).into(),
            comments: RecordStore::with_seed(SEED_COMMENT).into(),
        }
    }
}

/// HTTP Server for the message board
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration and seeded stores
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default(), Stores::seeded())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig, stores: Stores) -> Self {
        let router = build_router(&config, stores);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server and serve until Ctrl+C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!(%addr, "msgboard HTTP server listening");
        tracing::info!("JSON API: /messages, /comments");
        tracing::info!("Web pages: /web/messages");
        tracing::info!("Dependency demo: /deps/messages, /deps/comments, /deps/users");
        tracing::info!("Health check: /health");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the combined router with all endpoints
pub fn build_router(config: &HttpServerConfig, stores: Stores) -> Router {
    let health_state = HealthState {
        messages: stores.messages.clone(),
        comments: stores.comments.clone(),
    };

    Router::new()
        .merge(health_routes(health_state))
        .merge(basics_routes())
        .merge(messages_routes(stores.messages.clone()))
        .merge(web_routes(stores.messages))
        .merge(comments_routes(stores.comments))
        .nest("/deps", pagination_routes())
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

/// Configure CORS from config
fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
    if config.is_cors_permissive() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(8080);
        let server = HttpServer::with_config(config, Stores::empty());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[tokio::test]
    async fn test_seeded_stores() {
        let stores = Stores::seeded();
        assert_eq!(stores.messages.get(0).await.unwrap().content, SEED_MESSAGE);
        assert_eq!(stores.comments.get(0).await.unwrap().content, SEED_COMMENT);
    }
}
