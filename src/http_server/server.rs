//! HTTP server assembly
//!
//! Combines the route modules into one router and serves it.

use std::io;
use std::sync::Arc;

use axum::Router;
use log::info;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::HttpServerConfig;
use crate::store::AlbumStore;

use super::album_routes::{album_routes, AlbumState};
use super::health_routes::health_routes;

/// HTTP server for the album catalog API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server around the given store
    pub fn new(config: HttpServerConfig, store: Arc<dyn AlbumStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, store: Arc<dyn AlbumStore>) -> Router {
        let state = Arc::new(AlbumState::new(store));

        // Permissive CORS when no origins are configured (development);
        // otherwise restrict to the configured list.
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(album_routes(state))
            .layer(cors)
    }

    /// Socket address string the server binds to
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until shutdown
    pub async fn start(self) -> Result<(), io::Error> {
        let addr = self.socket_addr();
        let listener = TcpListener::bind(&addr).await?;
        info!("listening on http://{}", addr);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
