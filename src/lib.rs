//! albumstore - a small, self-hostable album catalog service
//!
//! JSON-over-HTTP CRUD for a single `albums` table backed by PostgreSQL.
//! The HTTP layer reaches storage only through the [`store::AlbumStore`]
//! trait, so everything above the pool is testable without a database.

pub mod config;
pub mod http_server;
pub mod store;

use std::sync::Arc;

use log::{info, warn};
use thiserror::Error;

use config::{Config, ConfigError};
use http_server::HttpServer;
use store::{PgAlbumStore, StoreError};

/// Top-level failure surfaced by [`run`]
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The database could not be reached at startup
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The listener could not be bound or the server failed
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load configuration, connect to the database, and serve until shutdown.
///
/// Startup failures are fatal: the caller is expected to print the error
/// and exit non-zero.
pub async fn run() -> Result<(), ServiceError> {
    match dotenvy::dotenv() {
        Ok(path) => info!("loaded environment from {}", path.display()),
        Err(e) => warn!("no .env file loaded: {}", e),
    }

    let config = Config::from_env()?;

    let store = PgAlbumStore::connect(&config.database).await?;
    store.ensure_schema().await?;
    info!(
        "connected to database {} at {}:{}",
        config.database.dbname, config.database.host, config.database.port
    );

    let server = HttpServer::new(config.http, Arc::new(store));
    server.start().await?;

    Ok(())
}
