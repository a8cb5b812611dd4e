//! # HTTP Server Module
//!
//! The JSON-over-HTTP surface of the album catalog.
//!
//! Route modules follow one pattern: a `*_routes` constructor returning an
//! axum `Router` with its state attached, combined into a single server in
//! [`server`].
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/albums` - List and create albums
//! - `/albums/{id}` - Fetch, update, and delete one album

pub mod album_routes;
pub mod health_routes;
pub mod server;

pub use album_routes::{album_routes, AlbumState};
pub use health_routes::health_routes;
pub use server::HttpServer;
