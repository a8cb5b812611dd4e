//! # Album Storage Module
//!
//! Persistence for the album catalog.
//!
//! The HTTP layer reaches storage only through the [`AlbumStore`] trait,
//! injected as an `Arc<dyn AlbumStore>`. The production implementation is
//! [`PgAlbumStore`] over a PostgreSQL pool; [`MemoryAlbumStore`] mirrors
//! its observable semantics for tests and local development.

pub mod album;
pub mod errors;
pub mod memory;
pub mod postgres;

pub use album::{Album, AlbumChanges};
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryAlbumStore;
pub use postgres::PgAlbumStore;

use async_trait::async_trait;

/// Storage operations for the album catalog
#[async_trait]
pub trait AlbumStore: Send + Sync {
    /// All albums, in unspecified order
    async fn list(&self) -> StoreResult<Vec<Album>>;

    /// The album with the given id
    async fn get(&self, id: &str) -> StoreResult<Album>;

    /// Insert a new album; fails with [`StoreError::AlreadyExists`] when
    /// the id is taken
    async fn insert(&self, album: &Album) -> StoreResult<()>;

    /// Apply the given changes to an existing album; fails with
    /// [`StoreError::NotFound`] when no row has the id
    async fn update(&self, id: &str, changes: &AlbumChanges) -> StoreResult<()>;

    /// Delete the album with the given id
    async fn delete(&self, id: &str) -> StoreResult<()>;

    /// Connectivity check
    async fn ping(&self) -> StoreResult<()>;
}
