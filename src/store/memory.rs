//! In-memory album store
//!
//! Mirrors the observable semantics of the PostgreSQL store for tests and
//! local development without a database: duplicate inserts fail, updates
//! and deletes of missing ids fail.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Album, AlbumChanges, AlbumStore, StoreError, StoreResult};

/// Album store holding rows in process memory
#[derive(Default)]
pub struct MemoryAlbumStore {
    albums: RwLock<BTreeMap<String, Album>>,
}

impl MemoryAlbumStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with the given albums
    pub fn with_albums(albums: impl IntoIterator<Item = Album>) -> Self {
        let albums = albums
            .into_iter()
            .map(|album| (album.id.clone(), album))
            .collect();
        Self {
            albums: RwLock::new(albums),
        }
    }
}

#[async_trait]
impl AlbumStore for MemoryAlbumStore {
    async fn list(&self) -> StoreResult<Vec<Album>> {
        Ok(self.albums.read().await.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> StoreResult<Album> {
        self.albums
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn insert(&self, album: &Album) -> StoreResult<()> {
        let mut albums = self.albums.write().await;
        if albums.contains_key(&album.id) {
            return Err(StoreError::AlreadyExists(album.id.clone()));
        }
        albums.insert(album.id.clone(), album.clone());
        Ok(())
    }

    async fn update(&self, id: &str, changes: &AlbumChanges) -> StoreResult<()> {
        let mut albums = self.albums.write().await;
        let album = albums
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if let Some(title) = &changes.title {
            album.title = title.clone();
        }
        if let Some(artist) = &changes.artist {
            album.artist = artist.clone();
        }
        if let Some(price) = changes.price {
            album.price = price;
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        self.albums
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
