//! PostgreSQL-backed album store
//!
//! One pool, created at startup and shared by every request handler.
//! Concurrent use is delegated entirely to sqlx's pooling; this module
//! adds no locking of its own.

use async_trait::async_trait;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgRow, PgSslMode};
use sqlx::{PgPool, Row};

use super::{Album, AlbumChanges, AlbumStore, StoreError, StoreResult};
use crate::config::DatabaseConfig;

/// Album store backed by a PostgreSQL connection pool
#[derive(Clone)]
pub struct PgAlbumStore {
    pool: PgPool,
}

impl PgAlbumStore {
    /// Connect to the configured database and verify the connection.
    ///
    /// Failing here is fatal for the service: the caller aborts startup.
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.dbname)
            .ssl_mode(PgSslMode::Disable);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.ping().await?;
        Ok(store)
    }

    /// Create the albums table when it does not exist yet.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS albums (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                artist TEXT NOT NULL,
                price DOUBLE PRECISION NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

fn album_from_row(row: &PgRow) -> Result<Album, sqlx::Error> {
    Ok(Album {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        artist: row.try_get("artist")?,
        price: row.try_get("price")?,
    })
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[async_trait]
impl AlbumStore for PgAlbumStore {
    async fn list(&self) -> StoreResult<Vec<Album>> {
        let rows = sqlx::query("SELECT id, title, artist, price FROM albums")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| album_from_row(row).map_err(StoreError::from))
            .collect()
    }

    async fn get(&self, id: &str) -> StoreResult<Album> {
        let row = sqlx::query("SELECT id, title, artist, price FROM albums WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(album_from_row(&row)?),
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    async fn insert(&self, album: &Album) -> StoreResult<()> {
        let result =
            sqlx::query("INSERT INTO albums (id, title, artist, price) VALUES ($1, $2, $3, $4)")
                .bind(&album.id)
                .bind(&album.title)
                .bind(&album.artist)
                .bind(album.price)
                .execute(&self.pool)
                .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(StoreError::AlreadyExists(album.id.clone())),
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, id: &str, changes: &AlbumChanges) -> StoreResult<()> {
        // COALESCE keeps the stored value for every absent field; a zero
        // row count means the id does not exist.
        let result = sqlx::query(
            "UPDATE albums
                SET title = COALESCE($1, title),
                    artist = COALESCE($2, artist),
                    price = COALESCE($3, price)
              WHERE id = $4",
        )
        .bind(changes.title.as_deref())
        .bind(changes.artist.as_deref())
        .bind(changes.price)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM albums WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
