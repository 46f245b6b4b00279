//! Artwork CRUD for the back office.

use sqlx::PgPool;

use atelier_core::{ArtworkId, Price};

use super::RepositoryError;
use crate::models::Artwork;

const ARTWORK_COLUMNS: &str =
    "id, title, artist, style, description, price, image_url, likes, created_at, available_sizes";

/// Payload for creating an artwork from the back office.
#[derive(Debug, Clone)]
pub struct NewArtwork {
    pub title: String,
    pub artist: String,
    pub style: String,
    pub description: String,
    pub price: Price,
    pub image_url: String,
    pub available_sizes: Vec<String>,
}

/// Repository for catalog artwork management.
pub struct ArtworkRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ArtworkRepository<'a> {
    /// Create a new artwork repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All artworks, newest first (the back-office listing order).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Artwork>, RepositoryError> {
        let artworks = sqlx::query_as::<_, Artwork>(&format!(
            "SELECT {ARTWORK_COLUMNS} FROM artworks ORDER BY id DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(artworks)
    }

    /// Insert an artwork.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, new: &NewArtwork) -> Result<Artwork, RepositoryError> {
        let artwork = sqlx::query_as::<_, Artwork>(&format!(
            "INSERT INTO artworks \
                 (title, artist, style, description, price, image_url, available_sizes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {ARTWORK_COLUMNS}"
        ))
        .bind(&new.title)
        .bind(&new.artist)
        .bind(&new.style)
        .bind(&new.description)
        .bind(new.price)
        .bind(&new.image_url)
        .bind(&new.available_sizes)
        .fetch_one(self.pool)
        .await?;

        Ok(artwork)
    }

    /// Delete an artwork.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row was deleted.
    pub async fn delete(&self, id: ArtworkId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM artworks WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Number of artworks in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM artworks")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
