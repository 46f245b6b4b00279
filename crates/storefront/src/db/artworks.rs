//! Artwork repository.

use sqlx::PgPool;

use atelier_core::ArtworkId;

use super::RepositoryError;
use crate::models::{Artwork, NewArtwork};

const ARTWORK_COLUMNS: &str = "id, title, artist, style, description, price, image_url, likes, \
                               created_at, available_sizes, submitted_by";

/// Repository for catalog artwork reads and shopper submissions.
pub struct ArtworkRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ArtworkRepository<'a> {
    /// Create a new artwork repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the full catalog, in insertion order.
    ///
    /// The gallery pipeline does its own filtering and ordering, so no
    /// query-side sorting beyond a stable base order is needed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Artwork>, RepositoryError> {
        let artworks = sqlx::query_as::<_, Artwork>(&format!(
            "SELECT {ARTWORK_COLUMNS} FROM artworks ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(artworks)
    }

    /// Fetch a single artwork by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ArtworkId) -> Result<Option<Artwork>, RepositoryError> {
        let artwork = sqlx::query_as::<_, Artwork>(&format!(
            "SELECT {ARTWORK_COLUMNS} FROM artworks WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(artwork)
    }

    /// Insert a submitted artwork. Like count starts at zero and the
    /// creation timestamp is server-generated.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, new: &NewArtwork) -> Result<Artwork, RepositoryError> {
        let artwork = sqlx::query_as::<_, Artwork>(&format!(
            "INSERT INTO artworks \
                 (title, artist, style, description, price, image_url, available_sizes, submitted_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {ARTWORK_COLUMNS}"
        ))
        .bind(&new.title)
        .bind(&new.artist)
        .bind(&new.style)
        .bind(&new.description)
        .bind(new.price)
        .bind(&new.image_url)
        .bind(&new.available_sizes)
        .bind(new.submitted_by)
        .fetch_one(self.pool)
        .await?;

        Ok(artwork)
    }
}
