//! Artist CRUD for the back office.

use sqlx::PgPool;

use atelier_core::ArtistId;

use super::RepositoryError;
use crate::models::Artist;

/// Payload for creating or updating an artist.
#[derive(Debug, Clone)]
pub struct ArtistInput {
    pub name: String,
    pub bio: String,
    pub image_url: String,
}

/// Repository for featured artists.
pub struct ArtistRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ArtistRepository<'a> {
    /// Create a new artist repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All artists, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Artist>, RepositoryError> {
        let artists =
            sqlx::query_as::<_, Artist>("SELECT id, name, bio, image_url FROM artists ORDER BY id")
                .fetch_all(self.pool)
                .await?;

        Ok(artists)
    }

    /// Insert an artist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &ArtistInput) -> Result<Artist, RepositoryError> {
        let artist = sqlx::query_as::<_, Artist>(
            "INSERT INTO artists (name, bio, image_url) VALUES ($1, $2, $3) \
             RETURNING id, name, bio, image_url",
        )
        .bind(&input.name)
        .bind(&input.bio)
        .bind(&input.image_url)
        .fetch_one(self.pool)
        .await?;

        Ok(artist)
    }

    /// Replace an artist's fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the artist doesn't exist.
    pub async fn update(&self, id: ArtistId, input: &ArtistInput) -> Result<Artist, RepositoryError> {
        let artist = sqlx::query_as::<_, Artist>(
            "UPDATE artists SET name = $2, bio = $3, image_url = $4 WHERE id = $1 \
             RETURNING id, name, bio, image_url",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.bio)
        .bind(&input.image_url)
        .fetch_optional(self.pool)
        .await?;

        artist.ok_or(RepositoryError::NotFound)
    }

    /// Delete an artist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row was deleted.
    pub async fn delete(&self, id: ArtistId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Number of artists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM artists")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
