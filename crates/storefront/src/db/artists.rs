//! Artist reads for the featured-artists strip.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::Artist;

/// Read-only artist repository; writes happen in the back office.
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
}
