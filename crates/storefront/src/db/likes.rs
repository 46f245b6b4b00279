//! Like relation repository.
//!
//! The like count on an artwork only ever moves by ±1, and only together
//! with the per-liker relation row. Re-liking an already-liked artwork (or
//! unliking one never liked) is a no-op: the count and the relation cannot
//! drift apart.

use sqlx::PgPool;

use atelier_core::ArtworkId;

use super::RepositoryError;

/// Repository for the (artwork, liker) relation.
pub struct LikeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LikeRepository<'a> {
    /// Create a new like repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record a like. Returns the artwork's like count afterwards.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the artwork doesn't exist and
    /// `RepositoryError::Database` for other failures.
    pub async fn like(&self, artwork_id: ArtworkId, liker: &str) -> Result<i64, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            "INSERT INTO artwork_likes (artwork_id, liker) VALUES ($1, $2) \
             ON CONFLICT (artwork_id, liker) DO NOTHING",
        )
        .bind(artwork_id)
        .bind(liker)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let likes: Option<i64> = if inserted > 0 {
            sqlx::query_scalar("UPDATE artworks SET likes = likes + 1 WHERE id = $1 RETURNING likes")
                .bind(artwork_id)
                .fetch_optional(&mut *tx)
                .await?
        } else {
            sqlx::query_scalar("SELECT likes FROM artworks WHERE id = $1")
                .bind(artwork_id)
                .fetch_optional(&mut *tx)
                .await?
        };

        let Some(likes) = likes else {
            // Unknown artwork: drop the relation row inserted above.
            tx.rollback().await?;
            return Err(RepositoryError::NotFound);
        };
        tx.commit().await?;

        Ok(likes)
    }

    /// Remove a like. Returns the artwork's like count afterwards.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the artwork doesn't exist and
    /// `RepositoryError::Database` for other failures.
    pub async fn unlike(&self, artwork_id: ArtworkId, liker: &str) -> Result<i64, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM artwork_likes WHERE artwork_id = $1 AND liker = $2")
            .bind(artwork_id)
            .bind(liker)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let likes: Option<i64> = if deleted > 0 {
            sqlx::query_scalar(
                "UPDATE artworks SET likes = GREATEST(likes - 1, 0) WHERE id = $1 RETURNING likes",
            )
            .bind(artwork_id)
            .fetch_optional(&mut *tx)
            .await?
        } else {
            sqlx::query_scalar("SELECT likes FROM artworks WHERE id = $1")
                .bind(artwork_id)
                .fetch_optional(&mut *tx)
                .await?
        };

        let Some(likes) = likes else {
            tx.rollback().await?;
            return Err(RepositoryError::NotFound);
        };
        tx.commit().await?;

        Ok(likes)
    }

    /// Whether `liker` has liked the artwork.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn is_liked(&self, artwork_id: ArtworkId, liker: &str) -> Result<bool, RepositoryError> {
        let exists: Option<i32> = sqlx::query_scalar(
            "SELECT 1 FROM artwork_likes WHERE artwork_id = $1 AND liker = $2",
        )
        .bind(artwork_id)
        .bind(liker)
        .fetch_optional(self.pool)
        .await?;

        Ok(exists.is_some())
    }
}
