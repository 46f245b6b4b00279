//! Site-settings singleton operations.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::SiteSettings;

/// Repository for the settings singleton.
pub struct SettingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SettingsRepository<'a> {
    /// Create a new settings repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// The settings singleton. Defaults when the row has never been written.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self) -> Result<SiteSettings, RepositoryError> {
        let settings = sqlx::query_as::<_, SiteSettings>(
            "SELECT logo_url, site_description, facebook_url, instagram_url, twitter_url, \
                    address, email, phone \
             FROM site_settings WHERE id = 1",
        )
        .fetch_optional(self.pool)
        .await?;

        Ok(settings.unwrap_or_default())
    }

    /// Replace the settings singleton.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the upsert fails.
    pub async fn put(&self, settings: &SiteSettings) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO site_settings \
                 (id, logo_url, site_description, facebook_url, instagram_url, twitter_url, \
                  address, email, phone) \
             VALUES (1, $1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT (id) DO UPDATE SET \
                 logo_url = $1, site_description = $2, facebook_url = $3, instagram_url = $4, \
                 twitter_url = $5, address = $6, email = $7, phone = $8, updated_at = now()",
        )
        .bind(&settings.logo_url)
        .bind(&settings.site_description)
        .bind(&settings.facebook_url)
        .bind(&settings.instagram_url)
        .bind(&settings.twitter_url)
        .bind(&settings.address)
        .bind(&settings.email)
        .bind(&settings.phone)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
