//! Site-settings reads.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::SiteSettings;

/// Read-only settings repository; the singleton is written by the back
/// office.
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
}
