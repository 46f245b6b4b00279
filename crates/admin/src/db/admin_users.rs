//! Back-office account repository.

use sqlx::PgPool;
use sqlx::Row;

use atelier_core::AdminUserId;

use super::RepositoryError;
use crate::models::AdminUser;

/// Repository for admin accounts.
pub struct AdminUserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminUserRepository<'a> {
    /// Create a new admin-user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get an admin and their password hash by email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_with_password(
        &self,
        email: &str,
    ) -> Result<Option<(AdminUser, String)>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, email, name, password_hash FROM admin_users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        let Some(r) = row else {
            return Ok(None);
        };

        let admin = AdminUser {
            id: r.try_get::<AdminUserId, _>("id")?,
            email: r.try_get("email")?,
            name: r.try_get("name")?,
        };
        let password_hash: String = r.try_get("password_hash")?;

        Ok(Some((admin, password_hash)))
    }

    /// Create an admin account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    pub async fn create(
        &self,
        email: &str,
        name: &str,
        password_hash: &str,
    ) -> Result<AdminUser, RepositoryError> {
        let row = sqlx::query(
            "INSERT INTO admin_users (email, name, password_hash) VALUES ($1, $2, $3) \
             RETURNING id, email, name",
        )
        .bind(email)
        .bind(name)
        .bind(password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(AdminUser {
            id: row.try_get::<AdminUserId, _>("id")?,
            email: row.try_get("email")?,
            name: row.try_get("name")?,
        })
    }
}
