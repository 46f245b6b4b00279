//! Admin user management commands.
//!
//! # Usage
//!
//! ```bash
//! atelier-cli admin create -e admin@example.com -n "Admin Name" -p "a strong password"
//! ```
//!
//! # Environment Variables
//!
//! - `ADMIN_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`)

use atelier_admin::services::hash_password;
use atelier_core::Email;

use super::{CommandError, connect};

/// Minimum admin password length; stricter than the storefront since this
/// account can rewrite the catalog.
const MIN_PASSWORD_LENGTH: usize = 12;

/// Create a new admin user.
///
/// # Errors
///
/// Returns `CommandError::InvalidInput` for a malformed email, a short
/// password, or a duplicate account, and `CommandError::Database` on
/// connection/query failures.
pub async fn create_user(email: &str, name: &str, password: &str) -> Result<(), CommandError> {
    let email = Email::parse(email)
        .map_err(|e| CommandError::InvalidInput(format!("invalid email: {e}")))?;

    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(CommandError::InvalidInput(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    let password_hash = hash_password(password)
        .map_err(|e| CommandError::InvalidInput(format!("failed to hash password: {e}")))?;

    let pool = connect("ADMIN_DATABASE_URL").await?;

    let id: i32 = sqlx::query_scalar(
        "INSERT INTO admin_users (email, name, password_hash) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(email.as_str())
    .bind(name)
    .bind(&password_hash)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e
            && db_err.is_unique_violation()
        {
            return CommandError::InvalidInput(format!(
                "admin user already exists with email {email}"
            ));
        }
        CommandError::Database(e)
    })?;

    tracing::info!(admin_id = id, %email, "admin user created");
    Ok(())
}
