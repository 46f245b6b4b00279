//! Database migration commands.
//!
//! Both migration sets run against the same database and therefore share
//! sqlx's migration-tracking table. Version numbers are unique across the
//! two sets (admin owns 0001, storefront owns 0002) and each runner
//! ignores versions applied by the other set.

use super::{CommandError, connect};

/// Run the storefront-owned migrations (accounts, likes, orders).
///
/// # Errors
///
/// Returns `CommandError` if the connection or a migration fails.
pub async fn storefront() -> Result<(), CommandError> {
    let pool = connect("STOREFRONT_DATABASE_URL").await?;

    tracing::info!("Running storefront migrations...");
    let mut migrator = sqlx::migrate!("../storefront/migrations");
    migrator.set_ignore_missing(true);
    migrator.run(&pool).await?;

    tracing::info!("Storefront migrations complete");
    Ok(())
}

/// Run the admin-owned migrations (catalog, settings, admin accounts).
///
/// # Errors
///
/// Returns `CommandError` if the connection or a migration fails.
pub async fn admin() -> Result<(), CommandError> {
    let pool = connect("ADMIN_DATABASE_URL").await?;

    tracing::info!("Running admin migrations...");
    let mut migrator = sqlx::migrate!("../admin/migrations");
    migrator.set_ignore_missing(true);
    migrator.run(&pool).await?;

    tracing::info!("Admin migrations complete");
    Ok(())
}
