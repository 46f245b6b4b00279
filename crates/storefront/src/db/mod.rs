//! Database operations for the storefront.
//!
//! # Tables
//!
//! Shopper-side (owned by this crate's migrations):
//!
//! - `users` / `user_passwords` - local shopper accounts
//! - `artwork_likes` - per-liker like relation
//! - `orders` - persisted purchases
//! - session storage (created by the tower-sessions store)
//!
//! Catalog tables (`artworks`, `categories`, `artists`, `site_settings`)
//! are owned by the admin migration set; this crate reads them and adjusts
//! like counts.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/storefront/migrations/` and run via:
//! ```bash
//! cargo run -p atelier-cli -- migrate storefront
//! ```
//!
//! All queries use the sqlx runtime API with `FromRow` types; rows are
//! validated into domain models at this boundary.

pub mod artists;
pub mod artworks;
pub mod categories;
pub mod likes;
pub mod orders;
pub mod settings;
pub mod stores;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use artists::ArtistRepository;
pub use artworks::ArtworkRepository;
pub use categories::CategoryRepository;
pub use likes::LikeRepository;
pub use orders::OrderRepository;
pub use settings::SettingsRepository;
pub use stores::{PgCatalogStore, PgOrderStore};
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
