//! Shopper account domain type.

use chrono::{DateTime, Utc};

use atelier_core::{Email, UserId};

/// A storefront shopper account.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub created_at: DateTime<Utc>,
}
