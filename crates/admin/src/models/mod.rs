//! Back-office domain types.
//!
//! The admin works with the same catalog rows as the storefront but has its
//! own view of them - full CRUD payloads, order listings with addresses,
//! and the admin account itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use atelier_core::{AdminUserId, ArtistId, ArtworkId, CategoryId, OrderId, Price, ShippingAddress};

/// A catalog artwork, as managed in the back office.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    pub artist: String,
    pub style: String,
    pub description: String,
    pub price: Price,
    pub image_url: String,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub available_sizes: Vec<String>,
}

/// A navigation category.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A featured artist.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub bio: String,
    pub image_url: String,
}

/// A persisted purchase, as listed in the back office.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: OrderId,
    pub artwork_id: ArtworkId,
    pub artwork_title: String,
    pub artwork_image_url: String,
    pub price: Price,
    #[sqlx(flatten)]
    pub shipping_address: ShippingAddress,
    pub status: String,
    pub buyer: String,
    pub payment_id: String,
    pub provider_order_id: String,
    pub signature: String,
    pub created_at: DateTime<Utc>,
}

/// The site-settings singleton.
#[derive(Debug, Clone, Default, Serialize, Deserialize, sqlx::FromRow)]
pub struct SiteSettings {
    pub logo_url: String,
    pub site_description: String,
    pub facebook_url: String,
    pub instagram_url: String,
    pub twitter_url: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

/// A back-office account.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub id: AdminUserId,
    pub email: String,
    pub name: String,
}

/// Session storage keys.
pub mod session_keys {
    /// The authenticated admin, if any.
    pub const CURRENT_ADMIN: &str = "current_admin";
}

/// The authenticated admin stored in the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    pub id: AdminUserId,
    pub email: String,
    pub name: String,
}
