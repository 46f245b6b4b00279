//! Artist domain type.

use serde::{Deserialize, Serialize};

use atelier_core::ArtistId;

/// A featured artist shown on the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub bio: String,
    pub image_url: String,
}
