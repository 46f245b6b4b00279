//! Artwork and category domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use atelier_core::{ArtworkId, CategoryId, Price, UserId};

/// A catalog artwork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    /// Display name of the artist, as entered at submission time.
    pub artist: String,
    /// Style label; matches a category name by convention, not constraint.
    pub style: String,
    pub description: String,
    pub price: Price,
    pub image_url: String,
    /// Like count. Absent in loosely-typed upstream data; defaults to 0 at
    /// the boundary.
    #[serde(default)]
    pub likes: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub available_sizes: Vec<String>,
    /// Shopper who submitted the piece, if it came in through the public
    /// submission flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<UserId>,
}

/// Payload for creating an artwork (shopper submission or admin create).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewArtwork {
    pub title: String,
    pub artist: String,
    pub style: String,
    pub description: String,
    pub price: Price,
    pub image_url: String,
    #[serde(default)]
    pub available_sizes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<UserId>,
}

/// A navigation category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}
