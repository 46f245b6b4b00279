//! Site-data route handlers: categories, artists, settings.

use axum::{Json, extract::State};

use crate::db::{ArtistRepository, CategoryRepository};
use crate::error::Result;
use crate::models::{Artist, Category, SiteSettings};
use crate::state::AppState;

/// Categories for navigation.
pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = CategoryRepository::new(state.pool()).list().await?;
    Ok(Json(categories))
}

/// Featured artists.
pub async fn artists(State(state): State<AppState>) -> Result<Json<Vec<Artist>>> {
    let artists = ArtistRepository::new(state.pool()).list().await?;
    Ok(Json(artists))
}

/// The site-settings singleton, served from the short-TTL cache.
pub async fn settings(State(state): State<AppState>) -> Result<Json<SiteSettings>> {
    let settings = state.site_settings().await?;
    Ok(Json(settings))
}
