//! Artwork management handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use atelier_core::{ArtworkId, Price};

use crate::db::{ArtworkRepository, artworks::NewArtwork};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::Artwork;
use crate::state::AppState;

/// All artworks, newest first.
pub async fn list(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
) -> Result<Json<Vec<Artwork>>> {
    let artworks = ArtworkRepository::new(state.pool()).list().await?;
    Ok(Json(artworks))
}

/// Artwork creation payload.
#[derive(Debug, Deserialize)]
pub struct CreateArtworkRequest {
    pub title: String,
    pub artist: String,
    pub style: String,
    pub description: String,
    /// Whole currency units.
    pub price: i64,
    pub image_url: String,
    #[serde(default)]
    pub available_sizes: Vec<String>,
}

/// Add an artwork to the catalog.
#[tracing::instrument(skip(state, request), fields(admin_id = %admin.id))]
pub async fn create(
    State(state): State<AppState>,
    RequireAdminAuth(admin): RequireAdminAuth,
    Json(request): Json<CreateArtworkRequest>,
) -> Result<Json<Artwork>> {
    if request.title.is_empty() || request.artist.is_empty() || request.style.is_empty() {
        return Err(AppError::BadRequest(
            "title, artist and style are required".to_owned(),
        ));
    }

    let price = Price::new(request.price).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let artwork = ArtworkRepository::new(state.pool())
        .create(&NewArtwork {
            title: request.title,
            artist: request.artist,
            style: request.style,
            description: request.description,
            price,
            image_url: request.image_url,
            available_sizes: request.available_sizes,
        })
        .await?;

    Ok(Json(artwork))
}

/// Remove an artwork from the catalog.
#[tracing::instrument(skip(state), fields(admin_id = %admin.id))]
pub async fn delete(
    State(state): State<AppState>,
    RequireAdminAuth(admin): RequireAdminAuth,
    Path(id): Path<i32>,
) -> Result<()> {
    ArtworkRepository::new(state.pool())
        .delete(ArtworkId::new(id))
        .await?;
    Ok(())
}
