//! Artist management handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use atelier_core::ArtistId;

use crate::db::{ArtistRepository, artists::ArtistInput};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::Artist;
use crate::state::AppState;

/// All artists.
pub async fn list(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
) -> Result<Json<Vec<Artist>>> {
    let artists = ArtistRepository::new(state.pool()).list().await?;
    Ok(Json(artists))
}

/// Artist create/update payload.
#[derive(Debug, Deserialize)]
pub struct ArtistRequest {
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub image_url: String,
}

impl ArtistRequest {
    fn into_input(self) -> Result<ArtistInput> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("Artist name is required".to_owned()));
        }
        Ok(ArtistInput {
            name: self.name,
            bio: self.bio,
            image_url: self.image_url,
        })
    }
}

/// Add an artist.
pub async fn create(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Json(request): Json<ArtistRequest>,
) -> Result<Json<Artist>> {
    let artist = ArtistRepository::new(state.pool())
        .create(&request.into_input()?)
        .await?;
    Ok(Json(artist))
}

/// Replace an artist's fields.
pub async fn update(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(id): Path<i32>,
    Json(request): Json<ArtistRequest>,
) -> Result<Json<Artist>> {
    let artist = ArtistRepository::new(state.pool())
        .update(ArtistId::new(id), &request.into_input()?)
        .await?;
    Ok(Json(artist))
}

/// Remove an artist.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(id): Path<i32>,
) -> Result<()> {
    ArtistRepository::new(state.pool())
        .delete(ArtistId::new(id))
        .await?;
    Ok(())
}
