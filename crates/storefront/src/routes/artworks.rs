//! Artwork submission and like handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use atelier_core::{ArtworkId, Price};

use crate::db::{ArtworkRepository, LikeRepository};
use crate::error::{AppError, Result};
use crate::middleware::{OptionalAuth, RequireAuth, visitor_key};
use crate::models::{Artwork, NewArtwork};
use crate::state::AppState;

/// Shopper artwork submission.
#[derive(Debug, Deserialize)]
pub struct SubmitArtworkRequest {
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

/// Submit an artwork to the gallery. Requires a signed-in shopper.
#[tracing::instrument(skip(state, request), fields(user_id = %user.id))]
pub async fn submit(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<SubmitArtworkRequest>,
) -> Result<Json<Artwork>> {
    for (field, value) in [
        ("title", &request.title),
        ("artist", &request.artist),
        ("style", &request.style),
        ("description", &request.description),
        ("image_url", &request.image_url),
    ] {
        if value.is_empty() {
            return Err(AppError::BadRequest(format!("`{field}` is required")));
        }
    }

    let price = Price::new(request.price)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let new = NewArtwork {
        title: request.title,
        artist: request.artist,
        style: request.style,
        description: request.description,
        price,
        image_url: request.image_url,
        available_sizes: request.available_sizes,
        submitted_by: Some(user.id),
    };

    let artwork = ArtworkRepository::new(state.pool()).create(&new).await?;
    tracing::info!(artwork_id = %artwork.id, "artwork submitted");

    Ok(Json(artwork))
}

/// Like state after a like/unlike action.
#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub likes: i64,
    pub liked: bool,
}

/// Like an artwork as the current shopper or visitor.
pub async fn like(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    OptionalAuth(user): OptionalAuth,
    session: Session,
) -> Result<Json<LikeResponse>> {
    let liker = visitor_key(&session, user.as_ref()).await?;
    let likes = LikeRepository::new(state.pool())
        .like(ArtworkId::new(id), &liker)
        .await
        .map_err(map_like_error(id))?;

    Ok(Json(LikeResponse { likes, liked: true }))
}

/// Remove a like.
pub async fn unlike(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    OptionalAuth(user): OptionalAuth,
    session: Session,
) -> Result<Json<LikeResponse>> {
    let liker = visitor_key(&session, user.as_ref()).await?;
    let likes = LikeRepository::new(state.pool())
        .unlike(ArtworkId::new(id), &liker)
        .await
        .map_err(map_like_error(id))?;

    Ok(Json(LikeResponse {
        likes,
        liked: false,
    }))
}

fn map_like_error(id: i32) -> impl FnOnce(crate::db::RepositoryError) -> AppError {
    move |e| match e {
        crate::db::RepositoryError::NotFound => AppError::NotFound(format!("artwork {id}")),
        other => AppError::Database(other),
    }
}
