//! Gallery route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use atelier_core::ArtworkId;

use crate::catalog::{ALL_STYLES, GalleryQuery, Section, SortOrder, style_options};
use crate::db::ArtworkRepository;
use crate::error::{AppError, Result};
use crate::models::Artwork;
use crate::state::AppState;

/// Gallery query parameters. Everything is optional; the defaults are the
/// Home section with no search, no style filter, newest-first.
#[derive(Debug, Deserialize)]
pub struct CatalogQueryParams {
    pub search: Option<String>,
    pub section: Option<String>,
    pub style: Option<String>,
    pub sort: Option<String>,
}

/// The gallery payload: ordered artworks plus the style-filter options
/// derived from the full catalog.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub artworks: Vec<Artwork>,
    pub styles: Vec<String>,
}

/// Run the gallery pipeline over the catalog.
#[tracing::instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<CatalogQueryParams>,
) -> Result<Json<CatalogResponse>> {
    let catalog = ArtworkRepository::new(state.pool()).list().await?;

    // Style options come from the unfiltered catalog, not the result set.
    let styles = style_options(&catalog);

    let query = GalleryQuery {
        search: params.search.unwrap_or_default(),
        section: Section::parse(params.section.as_deref().unwrap_or("Home")),
        style_filter: params.style.unwrap_or_else(|| ALL_STYLES.to_owned()),
        sort: SortOrder::parse(params.sort.as_deref().unwrap_or_default()),
    };
    let artworks = query.apply(&catalog);

    Ok(Json(CatalogResponse { artworks, styles }))
}

/// Single artwork by id.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Artwork>> {
    let artwork = ArtworkRepository::new(state.pool())
        .get(ArtworkId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("artwork {id}")))?;

    Ok(Json(artwork))
}
