//! Dashboard overview.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::db::{ArtistRepository, ArtworkRepository, CategoryRepository, OrderRepository};
use crate::error::Result;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Entity counts for the overview page.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub artworks: i64,
    pub orders: i64,
    pub categories: i64,
    pub artists: i64,
}

/// Counts of everything the back office manages.
pub async fn overview(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
) -> Result<Json<DashboardResponse>> {
    let pool = state.pool();

    let artworks = ArtworkRepository::new(pool).count().await?;
    let orders = OrderRepository::new(pool).count().await?;
    let categories = CategoryRepository::new(pool).count().await?;
    let artists = ArtistRepository::new(pool).count().await?;

    Ok(Json(DashboardResponse {
        artworks,
        orders,
        categories,
        artists,
    }))
}
