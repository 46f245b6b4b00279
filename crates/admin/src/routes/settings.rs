//! Site-settings handlers.

use axum::{Json, extract::State};

use crate::db::SettingsRepository;
use crate::error::Result;
use crate::middleware::RequireAdminAuth;
use crate::models::SiteSettings;
use crate::state::AppState;

/// The settings singleton.
pub async fn show(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
) -> Result<Json<SiteSettings>> {
    let settings = SettingsRepository::new(state.pool()).get().await?;
    Ok(Json(settings))
}

/// Replace the settings singleton.
#[tracing::instrument(skip(state, settings), fields(admin_id = %admin.id))]
pub async fn update(
    State(state): State<AppState>,
    RequireAdminAuth(admin): RequireAdminAuth,
    Json(settings): Json<SiteSettings>,
) -> Result<Json<SiteSettings>> {
    SettingsRepository::new(state.pool()).put(&settings).await?;
    tracing::info!("site settings updated");
    Ok(Json(settings))
}
