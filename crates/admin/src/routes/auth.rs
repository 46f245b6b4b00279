//! Admin auth route handlers.

use axum::{Json, extract::State};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::Result;
use crate::middleware::{clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::services::AdminAuthService;
use crate::state::AppState;

/// Admin credentials.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Sign an admin in.
#[tracing::instrument(skip(state, session, request))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<LoginRequest>,
) -> Result<Json<CurrentAdmin>> {
    let admin = AdminAuthService::new(state.pool())
        .login(&request.email, &request.password)
        .await?;

    let current = CurrentAdmin {
        id: admin.id,
        email: admin.email,
        name: admin.name,
    };
    set_current_admin(&session, &current).await?;
    tracing::info!(admin_id = %current.id, "admin logged in");

    Ok(Json(current))
}

/// Sign the current admin out.
pub async fn logout(session: Session) -> Result<()> {
    clear_current_admin(&session).await?;
    Ok(())
}
