//! Shopper auth route handlers.

use axum::{Json, extract::State};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::Result;
use crate::middleware::{OptionalAuth, clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::AuthService;
use crate::state::AppState;

/// Credentials for register and login.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Create a shopper account and sign it in.
#[tracing::instrument(skip(state, session, request))]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<CurrentUser>> {
    let user = AuthService::new(state.pool())
        .register_with_password(&request.email, &request.password)
        .await?;

    let current = CurrentUser {
        id: user.id,
        email: user.email.into_inner(),
    };
    set_current_user(&session, &current).await?;
    tracing::info!(user_id = %current.id, "shopper registered");

    Ok(Json(current))
}

/// Sign a shopper in.
#[tracing::instrument(skip(state, session, request))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<CurrentUser>> {
    let user = AuthService::new(state.pool())
        .login_with_password(&request.email, &request.password)
        .await?;

    let current = CurrentUser {
        id: user.id,
        email: user.email.into_inner(),
    };
    set_current_user(&session, &current).await?;

    Ok(Json(current))
}

/// Sign the current shopper out.
pub async fn logout(session: Session) -> Result<()> {
    clear_current_user(&session).await?;
    Ok(())
}

/// The current shopper, or `null`.
pub async fn me(OptionalAuth(user): OptionalAuth) -> Json<Option<CurrentUser>> {
    Json(user)
}
