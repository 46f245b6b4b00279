//! Authentication extractors.
//!
//! Provides extractors for requiring or optionally reading the current
//! shopper in route handlers, plus the per-session visitor key used to
//! attribute likes and checkout attempts.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::models::{CurrentUser, session_keys};

/// Extractor that requires an authenticated shopper.
///
/// # Example
///
/// ```rust,ignore
/// async fn submit_artwork(
///     RequireAuth(user): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.email)
/// }
/// ```
pub struct RequireAuth(pub CurrentUser);

/// Rejection when authentication is required but missing.
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, "Authentication required").into_response()
    }
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts.extensions.get::<Session>().ok_or(AuthRejection)?;

        let user: CurrentUser = session
            .get(session_keys::CURRENT_USER)
            .await
            .ok()
            .flatten()
            .ok_or(AuthRejection)?;

        Ok(Self(user))
    }
}

/// Extractor that optionally gets the current shopper.
///
/// Unlike `RequireAuth`, this does not reject the request when nobody is
/// logged in.
pub struct OptionalAuth(pub Option<CurrentUser>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<CurrentUser>(session_keys::CURRENT_USER)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(user))
    }
}

/// Helper to set the current shopper in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_USER, user).await
}

/// Helper to clear the current shopper from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<CurrentUser>(session_keys::CURRENT_USER).await?;
    Ok(())
}

/// A stable key identifying this shopper across requests.
///
/// The authenticated user id when logged in; otherwise a visitor token
/// minted once per session. Keys both the like relation and the checkout
/// attempt registry.
///
/// # Errors
///
/// Returns an error if the session cannot be read or written.
pub async fn visitor_key(
    session: &Session,
    user: Option<&CurrentUser>,
) -> Result<String, tower_sessions::session::Error> {
    if let Some(user) = user {
        return Ok(user.id.to_string());
    }

    if let Some(existing) = session.get::<String>(session_keys::VISITOR_ID).await? {
        return Ok(existing);
    }

    let minted = format!("visitor_{}", Uuid::new_v4().simple());
    session.insert(session_keys::VISITOR_ID, &minted).await?;
    Ok(minted)
}
