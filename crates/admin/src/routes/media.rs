//! Media upload handler.

use axum::{Json, extract::Multipart, extract::State};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Result of a media upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Public URL the object is served under.
    pub url: String,
}

/// Store an uploaded image and return its public URL.
///
/// Expects a multipart body with a single `file` field. Compression happens
/// client-side before upload; the bytes are stored as-is.
#[tracing::instrument(skip(state, multipart), fields(admin_id = %admin.id))]
pub async fn upload(
    State(state): State<AppState>,
    RequireAdminAuth(admin): RequireAdminAuth,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_owned();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("failed to read upload: {e}")))?;

        let url = state.media().store(&file_name, &bytes).await?;
        return Ok(Json(UploadResponse { url }));
    }

    Err(AppError::BadRequest("missing `file` field".to_owned()))
}
