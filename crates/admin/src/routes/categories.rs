//! Category management handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use atelier_core::CategoryId;

use crate::db::CategoryRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::Category;
use crate::state::AppState;

/// All categories.
pub async fn list(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
) -> Result<Json<Vec<Category>>> {
    let categories = CategoryRepository::new(state.pool()).list().await?;
    Ok(Json(categories))
}

/// Category creation payload.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// Add a category.
pub async fn create(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<Json<Category>> {
    if request.name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Category name cannot be empty".to_owned(),
        ));
    }

    let category = CategoryRepository::new(state.pool())
        .create(&request.name)
        .await?;
    Ok(Json(category))
}

/// Remove a category. Artworks keep their style string; nothing cascades.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(id): Path<i32>,
) -> Result<()> {
    CategoryRepository::new(state.pool())
        .delete(CategoryId::new(id))
        .await?;
    Ok(())
}
