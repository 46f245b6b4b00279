//! Order listing handlers.

use axum::{Json, extract::State};

use crate::db::OrderRepository;
use crate::error::Result;
use crate::middleware::RequireAdminAuth;
use crate::models::Order;
use crate::state::AppState;

/// All orders, newest first, with address and gateway correlation fields.
pub async fn list(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
) -> Result<Json<Vec<Order>>> {
    let orders = OrderRepository::new(state.pool()).list().await?;
    Ok(Json(orders))
}
