//! Checkout route handlers.
//!
//! `create_order` is the raw payment-intent endpoint consumed directly by
//! the front end; the `/api/checkout/*` handlers drive the sequencer.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use atelier_core::{ArtworkId, OrderId, Price, ShippingAddress};

use crate::checkout::CheckoutHandoff;
use crate::error::Result;
use crate::middleware::{OptionalAuth, visitor_key};
use crate::models::{CurrentUser, ProviderConfirmation, order::GUEST_BUYER};
use crate::state::AppState;

/// Body of `POST /api/create-order`: the amount in whole currency units.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub amount: Option<i64>,
}

/// Error body shape for the raw intent endpoint.
#[derive(Debug, Serialize)]
struct CreateOrderError {
    error: String,
}

/// Create a payment intent for an arbitrary amount.
///
/// Responds 400 when the amount is missing or unusable, 500 when the
/// gateway call fails, and 200 with the provider order object otherwise.
#[tracing::instrument(skip(state, request))]
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Response {
    let Some(amount) = request.amount else {
        return (
            StatusCode::BAD_REQUEST,
            Json(CreateOrderError {
                error: "Amount is required".to_owned(),
            }),
        )
            .into_response();
    };

    let amount_minor = match Price::new(amount).and_then(|p| p.to_minor_units()) {
        Ok(minor) => minor,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(CreateOrderError {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    match state.gateway().create_order(amount_minor).await {
        Ok(order) => (StatusCode::OK, Json(order)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "payment intent creation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(CreateOrderError {
                    error: "Failed to create order".to_owned(),
                }),
            )
                .into_response()
        }
    }
}

/// Response to a successful checkout submit: everything the provider's
/// confirmation surface needs.
#[derive(Debug, Serialize)]
pub struct CheckoutSubmitResponse {
    /// Gateway key id; safe to expose client-side.
    pub key_id: String,
    #[serde(flatten)]
    pub handoff: CheckoutHandoff,
}

/// Submit a shipping address for an artwork, creating the payment intent.
pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    OptionalAuth(user): OptionalAuth,
    session: Session,
    Json(address): Json<ShippingAddress>,
) -> Result<Json<CheckoutSubmitResponse>> {
    let session_key = visitor_key(&session, user.as_ref()).await?;

    let handoff = state
        .checkout()
        .submit(&session_key, ArtworkId::new(id), address, buyer(user.as_ref()))
        .await?;

    Ok(Json(CheckoutSubmitResponse {
        key_id: state.gateway().key_id().to_owned(),
        handoff,
    }))
}

/// Response to a confirmed checkout.
#[derive(Debug, Serialize)]
pub struct CheckoutConfirmResponse {
    pub order_id: OrderId,
    /// Where the front end should navigate next.
    pub redirect: &'static str,
}

/// Complete a parked attempt with the provider's confirmation payload.
pub async fn confirm(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    OptionalAuth(user): OptionalAuth,
    session: Session,
    Json(confirmation): Json<ProviderConfirmation>,
) -> Result<Json<CheckoutConfirmResponse>> {
    let session_key = visitor_key(&session, user.as_ref()).await?;

    let order_id = state
        .checkout()
        .confirm(&session_key, ArtworkId::new(id), confirmation)
        .await?;

    Ok(Json(CheckoutConfirmResponse {
        order_id,
        redirect: "/",
    }))
}

/// Response to a dismissal.
#[derive(Debug, Serialize)]
pub struct CheckoutDismissResponse {
    pub dismissed: bool,
}

/// The shopper closed the provider surface without completing payment.
pub async fn dismiss(
    State(state): State<AppState>,
    Path(_id): Path<i32>,
    OptionalAuth(user): OptionalAuth,
    session: Session,
) -> Result<Json<CheckoutDismissResponse>> {
    let session_key = visitor_key(&session, user.as_ref()).await?;
    let dismissed = state.checkout().dismiss(&session_key);

    Ok(Json(CheckoutDismissResponse { dismissed }))
}

/// The buyer identity persisted on the order.
fn buyer(user: Option<&CurrentUser>) -> String {
    user.map_or_else(|| GUEST_BUYER.to_owned(), |u| u.id.to_string())
}
