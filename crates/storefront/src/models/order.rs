//! Order domain types.
//!
//! An order denormalizes the artwork at purchase time: later edits to the
//! catalog must not rewrite purchase history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use atelier_core::{ArtworkId, OrderId, OrderStatus, Price, ShippingAddress};

/// Sentinel buyer value for shoppers who check out without an account.
pub const GUEST_BUYER: &str = "guest";

/// A persisted purchase record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: OrderId,
    pub artwork_id: ArtworkId,
    pub artwork_title: String,
    pub artwork_image_url: String,
    /// Price at purchase time, not a live catalog reference.
    pub price: Price,
    #[sqlx(flatten)]
    pub shipping_address: ShippingAddress,
    pub status: String,
    /// User id rendered as text, or [`GUEST_BUYER`].
    pub buyer: String,
    /// Gateway correlation fields, recorded verbatim and never verified.
    pub payment_id: String,
    pub provider_order_id: String,
    pub signature: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for persisting a new order. The creation timestamp is
/// server-generated at insert time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub artwork_id: ArtworkId,
    pub artwork_title: String,
    pub artwork_image_url: String,
    pub price: Price,
    pub shipping_address: ShippingAddress,
    pub status: OrderStatus,
    pub buyer: String,
    pub payment_id: String,
    pub provider_order_id: String,
    pub signature: String,
}

/// The gateway's confirmation callback payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfirmation {
    pub payment_id: String,
    pub order_id: String,
    pub signature: String,
}
