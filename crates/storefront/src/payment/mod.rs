//! Payment gateway API client.
//!
//! Creates payment intents ("orders" in gateway terms) against the
//! Razorpay-compatible orders endpoint. Amounts cross this boundary in the
//! minor currency unit; the conversion from catalog prices happens in the
//! caller via [`atelier_core::Price::to_minor_units`].

use chrono::Utc;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::GatewayConfig;

/// Errors that can occur when interacting with the gateway API.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// A payment intent created at the gateway.
///
/// The gateway returns more fields than these; unrecognized ones are kept in
/// `extra` so the client handoff sees the provider object unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderOrder {
    pub id: String,
    /// Minor currency units.
    pub amount: i64,
    pub currency: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Payment gateway API client.
#[derive(Clone)]
pub struct GatewayClient {
    client: reqwest::Client,
    api_base: String,
    key_id: String,
    key_secret: String,
    currency: String,
}

impl GatewayClient {
    /// Create a new gateway client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            api_base: config.api_base.clone(),
            key_id: config.key_id.clone(),
            key_secret: config.key_secret.expose_secret().to_owned(),
            currency: config.currency.clone(),
        })
    }

    /// The key id the client-side confirmation surface must be opened with.
    #[must_use]
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Create a payment intent for `amount_minor` minor currency units.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Api` on a non-success response and
    /// `GatewayError::Http`/`Parse` on transport or decode failures. No
    /// retry is attempted; a failed intent never charged anyone.
    pub async fn create_order(&self, amount_minor: i64) -> Result<ProviderOrder, GatewayError> {
        let url = format!("{}/orders", self.api_base);
        let receipt = format!("receipt_order_{}", Utc::now().timestamp_millis());

        let body = serde_json::json!({
            "amount": amount_minor,
            "currency": self.currency,
            "receipt": receipt,
        });

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&body)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<ProviderOrder>()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_order_keeps_unknown_fields() {
        let raw = serde_json::json!({
            "id": "order_N9Yg8weH2x",
            "amount": 85_000,
            "currency": "INR",
            "receipt": "receipt_order_1700000000000",
            "status": "created",
        });

        let order: ProviderOrder = serde_json::from_value(raw).unwrap();
        assert_eq!(order.id, "order_N9Yg8weH2x");
        assert_eq!(order.amount, 85_000);
        assert_eq!(order.extra.get("status").and_then(|v| v.as_str()), Some("created"));

        let back = serde_json::to_value(&order).unwrap();
        assert_eq!(
            back.get("receipt").and_then(|v| v.as_str()),
            Some("receipt_order_1700000000000")
        );
    }
}
