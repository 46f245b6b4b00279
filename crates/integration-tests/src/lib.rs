//! Shared fixtures for the integration tests.
//!
//! In-memory implementations of the checkout store traits, so the tests
//! drive the real sequencer and pipeline against fixed snapshots instead of
//! a live database or gateway.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use atelier_core::{ArtworkId, OrderId, Price};
use atelier_storefront::checkout::{ArtworkSource, OrderSink, PaymentGateway};
use atelier_storefront::db::RepositoryError;
use atelier_storefront::models::{Artwork, NewOrder};
use atelier_storefront::payment::{GatewayError, ProviderOrder};

/// A catalog served from a fixed snapshot.
pub struct InMemoryCatalog {
    artworks: Vec<Artwork>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new(artworks: Vec<Artwork>) -> Self {
        Self { artworks }
    }
}

#[async_trait]
impl ArtworkSource for InMemoryCatalog {
    async fn artwork(&self, id: ArtworkId) -> Result<Option<Artwork>, RepositoryError> {
        Ok(self.artworks.iter().find(|a| a.id == id).cloned())
    }
}

/// An order store that keeps everything it is given, or fails on demand.
#[derive(Default)]
pub struct InMemoryOrders {
    pub fail_writes: bool,
    orders: Mutex<Vec<NewOrder>>,
}

impl InMemoryOrders {
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Read a persisted order back by the id `persist` returned.
    #[must_use]
    pub fn read_back(&self, id: OrderId) -> Option<NewOrder> {
        let index = usize::try_from(id.as_i32()).ok()?.checked_sub(1)?;
        self.orders
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(index)
            .cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orders
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl OrderSink for InMemoryOrders {
    async fn persist(&self, order: &NewOrder) -> Result<OrderId, RepositoryError> {
        if self.fail_writes {
            return Err(RepositoryError::Database(sqlx::Error::PoolClosed));
        }
        let mut orders = self
            .orders
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        orders.push(order.clone());
        let id = i32::try_from(orders.len())
            .map_err(|_| RepositoryError::DataCorruption("order id overflow".to_owned()))?;
        Ok(OrderId::new(id))
    }
}

/// A gateway that mints predictable intents, or fails with a fixed status.
#[derive(Default)]
pub struct ScriptedGateway {
    pub fail_status: Option<u16>,
    pub calls: AtomicUsize,
}

impl ScriptedGateway {
    #[must_use]
    pub fn failing(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            ..Self::default()
        }
    }
}

#[async_trait]
impl PaymentGateway for ScriptedGateway {
    async fn create_order(&self, amount_minor: i64) -> Result<ProviderOrder, GatewayError> {
        self.calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        if let Some(status) = self.fail_status {
            return Err(GatewayError::Api {
                status,
                message: "provider failure".to_owned(),
            });
        }
        Ok(ProviderOrder {
            id: format!("order_fixed_{amount_minor}"),
            amount: amount_minor,
            currency: "INR".to_owned(),
            extra: serde_json::Map::new(),
        })
    }
}

/// Build a catalog artwork with distinct, deterministic fields.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn artwork(id: i32, title: &str, artist: &str, style: &str, price: i64, likes: i64) -> Artwork {
    Artwork {
        id: ArtworkId::new(id),
        title: title.to_owned(),
        artist: artist.to_owned(),
        style: style.to_owned(),
        description: format!("{title} by {artist}"),
        price: Price::new(price).unwrap(),
        image_url: format!("https://img.example/{id}.jpg"),
        likes,
        created_at: Utc.timestamp_opt(1_700_000_000 + i64::from(id) * 60, 0).unwrap(),
        available_sizes: Vec::new(),
        submitted_by: None,
    }
}
