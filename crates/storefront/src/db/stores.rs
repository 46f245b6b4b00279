//! PostgreSQL-backed implementations of the checkout store traits.
//!
//! Thin adapters that own a pool handle and delegate to the repositories,
//! so the sequencer can live in shared state without borrowing.

use async_trait::async_trait;
use sqlx::PgPool;

use atelier_core::{ArtworkId, OrderId};

use super::{ArtworkRepository, OrderRepository, RepositoryError};
use crate::checkout::{ArtworkSource, OrderSink};
use crate::models::{Artwork, NewOrder};

/// Catalog reads over the live database.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArtworkSource for PgCatalogStore {
    async fn artwork(&self, id: ArtworkId) -> Result<Option<Artwork>, RepositoryError> {
        ArtworkRepository::new(&self.pool).get(id).await
    }
}

/// Order writes over the live database.
#[derive(Clone)]
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderSink for PgOrderStore {
    async fn persist(&self, order: &NewOrder) -> Result<OrderId, RepositoryError> {
        OrderRepository::new(&self.pool).create(order).await
    }
}
