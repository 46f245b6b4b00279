//! Order repository.

use sqlx::PgPool;

use atelier_core::OrderId;

use super::RepositoryError;
use crate::models::{NewOrder, Order};

const ORDER_COLUMNS: &str = "id, artwork_id, artwork_title, artwork_image_url, price, \
                             name, line1, city, state, zip, mobile, \
                             status, buyer, payment_id, provider_order_id, signature, created_at";

/// Repository for persisted purchases.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist an order. Address fields are stored verbatim; the creation
    /// timestamp comes from the database clock.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, new: &NewOrder) -> Result<OrderId, RepositoryError> {
        let id: OrderId = sqlx::query_scalar(
            "INSERT INTO orders \
                 (artwork_id, artwork_title, artwork_image_url, price, \
                  name, line1, city, state, zip, mobile, \
                  status, buyer, payment_id, provider_order_id, signature) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
             RETURNING id",
        )
        .bind(new.artwork_id)
        .bind(&new.artwork_title)
        .bind(&new.artwork_image_url)
        .bind(new.price)
        .bind(&new.shipping_address.name)
        .bind(&new.shipping_address.line1)
        .bind(&new.shipping_address.city)
        .bind(&new.shipping_address.state)
        .bind(&new.shipping_address.zip)
        .bind(&new.shipping_address.mobile)
        .bind(new.status.as_str())
        .bind(&new.buyer)
        .bind(&new.payment_id)
        .bind(&new.provider_order_id)
        .bind(&new.signature)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Fetch a single order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(order)
    }

    /// Orders placed by a buyer, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_buyer(&self, buyer: &str) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE buyer = $1 ORDER BY created_at DESC, id DESC"
        ))
        .bind(buyer)
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }
}
