//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use sqlx::PgPool;

use crate::checkout::CheckoutSequencer;
use crate::config::StorefrontConfig;
use crate::db::{PgCatalogStore, PgOrderStore, RepositoryError, SettingsRepository};
use crate::models::SiteSettings;
use crate::payment::{GatewayClient, GatewayError};

/// The sequencer as wired in production: live stores, live gateway.
pub type StorefrontSequencer = CheckoutSequencer<PgCatalogStore, PgOrderStore, GatewayClient>;

/// How long the settings singleton may be served from cache. It is read on
/// every page and written rarely.
const SETTINGS_CACHE_TTL: Duration = Duration::from_secs(60);

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    pool: PgPool,
    gateway: GatewayClient,
    checkout: StorefrontSequencer,
    settings_cache: Cache<(), SiteSettings>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway HTTP client cannot be built.
    pub fn new(config: StorefrontConfig, pool: PgPool) -> Result<Self, GatewayError> {
        let gateway = GatewayClient::new(&config.gateway)?;
        let checkout = CheckoutSequencer::new(
            PgCatalogStore::new(pool.clone()),
            PgOrderStore::new(pool.clone()),
            gateway.clone(),
        );
        let settings_cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(SETTINGS_CACHE_TTL)
            .build();

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                gateway,
                checkout,
                settings_cache,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the payment gateway client.
    #[must_use]
    pub fn gateway(&self) -> &GatewayClient {
        &self.inner.gateway
    }

    /// Get a reference to the checkout sequencer.
    #[must_use]
    pub fn checkout(&self) -> &StorefrontSequencer {
        &self.inner.checkout
    }

    /// The site-settings singleton, served from a short-TTL cache.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the cache is cold and the read fails.
    pub async fn site_settings(&self) -> Result<SiteSettings, RepositoryError> {
        if let Some(settings) = self.inner.settings_cache.get(&()).await {
            return Ok(settings);
        }

        let settings = SettingsRepository::new(self.pool()).get().await?;
        self.inner.settings_cache.insert((), settings.clone()).await;
        Ok(settings)
    }
}
