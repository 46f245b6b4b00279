//! Order checkout sequencer.
//!
//! Turns a shopper's shipping address plus a selected artwork into a
//! persisted order, coordinating with the payment gateway:
//!
//! ```text
//! Idle -> Validating -> CreatingPaymentIntent -> AwaitingProviderConfirmation
//!      -> PersistingOrder -> Done
//! ```
//!
//! Failures in validation, intent creation, or persistence drop the attempt
//! back to Idle; dismissal of the provider's confirmation surface does the
//! same without an error. There is no timeout on the awaiting state - an
//! abandoned attempt stays parked until confirmed or dismissed.
//!
//! The sequencer holds at most one attempt per session key, enforced
//! structurally: `submit` takes the permit and only confirm, dismiss, or a
//! failed submit release it. A parallel submit on the same session fails
//! with [`CheckoutError::AttemptInFlight`] no matter what the UI does.
//!
//! Stores and the gateway are injected as traits so tests run against fixed
//! snapshots and scripted gateways.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;

use atelier_core::{AddressError, ArtworkId, OrderId, OrderStatus, PriceError, ShippingAddress};

use crate::db::RepositoryError;
use crate::models::{Artwork, NewOrder, ProviderConfirmation};
use crate::payment::{GatewayClient, GatewayError, ProviderOrder};

/// Read access to the catalog, as the sequencer needs it.
#[async_trait]
pub trait ArtworkSource: Send + Sync {
    /// Resolve an artwork by id.
    async fn artwork(&self, id: ArtworkId) -> Result<Option<Artwork>, RepositoryError>;
}

/// Write access to the order store.
#[async_trait]
pub trait OrderSink: Send + Sync {
    /// Persist a completed order, returning its id.
    async fn persist(&self, order: &NewOrder) -> Result<OrderId, RepositoryError>;
}

/// Payment-intent creation at the gateway.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a payment intent for an amount in minor currency units.
    async fn create_order(&self, amount_minor: i64) -> Result<ProviderOrder, GatewayError>;
}

#[async_trait]
impl PaymentGateway for GatewayClient {
    async fn create_order(&self, amount_minor: i64) -> Result<ProviderOrder, GatewayError> {
        Self::create_order(self, amount_minor).await
    }
}

/// Errors produced by the checkout flow.
///
/// `PostPaymentPersistence` is deliberately distinct from every pre-payment
/// failure: when it fires, the charge has already happened and the shopper
/// must be told to contact support rather than simply retry.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The artwork being purchased doesn't exist.
    #[error("artwork not found")]
    ArtworkNotFound,

    /// A required address field is missing.
    #[error(transparent)]
    Validation(#[from] AddressError),

    /// The price cannot be expressed in minor currency units.
    #[error(transparent)]
    Amount(#[from] PriceError),

    /// Reading the catalog failed.
    #[error("store error: {0}")]
    Store(#[from] RepositoryError),

    /// Payment-intent creation failed; nothing was charged.
    #[error("payment intent creation failed: {0}")]
    PaymentIntent(#[source] GatewayError),

    /// The order write failed after a successful charge.
    #[error("payment succeeded but the order could not be recorded: {0}")]
    PostPaymentPersistence(#[source] RepositoryError),

    /// A checkout attempt is already in flight for this session.
    #[error("a checkout attempt is already in flight")]
    AttemptInFlight,

    /// Confirm or dismiss arrived with no attempt awaiting confirmation.
    #[error("no checkout attempt awaiting confirmation")]
    NoPendingAttempt,
}

/// Client-side handoff for the provider's confirmation surface.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CheckoutHandoff {
    /// Serialized as `order_id`, the name the provider surface expects.
    #[serde(rename = "order_id")]
    pub provider_order_id: String,
    /// Minor currency units.
    pub amount: i64,
    pub currency: String,
    pub prefill: Prefill,
}

/// Prefill values for the provider's confirmation surface.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Prefill {
    pub name: String,
    pub contact: String,
}

/// Where a parked attempt is in the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttemptPhase {
    /// `submit` is still running (validating / creating the intent).
    CreatingPaymentIntent,
    /// Handed off to the provider; waiting for confirm or dismiss.
    AwaitingProviderConfirmation,
}

/// A per-session in-flight attempt.
#[derive(Debug)]
struct Attempt {
    phase: AttemptPhase,
    artwork: Option<Artwork>,
    address: Option<ShippingAddress>,
    buyer: Option<String>,
}

impl Attempt {
    const fn reserved() -> Self {
        Self {
            phase: AttemptPhase::CreatingPaymentIntent,
            artwork: None,
            address: None,
            buyer: None,
        }
    }
}

/// The checkout sequencer.
///
/// One instance serves every session; attempts are keyed by a stable
/// session token.
pub struct CheckoutSequencer<C, O, G> {
    catalog: C,
    orders: O,
    gateway: G,
    attempts: Mutex<HashMap<String, Attempt>>,
}

impl<C, O, G> CheckoutSequencer<C, O, G>
where
    C: ArtworkSource,
    O: OrderSink,
    G: PaymentGateway,
{
    /// Create a sequencer over the given stores and gateway.
    pub fn new(catalog: C, orders: O, gateway: G) -> Self {
        Self {
            catalog,
            orders,
            gateway,
            attempts: Mutex::new(HashMap::new()),
        }
    }

    /// The injected order sink.
    pub const fn orders(&self) -> &O {
        &self.orders
    }

    /// The injected payment gateway.
    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Submit a shipping address for an artwork.
    ///
    /// On success the attempt parks awaiting the provider confirmation and
    /// the returned handoff opens the provider's surface. On any failure
    /// the permit is released and the session is back at Idle.
    ///
    /// # Errors
    ///
    /// See [`CheckoutError`]; `Validation` is returned before any network
    /// call is made.
    #[tracing::instrument(skip(self, address), fields(%artwork_id))]
    pub async fn submit(
        &self,
        session_key: &str,
        artwork_id: ArtworkId,
        address: ShippingAddress,
        buyer: String,
    ) -> Result<CheckoutHandoff, CheckoutError> {
        self.reserve(session_key)?;

        match self
            .run_submit(session_key, artwork_id, address, buyer)
            .await
        {
            Ok(handoff) => Ok(handoff),
            Err(e) => {
                self.release(session_key);
                Err(e)
            }
        }
    }

    async fn run_submit(
        &self,
        session_key: &str,
        artwork_id: ArtworkId,
        address: ShippingAddress,
        buyer: String,
    ) -> Result<CheckoutHandoff, CheckoutError> {
        // Validating: all six fields present, or no network call happens.
        address.validate()?;

        let artwork = self
            .catalog
            .artwork(artwork_id)
            .await?
            .ok_or(CheckoutError::ArtworkNotFound)?;

        let amount_minor = artwork.price.to_minor_units()?;

        // CreatingPaymentIntent
        let provider_order = self
            .gateway
            .create_order(amount_minor)
            .await
            .map_err(CheckoutError::PaymentIntent)?;

        let handoff = CheckoutHandoff {
            provider_order_id: provider_order.id,
            amount: provider_order.amount,
            currency: provider_order.currency,
            prefill: Prefill {
                name: address.name.clone(),
                contact: address.mobile.clone(),
            },
        };

        // AwaitingProviderConfirmation
        self.park(session_key, artwork, address, buyer);

        Ok(handoff)
    }

    /// Complete a parked attempt with the provider's confirmation payload.
    ///
    /// The permit is consumed up front: whatever happens next, the session
    /// is back at Idle afterwards.
    ///
    /// # Errors
    ///
    /// Returns `NoPendingAttempt` if nothing is parked for this session (or
    /// the parked attempt is for a different artwork), and
    /// `PostPaymentPersistence` if the order write fails - the charge has
    /// already succeeded at that point.
    #[tracing::instrument(skip(self, confirmation), fields(%artwork_id))]
    pub async fn confirm(
        &self,
        session_key: &str,
        artwork_id: ArtworkId,
        confirmation: ProviderConfirmation,
    ) -> Result<OrderId, CheckoutError> {
        let (artwork, address, buyer) = self.take_parked(session_key, artwork_id)?;

        let order = NewOrder {
            artwork_id: artwork.id,
            artwork_title: artwork.title,
            artwork_image_url: artwork.image_url,
            price: artwork.price,
            shipping_address: address,
            status: OrderStatus::Paid,
            buyer,
            payment_id: confirmation.payment_id,
            provider_order_id: confirmation.order_id,
            signature: confirmation.signature,
        };

        // PersistingOrder
        let order_id = self
            .orders
            .persist(&order)
            .await
            .map_err(CheckoutError::PostPaymentPersistence)?;

        tracing::info!(%order_id, "order persisted");
        Ok(order_id)
    }

    /// Dismiss the provider's confirmation surface, releasing the permit.
    ///
    /// Returns whether an awaiting attempt was actually dismissed. Not an
    /// error either way - closing an already-closed surface is a no-op.
    pub fn dismiss(&self, session_key: &str) -> bool {
        let mut attempts = self.lock_attempts();
        match attempts.get(session_key) {
            Some(attempt) if attempt.phase == AttemptPhase::AwaitingProviderConfirmation => {
                attempts.remove(session_key);
                true
            }
            _ => false,
        }
    }

    /// Take the permit for a session, failing if one is already held.
    fn reserve(&self, session_key: &str) -> Result<(), CheckoutError> {
        let mut attempts = self.lock_attempts();
        if attempts.contains_key(session_key) {
            return Err(CheckoutError::AttemptInFlight);
        }
        attempts.insert(session_key.to_owned(), Attempt::reserved());
        Ok(())
    }

    /// Release a held permit (failed submit).
    fn release(&self, session_key: &str) {
        self.lock_attempts().remove(session_key);
    }

    /// Move a reservation to the awaiting state.
    fn park(&self, session_key: &str, artwork: Artwork, address: ShippingAddress, buyer: String) {
        self.lock_attempts().insert(
            session_key.to_owned(),
            Attempt {
                phase: AttemptPhase::AwaitingProviderConfirmation,
                artwork: Some(artwork),
                address: Some(address),
                buyer: Some(buyer),
            },
        );
    }

    /// Remove and return a parked attempt for the given artwork.
    fn take_parked(
        &self,
        session_key: &str,
        artwork_id: ArtworkId,
    ) -> Result<(Artwork, ShippingAddress, String), CheckoutError> {
        let mut attempts = self.lock_attempts();

        let parked_for_artwork = matches!(
            attempts.get(session_key),
            Some(Attempt {
                phase: AttemptPhase::AwaitingProviderConfirmation,
                artwork: Some(a),
                ..
            }) if a.id == artwork_id
        );
        if !parked_for_artwork {
            return Err(CheckoutError::NoPendingAttempt);
        }

        let attempt = attempts
            .remove(session_key)
            .ok_or(CheckoutError::NoPendingAttempt)?;
        match (attempt.artwork, attempt.address, attempt.buyer) {
            (Some(artwork), Some(address), Some(buyer)) => Ok((artwork, address, buyer)),
            _ => Err(CheckoutError::NoPendingAttempt),
        }
    }

    fn lock_attempts(&self) -> std::sync::MutexGuard<'_, HashMap<String, Attempt>> {
        // A poisoned lock means a panic while holding it; propagating the
        // inner state is still sound because every mutation is a single
        // insert or remove.
        self.attempts
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::Utc;

    use atelier_core::Price;

    use super::*;

    struct FixedCatalog(Vec<Artwork>);

    #[async_trait]
    impl ArtworkSource for FixedCatalog {
        async fn artwork(&self, id: ArtworkId) -> Result<Option<Artwork>, RepositoryError> {
            Ok(self.0.iter().find(|a| a.id == id).cloned())
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        orders: Mutex<Vec<NewOrder>>,
        fail: bool,
    }

    #[async_trait]
    impl OrderSink for RecordingSink {
        async fn persist(&self, order: &NewOrder) -> Result<OrderId, RepositoryError> {
            if self.fail {
                return Err(RepositoryError::Database(sqlx::Error::PoolClosed));
            }
            let mut orders = self.orders.lock().unwrap();
            orders.push(order.clone());
            Ok(OrderId::new(i32::try_from(orders.len()).unwrap()))
        }
    }

    #[derive(Default)]
    struct ScriptedGateway {
        fail_status: Option<u16>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PaymentGateway for ScriptedGateway {
        async fn create_order(&self, amount_minor: i64) -> Result<ProviderOrder, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(status) = self.fail_status {
                return Err(GatewayError::Api {
                    status,
                    message: "provider failure".to_owned(),
                });
            }
            Ok(ProviderOrder {
                id: "order_test123".to_owned(),
                amount: amount_minor,
                currency: "INR".to_owned(),
                extra: serde_json::Map::new(),
            })
        }
    }

    fn artwork(id: i32, price: i64) -> Artwork {
        Artwork {
            id: ArtworkId::new(id),
            title: "Celestial Dream".to_owned(),
            artist: "Eleanor Vance".to_owned(),
            style: "Abstract".to_owned(),
            description: String::new(),
            price: Price::new(price).unwrap(),
            image_url: "https://img.example/1.jpg".to_owned(),
            likes: 0,
            created_at: Utc::now(),
            available_sizes: Vec::new(),
            submitted_by: None,
        }
    }

    fn address() -> ShippingAddress {
        ShippingAddress {
            name: "Jane Doe".to_owned(),
            line1: "123 Artistic Ave".to_owned(),
            city: "Artville".to_owned(),
            state: "CA".to_owned(),
            zip: "90210".to_owned(),
            mobile: "123-456-7890".to_owned(),
        }
    }

    fn sequencer(
        catalog: Vec<Artwork>,
        sink_fails: bool,
        gateway_status: Option<u16>,
    ) -> CheckoutSequencer<FixedCatalog, RecordingSink, ScriptedGateway> {
        CheckoutSequencer::new(
            FixedCatalog(catalog),
            RecordingSink {
                fail: sink_fails,
                ..RecordingSink::default()
            },
            ScriptedGateway {
                fail_status: gateway_status,
                ..ScriptedGateway::default()
            },
        )
    }

    fn confirmation() -> ProviderConfirmation {
        ProviderConfirmation {
            payment_id: "pay_29QQoUBi66xm2f".to_owned(),
            order_id: "order_test123".to_owned(),
            signature: "9ef4dffbfd84f1318f6739a3ce19f9d85851857ae648f114332d8401e0949a3d".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_missing_zip_fails_validation_before_any_network_call() {
        let seq = sequencer(vec![artwork(1, 850)], false, None);
        let mut addr = address();
        addr.zip = String::new();

        let err = seq
            .submit("sess", ArtworkId::new(1), addr, "guest".to_owned())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CheckoutError::Validation(AddressError::EmptyField("zip"))
        ));
        assert_eq!(seq.gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_gateway_failure_is_payment_intent_error_and_no_order() {
        let seq = sequencer(vec![artwork(1, 850)], false, Some(500));

        let err = seq
            .submit("sess", ArtworkId::new(1), address(), "guest".to_owned())
            .await
            .unwrap_err();

        assert!(matches!(err, CheckoutError::PaymentIntent(_)));
        assert!(seq.orders.orders.lock().unwrap().is_empty());
        // Permit released: a retry is allowed.
        assert!(matches!(
            seq.submit("sess", ArtworkId::new(1), address(), "guest".to_owned())
                .await
                .unwrap_err(),
            CheckoutError::PaymentIntent(_)
        ));
    }

    #[tokio::test]
    async fn test_persist_failure_after_confirmation_is_distinct() {
        let seq = sequencer(vec![artwork(1, 850)], true, None);

        seq.submit("sess", ArtworkId::new(1), address(), "guest".to_owned())
            .await
            .unwrap();
        let err = seq
            .confirm("sess", ArtworkId::new(1), confirmation())
            .await
            .unwrap_err();

        assert!(matches!(err, CheckoutError::PostPaymentPersistence(_)));
        assert!(!matches!(err, CheckoutError::PaymentIntent(_)));
    }

    #[tokio::test]
    async fn test_happy_path_persists_snapshot_and_correlation_fields() {
        let seq = sequencer(vec![artwork(1, 850)], false, None);

        let handoff = seq
            .submit("sess", ArtworkId::new(1), address(), "7".to_owned())
            .await
            .unwrap();
        assert_eq!(handoff.amount, 85_000);
        assert_eq!(handoff.currency, "INR");
        assert_eq!(handoff.prefill.name, "Jane Doe");
        assert_eq!(handoff.prefill.contact, "123-456-7890");

        let order_id = seq
            .confirm("sess", ArtworkId::new(1), confirmation())
            .await
            .unwrap();
        assert_eq!(order_id, OrderId::new(1));

        let orders = seq.orders.orders.lock().unwrap();
        let order = &orders[0];
        assert_eq!(order.artwork_title, "Celestial Dream");
        assert_eq!(order.price, Price::new(850).unwrap());
        assert_eq!(order.status, OrderStatus::Paid);
        assert_eq!(order.buyer, "7");
        assert_eq!(order.payment_id, "pay_29QQoUBi66xm2f");
        assert_eq!(order.provider_order_id, "order_test123");
    }

    #[tokio::test]
    async fn test_address_survives_verbatim_through_persistence() {
        let seq = sequencer(vec![artwork(1, 850)], false, None);
        let mut addr = address();
        addr.city = "  ArtVILLE  ".to_owned();
        addr.zip = "90210 ".to_owned();

        seq.submit("sess", ArtworkId::new(1), addr.clone(), "guest".to_owned())
            .await
            .unwrap();
        seq.confirm("sess", ArtworkId::new(1), confirmation())
            .await
            .unwrap();

        let orders = seq.orders.orders.lock().unwrap();
        assert_eq!(orders[0].shipping_address, addr);
    }

    #[tokio::test]
    async fn test_second_submit_while_awaiting_is_rejected() {
        let seq = sequencer(vec![artwork(1, 850)], false, None);

        seq.submit("sess", ArtworkId::new(1), address(), "guest".to_owned())
            .await
            .unwrap();
        let err = seq
            .submit("sess", ArtworkId::new(1), address(), "guest".to_owned())
            .await
            .unwrap_err();
        assert!(matches!(err, CheckoutError::AttemptInFlight));

        // A different session is unaffected.
        seq.submit("other", ArtworkId::new(1), address(), "guest".to_owned())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_dismiss_returns_to_idle_without_error() {
        let seq = sequencer(vec![artwork(1, 850)], false, None);

        seq.submit("sess", ArtworkId::new(1), address(), "guest".to_owned())
            .await
            .unwrap();
        assert!(seq.dismiss("sess"));
        assert!(!seq.dismiss("sess"));

        // Permit released.
        seq.submit("sess", ArtworkId::new(1), address(), "guest".to_owned())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_unknown_artwork_fails_fast() {
        let seq = sequencer(vec![artwork(1, 850)], false, None);

        let err = seq
            .submit("sess", ArtworkId::new(99), address(), "guest".to_owned())
            .await
            .unwrap_err();
        assert!(matches!(err, CheckoutError::ArtworkNotFound));
        assert_eq!(seq.gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_confirm_without_attempt_is_rejected() {
        let seq = sequencer(vec![artwork(1, 850)], false, None);
        let err = seq
            .confirm("sess", ArtworkId::new(1), confirmation())
            .await
            .unwrap_err();
        assert!(matches!(err, CheckoutError::NoPendingAttempt));
    }

    #[tokio::test]
    async fn test_overflowing_price_fails_before_gateway() {
        let seq = sequencer(vec![artwork(1, i64::MAX / 10)], false, None);
        let err = seq
            .submit("sess", ArtworkId::new(1), address(), "guest".to_owned())
            .await
            .unwrap_err();
        assert!(matches!(err, CheckoutError::Amount(_)));
        assert_eq!(seq.gateway.calls.load(Ordering::SeqCst), 0);
    }
}
