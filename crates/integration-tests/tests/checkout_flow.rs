//! Integration tests for the checkout sequencer.
//!
//! The real sequencer runs against in-memory stores and a scripted gateway;
//! each test walks one path through the state machine.

use std::sync::atomic::Ordering;

use atelier_core::{AddressError, ArtworkId, OrderStatus, ShippingAddress};
use atelier_integration_tests::{InMemoryCatalog, InMemoryOrders, ScriptedGateway, artwork};
use atelier_storefront::checkout::{CheckoutError, CheckoutSequencer};
use atelier_storefront::models::ProviderConfirmation;

type TestSequencer = CheckoutSequencer<InMemoryCatalog, InMemoryOrders, ScriptedGateway>;

fn sequencer(orders: InMemoryOrders, gateway: ScriptedGateway) -> TestSequencer {
    let catalog = InMemoryCatalog::new(vec![
        artwork(1, "Celestial Dream", "Eleanor Vance", "Abstract", 850, 42),
        artwork(2, "Urban Pulse", "Marco Diaz", "Impressionism", 1200, 101),
    ]);
    CheckoutSequencer::new(catalog, orders, gateway)
}

fn address() -> ShippingAddress {
    ShippingAddress {
        name: "Jane Doe".to_owned(),
        line1: "123 Artistic Ave, Apt 4B".to_owned(),
        city: "Artville".to_owned(),
        state: "CA".to_owned(),
        zip: "90210".to_owned(),
        mobile: "123-456-7890".to_owned(),
    }
}

fn confirmation() -> ProviderConfirmation {
    ProviderConfirmation {
        payment_id: "pay_29QQoUBi66xm2f".to_owned(),
        order_id: "order_fixed_85000".to_owned(),
        signature: "2fb09b84a2f2e9b14b583d74f4e3bb2a".to_owned(),
    }
}

#[tokio::test]
async fn missing_address_field_fails_without_touching_the_gateway() {
    let seq = sequencer(InMemoryOrders::default(), ScriptedGateway::default());
    let mut incomplete = address();
    incomplete.zip = String::new();

    let err = seq
        .submit("s1", ArtworkId::new(1), incomplete, "guest".to_owned())
        .await
        .expect_err("must fail validation");

    assert!(matches!(
        err,
        CheckoutError::Validation(AddressError::EmptyField("zip"))
    ));
    assert_eq!(seq.gateway().calls.load(Ordering::SeqCst), 0);
    assert!(seq.orders().is_empty());
}

#[tokio::test]
async fn gateway_500_reports_payment_intent_error_and_writes_nothing() {
    let seq = sequencer(InMemoryOrders::default(), ScriptedGateway::failing(500));

    let err = seq
        .submit("s1", ArtworkId::new(1), address(), "guest".to_owned())
        .await
        .expect_err("gateway down");

    assert!(matches!(err, CheckoutError::PaymentIntent(_)));
    assert!(seq.orders().is_empty());
}

#[tokio::test]
async fn write_failure_after_confirmation_reports_post_payment_error() {
    let seq = sequencer(InMemoryOrders::failing(), ScriptedGateway::default());

    seq.submit("s1", ArtworkId::new(1), address(), "guest".to_owned())
        .await
        .expect("submit succeeds");
    let err = seq
        .confirm("s1", ArtworkId::new(1), confirmation())
        .await
        .expect_err("write fails");

    // The whole point: this failure class is not a payment failure.
    assert!(matches!(err, CheckoutError::PostPaymentPersistence(_)));
}

#[tokio::test]
async fn full_flow_persists_a_paid_order_with_verbatim_address() {
    let seq = sequencer(InMemoryOrders::default(), ScriptedGateway::default());
    let mut shipping = address();
    shipping.city = "  artVILLE ".to_owned();
    shipping.state = "ca ".to_owned();

    let handoff = seq
        .submit("s1", ArtworkId::new(1), shipping.clone(), "17".to_owned())
        .await
        .expect("submit succeeds");
    assert_eq!(handoff.amount, 85_000);
    assert_eq!(handoff.prefill.contact, shipping.mobile);

    let order_id = seq
        .confirm("s1", ArtworkId::new(1), confirmation())
        .await
        .expect("confirm succeeds");

    let persisted = seq.orders().read_back(order_id).expect("order stored");
    assert_eq!(persisted.status, OrderStatus::Paid);
    assert_eq!(persisted.buyer, "17");
    assert_eq!(persisted.artwork_title, "Celestial Dream");
    // All six fields byte-for-byte, casing and whitespace included.
    assert_eq!(persisted.shipping_address, shipping);
    assert_eq!(persisted.payment_id, "pay_29QQoUBi66xm2f");
    assert_eq!(persisted.provider_order_id, "order_fixed_85000");
}

#[tokio::test]
async fn one_attempt_per_session_and_dismiss_releases_it() {
    let seq = sequencer(InMemoryOrders::default(), ScriptedGateway::default());

    seq.submit("s1", ArtworkId::new(1), address(), "guest".to_owned())
        .await
        .expect("first submit");

    let err = seq
        .submit("s1", ArtworkId::new(2), address(), "guest".to_owned())
        .await
        .expect_err("second submit must be rejected");
    assert!(matches!(err, CheckoutError::AttemptInFlight));

    assert!(seq.dismiss("s1"));
    seq.submit("s1", ArtworkId::new(2), address(), "guest".to_owned())
        .await
        .expect("permit released after dismissal");
}

#[tokio::test]
async fn confirming_a_different_artwork_than_parked_is_rejected() {
    let seq = sequencer(InMemoryOrders::default(), ScriptedGateway::default());

    seq.submit("s1", ArtworkId::new(1), address(), "guest".to_owned())
        .await
        .expect("submit succeeds");
    let err = seq
        .confirm("s1", ArtworkId::new(2), confirmation())
        .await
        .expect_err("wrong artwork");
    assert!(matches!(err, CheckoutError::NoPendingAttempt));
}

#[tokio::test]
async fn unknown_artwork_fails_fast() {
    let seq = sequencer(InMemoryOrders::default(), ScriptedGateway::default());

    let err = seq
        .submit("s1", ArtworkId::new(99), address(), "guest".to_owned())
        .await
        .expect_err("no such artwork");
    assert!(matches!(err, CheckoutError::ArtworkNotFound));
}
