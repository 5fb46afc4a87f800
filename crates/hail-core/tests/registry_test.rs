//! End-to-end registry scenarios: signup guards, driver visibility,
//! booking and matching, both completion paths, pricing, removal, and
//! the persistence contract (save-per-mutation, save-failure divergence,
//! unreadable-snapshot degrade).

use std::rc::Rc;

use hail_core::config::HailConfig;
use hail_core::errors::RegistryError;
use hail_core::models::receipt::{PAYMENT_PENDING, REMOVED_USER, UNASSIGNED};
use hail_core::models::ride::{PaymentMethod, RideStatus};
use hail_core::quote::{Quote, QuoteEngine};
use hail_core::registry::Registry;
use hail_core::traits::test_helpers::{
    CorruptSnapshotStore, FailingSnapshotStore, MemorySnapshotStore,
};
use hail_core::{HailErrorCode, Role};

fn open_registry() -> (Rc<MemorySnapshotStore>, Registry) {
    let store = Rc::new(MemorySnapshotStore::default());
    let registry = Registry::open(
        Box::new(Rc::clone(&store)),
        &HailConfig::default(),
        QuoteEngine::seeded(7),
    );
    (store, registry)
}

/// A fixed quote at the default price: 5.0 km at 8.0/km is a 40.0 fare.
fn quote_5km() -> Quote {
    Quote {
        distance_km: 5.0,
        fare: 40.0,
        eta_minutes: 4,
    }
}

fn add_rider(registry: &mut Registry, username: &str) {
    registry
        .register_rider("Ravi Kumar", "9876543210", username, "pw")
        .unwrap();
}

fn add_available_driver(registry: &mut Registry, username: &str) {
    registry
        .register_driver("Asha Devi", "9811122233", "KA-01-1234", username, "pw")
        .unwrap();
    registry.approve_driver(username).unwrap();
    assert!(registry.toggle_online(username).unwrap());
}

// ─── Bootstrap & authentication ─────────────────────────────────────────

#[test]
fn bootstrap_creates_exactly_one_default_admin() {
    let (store, registry) = open_registry();
    let admin = registry.authenticate("adminhemant", "hemant123").unwrap();
    assert_eq!(admin.role(), Role::Admin);
    assert!(store.saves() >= 1);

    // Reopening from the saved snapshot must not create a second admin.
    let reopened = Registry::open(
        Box::new(Rc::clone(&store)),
        &HailConfig::default(),
        QuoteEngine::seeded(7),
    );
    let admins = reopened
        .snapshot()
        .identities
        .iter()
        .filter(|i| i.role() == Role::Admin)
        .count();
    assert_eq!(admins, 1);
}

#[test]
fn authenticate_requires_exact_credentials() {
    let (_store, mut registry) = open_registry();
    add_rider(&mut registry, "ravi");
    assert!(registry.authenticate("ravi", "pw").is_ok());
    let err = registry.authenticate("ravi", "wrong").unwrap_err();
    assert!(matches!(err, RegistryError::InvalidCredentials));
    assert_eq!(err.error_code(), "INVALID_CREDENTIALS");
}

#[test]
fn duplicate_username_is_rejected_without_mutation() {
    let (_store, mut registry) = open_registry();
    add_rider(&mut registry, "ravi");
    let before = registry.snapshot();

    let err = registry
        .register_driver("Other", "123", "KA-02-9999", "ravi", "pw2")
        .unwrap_err();
    assert!(matches!(err, RegistryError::UsernameExists(_)));
    assert_eq!(registry.snapshot(), before);
}

// ─── Driver visibility ──────────────────────────────────────────────────

#[test]
fn availability_requires_approval_then_online() {
    let (_store, mut registry) = open_registry();
    registry
        .register_driver("Asha Devi", "9811122233", "KA-01-1234", "asha", "pw")
        .unwrap();
    assert!(registry.available_drivers().is_empty());

    // Unapproved drivers cannot go online.
    let err = registry.toggle_online("asha").unwrap_err();
    assert!(matches!(err, RegistryError::DriverNotApproved(_)));
    assert!(registry.available_drivers().is_empty());

    registry.approve_driver("asha").unwrap();
    assert!(registry.available_drivers().is_empty()); // approved but offline

    assert!(registry.toggle_online("asha").unwrap());
    let available = registry.available_drivers();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].username, "asha");

    // Toggling again hides the driver.
    assert!(!registry.toggle_online("asha").unwrap());
    assert!(registry.available_drivers().is_empty());
}

// ─── Booking & matching ─────────────────────────────────────────────────

#[test]
fn booking_with_zero_available_drivers_creates_nothing() {
    let (_store, mut registry) = open_registry();
    add_rider(&mut registry, "ravi");
    let err = registry.book_ride("ravi").unwrap_err();
    assert!(matches!(err, RegistryError::NoDriversAvailable));
    assert!(registry.rides().is_empty());
}

#[test]
fn quote_fare_follows_the_base_price() {
    let (_store, mut registry) = open_registry();
    add_rider(&mut registry, "ravi");
    add_available_driver(&mut registry, "asha");

    let (quote, listing) = registry.book_ride("ravi").unwrap();
    assert!((1.0..=10.0).contains(&quote.distance_km));
    assert!((2..=10).contains(&quote.eta_minutes));
    assert_eq!(quote.fare, quote.distance_km * 8.0);
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].vehicle_no, "KA-01-1234");

    registry.set_base_price_per_km(12.5).unwrap();
    let (quote, _) = registry.book_ride("ravi").unwrap();
    assert_eq!(quote.fare, quote.distance_km * 12.5);
}

#[test]
fn confirmed_booking_is_ongoing_and_linked_to_both_parties() {
    let (_store, mut registry) = open_registry();
    add_rider(&mut registry, "ravi");
    add_available_driver(&mut registry, "asha");

    let id = registry
        .confirm_booking("ravi", "MG Road", "Airport", &quote_5km(), "asha")
        .unwrap();

    let ride = registry.ride(&id).unwrap();
    assert_eq!(ride.status, RideStatus::Ongoing);
    assert_eq!(ride.driver.as_deref(), Some("asha"));
    assert_eq!(ride.fare, 40.0);

    let history = registry.ride_history("ravi").unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, id);

    let assigned = registry.rides_for_driver("asha");
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].id, id);

    assert!(registry.open_requests().is_empty());
}

#[test]
fn open_request_waits_for_an_eligible_driver() {
    let (_store, mut registry) = open_registry();
    add_rider(&mut registry, "ravi");
    registry
        .register_driver("Asha Devi", "9811122233", "KA-01-1234", "asha", "pw")
        .unwrap();

    let id = registry
        .request_ride("ravi", "MG Road", "Airport", &quote_5km())
        .unwrap();
    assert_eq!(registry.open_requests().len(), 1);
    assert_eq!(registry.ride(&id).unwrap().status, RideStatus::Requested);

    // Unapproved/offline drivers cannot accept.
    let err = registry.accept_ride("asha", &id).unwrap_err();
    assert!(matches!(err, RegistryError::DriverNotEligible(_)));
    assert_eq!(registry.ride(&id).unwrap().status, RideStatus::Requested);

    registry.approve_driver("asha").unwrap();
    registry.toggle_online("asha").unwrap();
    registry.accept_ride("asha", &id).unwrap();

    let ride = registry.ride(&id).unwrap();
    assert_eq!(ride.status, RideStatus::Ongoing);
    assert_eq!(ride.driver.as_deref(), Some("asha"));
    assert!(registry.open_requests().is_empty());

    // The ride left the pool; a second accept fails.
    let err = registry.accept_ride("asha", &id).unwrap_err();
    assert!(matches!(err, RegistryError::RideNotOpen(_)));
}

// ─── Completion & payment ───────────────────────────────────────────────

#[test]
fn earnings_are_credited_exactly_once_across_both_paths() {
    let (_store, mut registry) = open_registry();
    add_rider(&mut registry, "ravi");
    add_available_driver(&mut registry, "asha");

    let id = registry
        .confirm_booking("ravi", "MG Road", "Airport", &quote_5km(), "asha")
        .unwrap();

    registry.complete_ride("asha", &id).unwrap();
    let ride = registry.ride(&id).unwrap();
    assert_eq!(ride.status, RideStatus::Completed);
    assert!(ride.completed_at.is_some());
    assert_eq!(registry.identity("asha").unwrap().earnings(), Some(40.0));

    // The other completion path must reject the already-completed ride.
    let err = registry
        .pay_for_ride("ravi", &id, PaymentMethod::Cash, None)
        .unwrap_err();
    assert!(matches!(err, RegistryError::RideNotOngoing(_)));
    assert_eq!(registry.identity("asha").unwrap().earnings(), Some(40.0));

    // And so must a second completion by the driver.
    let err = registry.complete_ride("asha", &id).unwrap_err();
    assert!(matches!(err, RegistryError::RideNotOngoing(_)));
    assert_eq!(registry.identity("asha").unwrap().earnings(), Some(40.0));
}

#[test]
fn payment_completes_the_ride_and_credits_the_driver() {
    let (_store, mut registry) = open_registry();
    add_rider(&mut registry, "ravi");
    add_available_driver(&mut registry, "asha");
    let id = registry
        .confirm_booking("ravi", "MG Road", "Airport", &quote_5km(), "asha")
        .unwrap();

    // UPI without an id is a validation failure, nothing mutated.
    let err = registry
        .pay_for_ride("ravi", &id, PaymentMethod::Upi, None)
        .unwrap_err();
    assert!(matches!(err, RegistryError::InvalidUpiId));
    assert_eq!(registry.ride(&id).unwrap().status, RideStatus::Ongoing);

    // Only the owning rider can pay.
    add_rider(&mut registry, "meena");
    let err = registry
        .pay_for_ride("meena", &id, PaymentMethod::Cash, None)
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotRideOwner { .. }));

    registry
        .pay_for_ride("ravi", &id, PaymentMethod::Upi, Some("ravi@upi"))
        .unwrap();
    let ride = registry.ride(&id).unwrap();
    assert_eq!(ride.status, RideStatus::Completed);
    assert_eq!(ride.payment, Some(PaymentMethod::Upi));
    assert_eq!(ride.upi_id.as_deref(), Some("ravi@upi"));
    assert_eq!(registry.identity("asha").unwrap().earnings(), Some(40.0));

    // Driver marking it complete afterwards must not double-credit.
    let err = registry.complete_ride("asha", &id).unwrap_err();
    assert!(matches!(err, RegistryError::RideNotOngoing(_)));
    assert_eq!(registry.identity("asha").unwrap().earnings(), Some(40.0));
}

#[test]
fn completion_requires_the_assigned_driver() {
    let (_store, mut registry) = open_registry();
    add_rider(&mut registry, "ravi");
    add_available_driver(&mut registry, "asha");
    add_available_driver(&mut registry, "bala");
    let id = registry
        .confirm_booking("ravi", "MG Road", "Airport", &quote_5km(), "asha")
        .unwrap();

    let err = registry.complete_ride("bala", &id).unwrap_err();
    assert!(matches!(err, RegistryError::NotRideOwner { .. }));
    assert_eq!(registry.ride(&id).unwrap().status, RideStatus::Ongoing);
    assert_eq!(registry.identity("bala").unwrap().earnings(), Some(0.0));
}

// ─── Pricing ────────────────────────────────────────────────────────────

#[test]
fn non_positive_prices_are_rejected() {
    let (_store, mut registry) = open_registry();
    for bad in [0.0, -3.5, f64::NAN] {
        let err = registry.set_base_price_per_km(bad).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidPrice(_)));
    }
    assert_eq!(registry.base_price_per_km(), 8.0);
}

// ─── Removal & receipts ─────────────────────────────────────────────────

#[test]
fn removing_a_user_leaves_rides_and_receipts_working() {
    let (_store, mut registry) = open_registry();
    add_rider(&mut registry, "ravi");
    add_available_driver(&mut registry, "asha");
    let id = registry
        .confirm_booking("ravi", "MG Road", "Airport", &quote_5km(), "asha")
        .unwrap();

    registry.remove_user("asha").unwrap();
    assert!(registry.identity("asha").is_none());

    // The ride survives, its receipt resolves with placeholders.
    let receipt = registry.receipt(&id).unwrap();
    assert_eq!(receipt.rider, "Ravi Kumar");
    assert_eq!(receipt.driver, REMOVED_USER);
    assert_eq!(receipt.vehicle, REMOVED_USER);
    assert_eq!(receipt.payment, PAYMENT_PENDING);

    // Paying still completes the ride; there is nobody left to credit.
    registry
        .pay_for_ride("ravi", &id, PaymentMethod::Cash, None)
        .unwrap();
    assert_eq!(registry.ride(&id).unwrap().status, RideStatus::Completed);

    registry.remove_user("ravi").unwrap();
    let receipt = registry.receipt(&id).unwrap();
    assert_eq!(receipt.rider, REMOVED_USER);
}

#[test]
fn receipt_of_an_open_request_reports_unassigned() {
    let (_store, mut registry) = open_registry();
    add_rider(&mut registry, "ravi");
    let id = registry
        .request_ride("ravi", "MG Road", "Airport", &quote_5km())
        .unwrap();

    let receipt = registry.receipt(&id).unwrap();
    assert_eq!(receipt.driver, UNASSIGNED);
    assert_eq!(receipt.vehicle, UNASSIGNED);
    assert_eq!(receipt.status, "REQUESTED");
    assert_eq!(receipt.fare, 40.0);
}

#[test]
fn unknown_targets_report_not_found() {
    let (_store, mut registry) = open_registry();
    assert!(matches!(
        registry.remove_user("ghost").unwrap_err(),
        RegistryError::UserNotFound(_)
    ));
    assert!(matches!(
        registry.approve_driver("ghost").unwrap_err(),
        RegistryError::DriverNotFound(_)
    ));
    add_rider(&mut registry, "ravi");
    // A rider is not a driver for approval purposes.
    assert!(matches!(
        registry.approve_driver("ravi").unwrap_err(),
        RegistryError::DriverNotFound(_)
    ));
}

// ─── Persistence contract ───────────────────────────────────────────────

#[test]
fn every_mutation_writes_a_snapshot() {
    let (store, mut registry) = open_registry();
    let after_bootstrap = store.saves();

    add_rider(&mut registry, "ravi");
    assert_eq!(store.saves(), after_bootstrap + 1);

    registry
        .register_driver("Asha Devi", "9811122233", "KA-01-1234", "asha", "pw")
        .unwrap();
    registry.approve_driver("asha").unwrap();
    registry.toggle_online("asha").unwrap();
    registry.set_base_price_per_km(9.0).unwrap();
    assert_eq!(store.saves(), after_bootstrap + 5);

    // The durable copy matches the live state field-for-field.
    assert_eq!(store.last_saved().unwrap(), registry.snapshot());
}

#[test]
fn failed_saves_keep_the_in_memory_state() {
    let mut registry = Registry::open(
        Box::new(FailingSnapshotStore),
        &HailConfig::default(),
        QuoteEngine::seeded(7),
    );
    add_rider(&mut registry, "ravi");
    // The mutation survived even though nothing was persisted.
    assert!(registry.authenticate("ravi", "pw").is_ok());
    assert!(registry.save_now().is_err());
}

#[test]
fn unreadable_snapshots_degrade_to_a_fresh_start() {
    let registry = Registry::open(
        Box::new(CorruptSnapshotStore),
        &HailConfig::default(),
        QuoteEngine::seeded(7),
    );
    assert!(registry.authenticate("adminhemant", "hemant123").is_ok());
    assert!(registry.rides().is_empty());
}
