//! Registry: owns the identity and ride arenas and every mutating
//! operation.
//!
//! Flat `Vec` arenas keep registration/creation order; `FxHashMap`
//! secondary indexes resolve usernames and ride ids to slots. Rides and
//! identities reference each other by id only, so removing a user leaves
//! historical rides intact. Single actor by design: callers wanting
//! concurrent access must wrap the registry in their own mutual
//! exclusion.

mod accounts;
mod matching;

use rustc_hash::FxHashMap;
use tracing::{info, warn};

use crate::config::HailConfig;
use crate::constants;
use crate::errors::{RegistryError, RegistryResult, SnapshotResult};
use crate::models::identity::{Identity, IdentityKind, Role};
use crate::models::ride::{Ride, RideStatus};
use crate::quote::QuoteEngine;
use crate::snapshot::RegistrySnapshot;
use crate::traits::SnapshotStore;
use crate::types::identifiers::RideId;

/// Process-wide state: identities, rides, pricing, randomness, and the
/// persistence gateway.
pub struct Registry {
    identities: Vec<Identity>,
    rides: Vec<Ride>,
    base_price_per_km: f64,
    next_ride_seq: u64,
    by_username: FxHashMap<String, usize>,
    by_ride_id: FxHashMap<RideId, usize>,
    quotes: QuoteEngine,
    store: Box<dyn SnapshotStore>,
}

impl Registry {
    /// Construct → load → bootstrap admin. Load failures degrade to a
    /// fresh start with a warning; every later mutation persists.
    pub fn open(store: Box<dyn SnapshotStore>, config: &HailConfig, quotes: QuoteEngine) -> Self {
        let snapshot = match store.load() {
            Ok(Some(snapshot)) => {
                info!(
                    identities = snapshot.identities.len(),
                    rides = snapshot.rides.len(),
                    "Snapshot loaded"
                );
                snapshot
            }
            Ok(None) => {
                info!("No snapshot found, starting fresh");
                RegistrySnapshot::fresh(config.effective_base_price())
            }
            Err(error) => {
                warn!(error = %error, "Snapshot unreadable, starting fresh");
                RegistrySnapshot::fresh(config.effective_base_price())
            }
        };

        let mut registry = Self::from_snapshot(snapshot, quotes, store);
        registry.bootstrap_admin();
        registry
    }

    fn from_snapshot(
        snapshot: RegistrySnapshot,
        quotes: QuoteEngine,
        store: Box<dyn SnapshotStore>,
    ) -> Self {
        let by_username = snapshot
            .identities
            .iter()
            .enumerate()
            .map(|(slot, identity)| (identity.username.clone(), slot))
            .collect();
        let by_ride_id = snapshot
            .rides
            .iter()
            .enumerate()
            .map(|(slot, ride)| (ride.id.clone(), slot))
            .collect();

        Self {
            identities: snapshot.identities,
            rides: snapshot.rides,
            base_price_per_km: snapshot.base_price_per_km,
            next_ride_seq: snapshot.next_ride_seq,
            by_username,
            by_ride_id,
            quotes,
            store,
        }
    }

    /// Exactly one administrator is guaranteed to exist after startup.
    fn bootstrap_admin(&mut self) {
        if self.identities.iter().any(|i| i.role() == Role::Admin) {
            return;
        }
        let admin = Identity::admin(
            constants::DEFAULT_ADMIN_NAME,
            constants::DEFAULT_ADMIN_PHONE,
            constants::DEFAULT_ADMIN_USERNAME,
            constants::DEFAULT_ADMIN_PASSWORD,
        );
        info!(
            username = constants::DEFAULT_ADMIN_USERNAME,
            "Default administrator created"
        );
        self.insert_identity(admin);
        self.persist();
    }

    // ─── Persistence ────────────────────────────────────────────────────

    /// The current state as a snapshot.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            identities: self.identities.clone(),
            rides: self.rides.clone(),
            base_price_per_km: self.base_price_per_km,
            next_ride_seq: self.next_ride_seq,
        }
    }

    /// Explicit save, for a clean-shutdown final snapshot.
    pub fn save_now(&self) -> SnapshotResult<()> {
        self.store.save(&self.snapshot())
    }

    /// Full-snapshot save after a mutation. A failed save is logged and
    /// the in-memory state kept; durable and in-memory state may diverge
    /// until the next successful save.
    fn persist(&self) {
        if let Err(error) = self.store.save(&self.snapshot()) {
            warn!(error = %error, "Snapshot save failed; in-memory state retained");
        }
    }

    // ─── Lookups ────────────────────────────────────────────────────────

    pub fn identity(&self, username: &str) -> Option<&Identity> {
        self.by_username.get(username).map(|&slot| &self.identities[slot])
    }

    pub fn ride(&self, id: &RideId) -> Option<&Ride> {
        self.by_ride_id.get(id).map(|&slot| &self.rides[slot])
    }

    fn identity_mut(&mut self, username: &str) -> Option<&mut Identity> {
        let slot = *self.by_username.get(username)?;
        Some(&mut self.identities[slot])
    }

    fn ride_slot(&self, id: &RideId) -> RegistryResult<usize> {
        self.by_ride_id
            .get(id)
            .copied()
            .ok_or_else(|| RegistryError::RideNotFound(id.to_string()))
    }

    fn insert_identity(&mut self, identity: Identity) {
        self.by_username
            .insert(identity.username.clone(), self.identities.len());
        self.identities.push(identity);
    }

    fn insert_ride(&mut self, ride: Ride) {
        self.by_ride_id.insert(ride.id.clone(), self.rides.len());
        self.rides.push(ride);
    }

    fn reindex_identities(&mut self) {
        self.by_username = self
            .identities
            .iter()
            .enumerate()
            .map(|(slot, identity)| (identity.username.clone(), slot))
            .collect();
    }

    fn next_ride_id(&mut self) -> RideId {
        let id = RideId::from_seq(self.next_ride_seq);
        self.next_ride_seq += 1;
        id
    }

    fn push_history(&mut self, rider: &str, ride: &RideId) {
        if let Some(identity) = self.identity_mut(rider) {
            if let IdentityKind::Rider { ride_history } = &mut identity.kind {
                ride_history.push(ride.clone());
            }
        }
    }

    fn push_assigned(&mut self, driver: &str, ride: &RideId) {
        if let Some(identity) = self.identity_mut(driver) {
            if let IdentityKind::Driver { assigned_rides, .. } = &mut identity.kind {
                assigned_rides.push(ride.clone());
            }
        }
    }

    fn credit_driver(&mut self, username: &str, amount: f64) {
        match self.identity_mut(username) {
            Some(Identity {
                kind: IdentityKind::Driver { earnings, .. },
                ..
            }) => *earnings += amount,
            _ => warn!(username, "Fare not credited; driver no longer registered"),
        }
    }

    // ─── Pricing ────────────────────────────────────────────────────────

    pub fn base_price_per_km(&self) -> f64 {
        self.base_price_per_km
    }

    /// Rejects non-positive (and non-finite) prices; persists otherwise.
    pub fn set_base_price_per_km(&mut self, value: f64) -> RegistryResult<()> {
        if !value.is_finite() || value <= 0.0 {
            return Err(RegistryError::InvalidPrice(value));
        }
        self.base_price_per_km = value;
        self.persist();
        info!(price = value, "Base price updated");
        Ok(())
    }

    // ─── Listings (registration/creation order throughout) ─────────────

    pub fn riders(&self) -> Vec<&Identity> {
        self.identities
            .iter()
            .filter(|i| i.role() == Role::Rider)
            .collect()
    }

    pub fn drivers(&self) -> Vec<&Identity> {
        self.identities
            .iter()
            .filter(|i| i.role() == Role::Driver)
            .collect()
    }

    pub fn unapproved_drivers(&self) -> Vec<&Identity> {
        self.identities
            .iter()
            .filter(|i| {
                matches!(
                    i.kind,
                    IdentityKind::Driver {
                        approved: false,
                        ..
                    }
                )
            })
            .collect()
    }

    /// Approved AND online drivers, visible to riders booking a ride.
    pub fn available_drivers(&self) -> Vec<&Identity> {
        self.identities
            .iter()
            .filter(|i| i.is_available_driver())
            .collect()
    }

    pub fn rides(&self) -> &[Ride] {
        &self.rides
    }

    /// The open-request pool: requested rides with no driver yet.
    pub fn open_requests(&self) -> Vec<&Ride> {
        self.rides.iter().filter(|r| r.is_open_request()).collect()
    }

    pub fn rides_for_driver(&self, username: &str) -> Vec<&Ride> {
        self.rides
            .iter()
            .filter(|r| r.driver.as_deref() == Some(username))
            .collect()
    }

    /// The rider's history, resolved through the id list. Ids whose ride
    /// is missing are skipped.
    pub fn ride_history(&self, rider: &str) -> RegistryResult<Vec<&Ride>> {
        let identity = self
            .identity(rider)
            .ok_or_else(|| RegistryError::UserNotFound(rider.to_string()))?;
        match &identity.kind {
            IdentityKind::Rider { ride_history } => {
                Ok(ride_history.iter().filter_map(|id| self.ride(id)).collect())
            }
            _ => Err(RegistryError::WrongRole {
                username: rider.to_string(),
                expected: "rider",
            }),
        }
    }

    /// Rides the given rider could pay for right now.
    pub fn ongoing_rides_for_rider(&self, rider: &str) -> Vec<&Ride> {
        self.rides
            .iter()
            .filter(|r| r.rider == rider && r.status == RideStatus::Ongoing)
            .collect()
    }
}
