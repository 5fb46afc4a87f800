//! Whole-registry snapshot: the unit of persistence.
//!
//! The entire state is written and read as one document; there is no
//! partial update path.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::models::identity::Identity;
use crate::models::ride::Ride;

/// Full registry state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub identities: Vec<Identity>,
    pub rides: Vec<Ride>,
    pub base_price_per_km: f64,
    /// Next value of the ride-id sequence.
    pub next_ride_seq: u64,
}

impl RegistrySnapshot {
    /// Empty state for a fresh start.
    pub fn fresh(base_price_per_km: f64) -> Self {
        Self {
            identities: Vec::new(),
            rides: Vec::new(),
            base_price_per_km,
            next_ride_seq: 1,
        }
    }
}

impl Default for RegistrySnapshot {
    fn default() -> Self {
        Self::fresh(constants::DEFAULT_BASE_PRICE_PER_KM)
    }
}
