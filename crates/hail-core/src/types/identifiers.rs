//! Stable identifiers for registry entities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique ride identifier.
///
/// Generated from the registry's persisted sequence counter, so ids stay
/// unique across restarts and never collide within a burst of bookings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RideId(String);

impl RideId {
    pub fn from_seq(seq: u64) -> Self {
        Self(format!("RIDE-{seq:06}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
