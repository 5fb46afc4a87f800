//! Identity model: riders, drivers, and the administrator.
//!
//! Role-specific state lives in a tagged variant, and ride
//! back-references are stored as ids, never owning references. That
//! keeps the snapshot cycle-free and makes "removed user" resolution a
//! missing-key lookup.

use serde::{Deserialize, Serialize};

use crate::types::identifiers::RideId;

/// Role tag, serialized in the same spelling the data files use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Rider,
    Driver,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rider => "RIDER",
            Self::Driver => "DRIVER",
            Self::Admin => "ADMIN",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "RIDER" => Some(Self::Rider),
            "DRIVER" => Some(Self::Driver),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// An authenticated actor. The username is unique across every role and
/// is never reused once taken; there is no rename operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub phone: String,
    pub username: String,
    /// Stored and compared as plain text, matching the data files this
    /// simulator replaces.
    pub password: String,
    #[serde(flatten)]
    pub kind: IdentityKind,
}

/// Role-specific state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentityKind {
    Rider {
        /// Ride history, append-only, in booking order.
        #[serde(default)]
        ride_history: Vec<RideId>,
    },
    Driver {
        vehicle_no: String,
        /// Set only by an administrator.
        approved: bool,
        /// Toggled by the driver; requires approval first.
        online: bool,
        /// Monotonically non-decreasing, credited once per completed ride.
        earnings: f64,
        #[serde(default)]
        assigned_rides: Vec<RideId>,
    },
    Admin,
}

impl Identity {
    pub fn rider(name: &str, phone: &str, username: &str, password: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            kind: IdentityKind::Rider {
                ride_history: Vec::new(),
            },
        }
    }

    /// New drivers start unapproved and offline with zero earnings.
    pub fn driver(name: &str, phone: &str, vehicle_no: &str, username: &str, password: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            kind: IdentityKind::Driver {
                vehicle_no: vehicle_no.to_string(),
                approved: false,
                online: false,
                earnings: 0.0,
                assigned_rides: Vec::new(),
            },
        }
    }

    pub fn admin(name: &str, phone: &str, username: &str, password: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            kind: IdentityKind::Admin,
        }
    }

    pub fn role(&self) -> Role {
        match self.kind {
            IdentityKind::Rider { .. } => Role::Rider,
            IdentityKind::Driver { .. } => Role::Driver,
            IdentityKind::Admin => Role::Admin,
        }
    }

    /// Approved and online, i.e. visible to riders booking a ride.
    pub fn is_available_driver(&self) -> bool {
        matches!(
            self.kind,
            IdentityKind::Driver {
                approved: true,
                online: true,
                ..
            }
        )
    }

    pub fn vehicle_no(&self) -> Option<&str> {
        match &self.kind {
            IdentityKind::Driver { vehicle_no, .. } => Some(vehicle_no),
            _ => None,
        }
    }

    pub fn earnings(&self) -> Option<f64> {
        match self.kind {
            IdentityKind::Driver { earnings, .. } => Some(earnings),
            _ => None,
        }
    }
}
