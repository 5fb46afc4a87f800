//! Ride entity and its lifecycle states.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::RideId;

/// Ride lifecycle. Status only moves forward:
/// Requested → Ongoing → Completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RideStatus {
    Requested,
    Ongoing,
    Completed,
    /// Reserved. No operation currently produces it.
    Cancelled,
}

impl RideStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requested => "REQUESTED",
            Self::Ongoing => "ONGOING",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "UPI")]
    Upi,
    Cash,
    Wallet,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upi => "UPI",
            Self::Cash => "Cash",
            Self::Wallet => "Wallet",
        }
    }
}

/// One trip record, booking through payment/completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ride {
    pub id: RideId,
    pub pickup: String,
    pub dropoff: String,
    /// Fixed at booking time, never recomputed.
    pub distance_km: f64,
    /// distance × base price at booking time, fixed thereafter.
    pub fare: f64,
    /// Decorative estimate shown to the rider.
    pub eta_minutes: u32,
    pub status: RideStatus,
    /// Requesting rider's username. Set at creation, immutable.
    pub rider: String,
    /// Assigned driver's username; at most one for the ride's lifetime.
    pub driver: Option<String>,
    pub booked_at: DateTime<Utc>,
    /// Set iff status is Completed.
    pub completed_at: Option<DateTime<Utc>>,
    pub payment: Option<PaymentMethod>,
    /// Only meaningful when payment is UPI.
    pub upi_id: Option<String>,
}

impl Ride {
    /// A fresh ride in the Requested state with no driver.
    pub fn new(
        id: RideId,
        pickup: &str,
        dropoff: &str,
        distance_km: f64,
        fare: f64,
        eta_minutes: u32,
        rider: &str,
    ) -> Self {
        Self {
            id,
            pickup: pickup.to_string(),
            dropoff: dropoff.to_string(),
            distance_km,
            fare,
            eta_minutes,
            status: RideStatus::Requested,
            rider: rider.to_string(),
            driver: None,
            booked_at: Utc::now(),
            completed_at: None,
            payment: None,
            upi_id: None,
        }
    }

    /// In the open-request pool: requested and driverless.
    pub fn is_open_request(&self) -> bool {
        self.status == RideStatus::Requested && self.driver.is_none()
    }
}
