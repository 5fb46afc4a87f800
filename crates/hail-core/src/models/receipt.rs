//! Receipt field assembly.
//!
//! The core supplies rendered-ready strings; layout is the front end's
//! job. Placeholders below are the documented resolutions for missing
//! participants and pending payment.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Shown when a ride has no assigned driver (driver and vehicle fields).
pub const UNASSIGNED: &str = "unassigned";
/// Shown when a participant's identity was removed from the registry.
pub const REMOVED_USER: &str = "removed user";
/// Shown while no payment has been recorded.
pub const PAYMENT_PENDING: &str = "pending";

/// The fixed field set a front end needs to render a receipt.
#[derive(Debug, Clone, Serialize)]
pub struct ReceiptFields {
    pub ride_id: String,
    pub rider: String,
    pub driver: String,
    pub vehicle: String,
    pub pickup: String,
    pub dropoff: String,
    pub distance_km: f64,
    pub fare: f64,
    pub eta_minutes: u32,
    pub status: &'static str,
    pub payment: String,
    pub booked_at: DateTime<Utc>,
}
