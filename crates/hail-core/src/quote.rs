//! Quote generation and display-flavor randomness.
//!
//! Seedable so tests can pin the figures. Only the quoted distance is
//! load-bearing: it fixes the fare at booking time. Nearby distances and
//! ratings are display flavor and are never stored.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// An advisory quote. Nothing is committed until the booking is
/// confirmed or submitted as an open request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quote {
    pub distance_km: f64,
    pub fare: f64,
    pub eta_minutes: u32,
}

/// One line of the available-driver listing shown alongside a quote.
#[derive(Debug, Clone, Serialize)]
pub struct DriverSummary {
    pub name: String,
    pub vehicle_no: String,
    /// Flavor: how far away the driver appears, km.
    pub distance_km: f64,
    /// Flavor: 4.0–5.0 stars.
    pub rating: f64,
}

/// The registry's randomness source.
pub struct QuoteEngine {
    rng: ChaCha8Rng,
}

impl QuoteEngine {
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Fixed-seed engine for deterministic tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Distance 1.0–10.0 km rounded to one decimal, eta 2–10 minutes,
    /// fare = distance × base price.
    pub fn quote(&mut self, base_price_per_km: f64) -> Quote {
        let distance_km = round1(self.rng.gen_range(1.0..=10.0));
        let fare = distance_km * base_price_per_km;
        let eta_minutes = self.rng.gen_range(2..=10);
        Quote {
            distance_km,
            fare,
            eta_minutes,
        }
    }

    /// Flavor: nearby-driver distance, 0.5–5.5 km.
    pub fn nearby_distance_km(&mut self) -> f64 {
        round1(self.rng.gen_range(0.5..=5.5))
    }

    /// Flavor: driver rating, 4.0–5.0.
    pub fn rating(&mut self) -> f64 {
        round1(self.rng.gen_range(4.0..=5.0))
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
