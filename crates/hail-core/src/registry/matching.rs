//! Ride booking, matching, and lifecycle transitions.
//!
//! Two paths create a ride: a confirmed booking (driver chosen up front,
//! ride starts Ongoing) and an open request (no driver, ride waits in the
//! pool for an eligible driver to accept). Two paths complete one: the
//! driver marks it done, or the rider pays. Both completion paths require
//! the ride to be Ongoing, so the fare is credited exactly once.

use chrono::Utc;
use tracing::info;

use crate::errors::{RegistryError, RegistryResult};
use crate::models::identity::{Identity, IdentityKind, Role};
use crate::models::receipt::{ReceiptFields, PAYMENT_PENDING, REMOVED_USER, UNASSIGNED};
use crate::models::ride::{PaymentMethod, Ride, RideStatus};
use crate::quote::{DriverSummary, Quote};
use crate::types::identifiers::RideId;

use super::Registry;

impl Registry {
    /// Advisory quote plus the driver listing offered for selection.
    /// Fails before any selection is offered when no driver is available;
    /// no ride is created either way.
    pub fn book_ride(&mut self, rider: &str) -> RegistryResult<(Quote, Vec<DriverSummary>)> {
        self.expect_rider(rider)?;
        let drivers = self.driver_display_names();
        if drivers.is_empty() {
            return Err(RegistryError::NoDriversAvailable);
        }
        let base_price = self.base_price_per_km;
        let quote = self.quotes.quote(base_price);
        Ok((quote, self.summarize(drivers)))
    }

    /// The "view nearby drivers" listing: available drivers with flavor
    /// distance and rating figures. Empty when nobody is available.
    pub fn nearby_drivers(&mut self) -> Vec<DriverSummary> {
        let drivers = self.driver_display_names();
        self.summarize(drivers)
    }

    /// Commit a booking with a driver chosen from the quote listing. The
    /// ride starts Ongoing and is linked into both participants' lists.
    pub fn confirm_booking(
        &mut self,
        rider: &str,
        pickup: &str,
        dropoff: &str,
        quote: &Quote,
        driver: &str,
    ) -> RegistryResult<RideId> {
        self.expect_rider(rider)?;
        self.expect_eligible_driver(driver)?;

        let id = self.next_ride_id();
        let mut ride = Ride::new(
            id.clone(),
            pickup,
            dropoff,
            quote.distance_km,
            quote.fare,
            quote.eta_minutes,
            rider,
        );
        ride.driver = Some(driver.to_string());
        ride.status = RideStatus::Ongoing;
        self.insert_ride(ride);
        self.push_history(rider, &id);
        self.push_assigned(driver, &id);
        self.persist();
        info!(ride = %id, rider, driver, "Ride booked with driver");
        Ok(id)
    }

    /// Submit an open request: no driver yet, visible in the pool until
    /// an eligible driver accepts.
    pub fn request_ride(
        &mut self,
        rider: &str,
        pickup: &str,
        dropoff: &str,
        quote: &Quote,
    ) -> RegistryResult<RideId> {
        self.expect_rider(rider)?;

        let id = self.next_ride_id();
        let ride = Ride::new(
            id.clone(),
            pickup,
            dropoff,
            quote.distance_km,
            quote.fare,
            quote.eta_minutes,
            rider,
        );
        self.insert_ride(ride);
        self.push_history(rider, &id);
        self.persist();
        info!(ride = %id, rider, "Ride requested");
        Ok(id)
    }

    /// An approved, online driver takes a ride from the open pool.
    pub fn accept_ride(&mut self, driver: &str, ride_id: &RideId) -> RegistryResult<()> {
        self.expect_eligible_driver(driver)?;
        let slot = self.ride_slot(ride_id)?;
        if !self.rides[slot].is_open_request() {
            return Err(RegistryError::RideNotOpen(ride_id.to_string()));
        }
        self.rides[slot].driver = Some(driver.to_string());
        self.rides[slot].status = RideStatus::Ongoing;
        self.push_assigned(driver, ride_id);
        self.persist();
        info!(ride = %ride_id, driver, "Ride accepted");
        Ok(())
    }

    /// The assigned driver marks the ride complete; the fare is credited
    /// to them. A second completion attempt fails with no state change.
    pub fn complete_ride(&mut self, driver: &str, ride_id: &RideId) -> RegistryResult<()> {
        let slot = self.ride_slot(ride_id)?;
        {
            let ride = &self.rides[slot];
            if ride.driver.as_deref() != Some(driver) {
                return Err(RegistryError::NotRideOwner {
                    ride: ride_id.to_string(),
                    username: driver.to_string(),
                });
            }
            if ride.status != RideStatus::Ongoing {
                return Err(RegistryError::RideNotOngoing(ride_id.to_string()));
            }
        }
        let fare = self.rides[slot].fare;
        self.rides[slot].status = RideStatus::Completed;
        self.rides[slot].completed_at = Some(Utc::now());
        self.credit_driver(driver, fare);
        self.persist();
        info!(ride = %ride_id, driver, fare, "Ride completed by driver");
        Ok(())
    }

    /// The rider pays for an ongoing ride, completing it. Alternate
    /// completion path; the Ongoing guard keeps crediting exactly-once.
    pub fn pay_for_ride(
        &mut self,
        rider: &str,
        ride_id: &RideId,
        method: PaymentMethod,
        upi_id: Option<&str>,
    ) -> RegistryResult<()> {
        let slot = self.ride_slot(ride_id)?;
        {
            let ride = &self.rides[slot];
            if ride.rider != rider {
                return Err(RegistryError::NotRideOwner {
                    ride: ride_id.to_string(),
                    username: rider.to_string(),
                });
            }
            if ride.status != RideStatus::Ongoing {
                return Err(RegistryError::RideNotOngoing(ride_id.to_string()));
            }
        }
        let upi_id = match method {
            PaymentMethod::Upi => Some(
                upi_id
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .ok_or(RegistryError::InvalidUpiId)?
                    .to_string(),
            ),
            _ => None,
        };

        let fare = self.rides[slot].fare;
        let assigned_driver = self.rides[slot].driver.clone();
        self.rides[slot].payment = Some(method);
        self.rides[slot].upi_id = upi_id;
        self.rides[slot].status = RideStatus::Completed;
        self.rides[slot].completed_at = Some(Utc::now());
        if let Some(driver) = &assigned_driver {
            self.credit_driver(driver, fare);
        }
        self.persist();
        info!(ride = %ride_id, rider, method = method.as_str(), fare, "Ride paid");
        Ok(())
    }

    /// Receipt fields for any ride, with documented placeholders for
    /// removed participants and pending payment.
    pub fn receipt(&self, ride_id: &RideId) -> RegistryResult<ReceiptFields> {
        let ride = self
            .ride(ride_id)
            .ok_or_else(|| RegistryError::RideNotFound(ride_id.to_string()))?;

        let rider = match self.identity(&ride.rider) {
            Some(identity) => identity.name.clone(),
            None => REMOVED_USER.to_string(),
        };
        let (driver, vehicle) = match &ride.driver {
            None => (UNASSIGNED.to_string(), UNASSIGNED.to_string()),
            Some(username) => match self.identity(username) {
                Some(identity) => (
                    identity.name.clone(),
                    identity.vehicle_no().unwrap_or(UNASSIGNED).to_string(),
                ),
                None => (REMOVED_USER.to_string(), REMOVED_USER.to_string()),
            },
        };
        let payment = ride
            .payment
            .map(|p| p.as_str().to_string())
            .unwrap_or_else(|| PAYMENT_PENDING.to_string());

        Ok(ReceiptFields {
            ride_id: ride.id.to_string(),
            rider,
            driver,
            vehicle,
            pickup: ride.pickup.clone(),
            dropoff: ride.dropoff.clone(),
            distance_km: ride.distance_km,
            fare: ride.fare,
            eta_minutes: ride.eta_minutes,
            status: ride.status.as_str(),
            payment,
            booked_at: ride.booked_at,
        })
    }

    // ─── Eligibility ────────────────────────────────────────────────────

    fn expect_rider(&self, username: &str) -> RegistryResult<&Identity> {
        let identity = self
            .identity(username)
            .ok_or_else(|| RegistryError::UserNotFound(username.to_string()))?;
        if identity.role() != Role::Rider {
            return Err(RegistryError::WrongRole {
                username: username.to_string(),
                expected: "rider",
            });
        }
        Ok(identity)
    }

    fn expect_eligible_driver(&self, username: &str) -> RegistryResult<()> {
        let identity = self
            .identity(username)
            .ok_or_else(|| RegistryError::DriverNotFound(username.to_string()))?;
        match identity.kind {
            IdentityKind::Driver {
                approved, online, ..
            } => {
                if approved && online {
                    Ok(())
                } else {
                    Err(RegistryError::DriverNotEligible(username.to_string()))
                }
            }
            _ => Err(RegistryError::DriverNotFound(username.to_string())),
        }
    }

    fn driver_display_names(&self) -> Vec<(String, String)> {
        self.available_drivers()
            .iter()
            .map(|d| {
                (
                    d.name.clone(),
                    d.vehicle_no().unwrap_or_default().to_string(),
                )
            })
            .collect()
    }

    fn summarize(&mut self, drivers: Vec<(String, String)>) -> Vec<DriverSummary> {
        drivers
            .into_iter()
            .map(|(name, vehicle_no)| DriverSummary {
                name,
                vehicle_no,
                distance_km: self.quotes.nearby_distance_km(),
                rating: self.quotes.rating(),
            })
            .collect()
    }
}
