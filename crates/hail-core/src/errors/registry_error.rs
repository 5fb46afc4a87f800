//! Registry operation failures.
//! Every failure leaves the registry unmutated.

use super::error_code::{self, HailErrorCode};

/// Errors reported by registry operations, grouped by failure class:
/// validation, not-found, and precondition.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    // Validation
    #[error("Username already exists: {0}")]
    UsernameExists(String),

    #[error("Invalid base price: {0} (must be positive)")]
    InvalidPrice(f64),

    #[error("UPI payment requires a UPI id")]
    InvalidUpiId,

    // Not found
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Driver not found: {0}")]
    DriverNotFound(String),

    #[error("Ride not found: {0}")]
    RideNotFound(String),

    // Preconditions
    #[error("No drivers available")]
    NoDriversAvailable,

    #[error("Driver not approved: {0}")]
    DriverNotApproved(String),

    #[error("Driver must be approved and online: {0}")]
    DriverNotEligible(String),

    #[error("Ride {0} is not an open request")]
    RideNotOpen(String),

    #[error("Ride {0} is not ongoing")]
    RideNotOngoing(String),

    #[error("Ride {ride} does not belong to {username}")]
    NotRideOwner { ride: String, username: String },

    #[error("{username} is not a {expected}")]
    WrongRole {
        username: String,
        expected: &'static str,
    },
}

impl HailErrorCode for RegistryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UsernameExists(_) => error_code::USERNAME_EXISTS,
            Self::InvalidPrice(_) => error_code::INVALID_PRICE,
            Self::InvalidUpiId => error_code::INVALID_UPI_ID,
            Self::InvalidCredentials => error_code::INVALID_CREDENTIALS,
            Self::UserNotFound(_) => error_code::USER_NOT_FOUND,
            Self::DriverNotFound(_) => error_code::DRIVER_NOT_FOUND,
            Self::RideNotFound(_) => error_code::RIDE_NOT_FOUND,
            Self::NoDriversAvailable => error_code::NO_DRIVERS_AVAILABLE,
            Self::DriverNotApproved(_) => error_code::DRIVER_NOT_APPROVED,
            Self::DriverNotEligible(_) => error_code::DRIVER_NOT_ELIGIBLE,
            Self::RideNotOpen(_) => error_code::RIDE_NOT_OPEN,
            Self::RideNotOngoing(_) => error_code::RIDE_NOT_ONGOING,
            Self::NotRideOwner { .. } => error_code::NOT_RIDE_OWNER,
            Self::WrongRole { .. } => error_code::WRONG_ROLE,
        }
    }
}

pub type RegistryResult<T> = Result<T, RegistryError>;
