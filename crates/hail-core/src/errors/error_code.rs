//! Stable error codes for front-end dispatch.
//! Presentation layers match on these instead of parsing display strings.

pub const USERNAME_EXISTS: &str = "USERNAME_EXISTS";
pub const INVALID_PRICE: &str = "INVALID_PRICE";
pub const INVALID_UPI_ID: &str = "INVALID_UPI_ID";
pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
pub const USER_NOT_FOUND: &str = "USER_NOT_FOUND";
pub const DRIVER_NOT_FOUND: &str = "DRIVER_NOT_FOUND";
pub const RIDE_NOT_FOUND: &str = "RIDE_NOT_FOUND";
pub const NO_DRIVERS_AVAILABLE: &str = "NO_DRIVERS_AVAILABLE";
pub const DRIVER_NOT_APPROVED: &str = "DRIVER_NOT_APPROVED";
pub const DRIVER_NOT_ELIGIBLE: &str = "DRIVER_NOT_ELIGIBLE";
pub const RIDE_NOT_OPEN: &str = "RIDE_NOT_OPEN";
pub const RIDE_NOT_ONGOING: &str = "RIDE_NOT_ONGOING";
pub const NOT_RIDE_OWNER: &str = "NOT_RIDE_OWNER";
pub const WRONG_ROLE: &str = "WRONG_ROLE";
pub const SNAPSHOT_IO: &str = "SNAPSHOT_IO";
pub const SNAPSHOT_ENCODE: &str = "SNAPSHOT_ENCODE";
pub const SNAPSHOT_DECODE: &str = "SNAPSHOT_DECODE";
pub const CONFIG_IO: &str = "CONFIG_IO";
pub const CONFIG_PARSE: &str = "CONFIG_PARSE";

/// Maps every error variant to a stable string code.
pub trait HailErrorCode {
    fn error_code(&self) -> &'static str;
}
