//! Fixed values shared across the workspace.

/// Fresh-start price per kilometer, used when no snapshot exists and the
/// config file does not override it.
pub const DEFAULT_BASE_PRICE_PER_KM: f64 = 8.0;

/// Default snapshot file name.
pub const DEFAULT_DATA_FILE: &str = "hail_data.json";

/// Default config file name.
pub const DEFAULT_CONFIG_FILE: &str = "hail.toml";

// Bootstrap administrator. Created at first startup when no identity with
// the admin role exists in the loaded state. The credentials are fixed and
// documented on purpose; this is a terminal simulator, not a ledger.
pub const DEFAULT_ADMIN_NAME: &str = "System Admin";
pub const DEFAULT_ADMIN_PHONE: &str = "0000000000";
pub const DEFAULT_ADMIN_USERNAME: &str = "adminhemant";
pub const DEFAULT_ADMIN_PASSWORD: &str = "hemant123";
