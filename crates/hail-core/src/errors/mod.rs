//! Error types, one enum per layer.
//! Nothing here is fatal to the process; the presentation loop reports
//! every failure and continues.

pub mod error_code;

mod config_error;
mod registry_error;
mod snapshot_error;

pub use config_error::{ConfigError, ConfigResult};
pub use registry_error::{RegistryError, RegistryResult};
pub use snapshot_error::{SnapshotError, SnapshotResult};
