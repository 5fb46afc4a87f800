//! # hail-core
//!
//! Foundation crate for the hail ride-hailing simulator.
//! Defines the identity and ride models, the registry and matching engine,
//! errors, config, the quote engine, and the snapshot contract.
//! The storage crate and any front end depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod quote;
pub mod registry;
pub mod snapshot;
pub mod telemetry;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::HailConfig;
pub use errors::error_code::HailErrorCode;
pub use errors::{RegistryError, RegistryResult, SnapshotError, SnapshotResult};
pub use models::identity::{Identity, IdentityKind, Role};
pub use models::receipt::ReceiptFields;
pub use models::ride::{PaymentMethod, Ride, RideStatus};
pub use quote::{DriverSummary, Quote, QuoteEngine};
pub use registry::Registry;
pub use snapshot::RegistrySnapshot;
pub use traits::SnapshotStore;
pub use types::identifiers::RideId;
