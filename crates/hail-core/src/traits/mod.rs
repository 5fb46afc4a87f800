//! Seams between the core and its collaborators.

pub mod snapshot_store;
pub mod test_helpers;

pub use snapshot_store::SnapshotStore;
