//! Persistence contract for the registry snapshot.

use std::rc::Rc;

use crate::errors::SnapshotResult;
use crate::snapshot::RegistrySnapshot;

/// Whole-snapshot persistence: write everything, read everything,
/// tolerate absence. Implemented by `hail-storage`.
pub trait SnapshotStore {
    /// Overwrite the durable snapshot.
    fn save(&self, snapshot: &RegistrySnapshot) -> SnapshotResult<()>;

    /// Read the durable snapshot. `Ok(None)` when none exists.
    fn load(&self) -> SnapshotResult<Option<RegistrySnapshot>>;
}

// Lets tests keep a handle on a store after handing it to the registry.
impl<S: SnapshotStore + ?Sized> SnapshotStore for Rc<S> {
    fn save(&self, snapshot: &RegistrySnapshot) -> SnapshotResult<()> {
        (**self).save(snapshot)
    }

    fn load(&self) -> SnapshotResult<Option<RegistrySnapshot>> {
        (**self).load()
    }
}
