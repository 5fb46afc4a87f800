//! In-memory `SnapshotStore` implementations for tests.

use std::cell::RefCell;

use crate::errors::{SnapshotError, SnapshotResult};
use crate::snapshot::RegistrySnapshot;

use super::snapshot_store::SnapshotStore;

/// Keeps the last saved snapshot in memory and counts saves, so tests
/// can assert the persist-after-every-mutation contract.
#[derive(Default)]
pub struct MemorySnapshotStore {
    saved: RefCell<Option<RegistrySnapshot>>,
    save_count: RefCell<usize>,
}

impl MemorySnapshotStore {
    /// A store preloaded with a snapshot, as if a prior run had saved it.
    pub fn preloaded(snapshot: RegistrySnapshot) -> Self {
        Self {
            saved: RefCell::new(Some(snapshot)),
            save_count: RefCell::new(0),
        }
    }

    pub fn saves(&self) -> usize {
        *self.save_count.borrow()
    }

    pub fn last_saved(&self) -> Option<RegistrySnapshot> {
        self.saved.borrow().clone()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn save(&self, snapshot: &RegistrySnapshot) -> SnapshotResult<()> {
        *self.saved.borrow_mut() = Some(snapshot.clone());
        *self.save_count.borrow_mut() += 1;
        Ok(())
    }

    fn load(&self) -> SnapshotResult<Option<RegistrySnapshot>> {
        Ok(self.saved.borrow().clone())
    }
}

/// Fails every save; exercises the weak-durability warning path.
pub struct FailingSnapshotStore;

impl SnapshotStore for FailingSnapshotStore {
    fn save(&self, _snapshot: &RegistrySnapshot) -> SnapshotResult<()> {
        Err(SnapshotError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "save disabled",
        )))
    }

    fn load(&self) -> SnapshotResult<Option<RegistrySnapshot>> {
        Ok(None)
    }
}

/// Returns an unreadable snapshot; exercises the degrade-to-fresh path.
pub struct CorruptSnapshotStore;

impl SnapshotStore for CorruptSnapshotStore {
    fn save(&self, _snapshot: &RegistrySnapshot) -> SnapshotResult<()> {
        Ok(())
    }

    fn load(&self) -> SnapshotResult<Option<RegistrySnapshot>> {
        Err(SnapshotError::Decode {
            message: "unreadable snapshot".to_string(),
        })
    }
}
