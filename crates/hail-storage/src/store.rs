//! File-backed `SnapshotStore`.
//!
//! One JSON document per save, overwriting the prior snapshot in place.
//! There is no atomic rename or checksum at this layer; a crash mid-write
//! can corrupt the file, and the registry degrades to a fresh start when
//! a snapshot is unreadable.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use hail_core::errors::{SnapshotError, SnapshotResult};
use hail_core::snapshot::RegistrySnapshot;
use hail_core::traits::SnapshotStore;

/// Stores the registry snapshot as a single JSON file.
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn save(&self, snapshot: &RegistrySnapshot) -> SnapshotResult<()> {
        let json = serde_json::to_string_pretty(snapshot).map_err(|e| SnapshotError::Encode {
            message: e.to_string(),
        })?;
        fs::write(&self.path, json)?;
        debug!(
            path = %self.path.display(),
            identities = snapshot.identities.len(),
            rides = snapshot.rides.len(),
            "Snapshot written"
        );
        Ok(())
    }

    fn load(&self) -> SnapshotResult<Option<RegistrySnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let snapshot = serde_json::from_str(&raw).map_err(|e| SnapshotError::Decode {
            message: e.to_string(),
        })?;
        Ok(Some(snapshot))
    }
}
