//! # hail-storage
//!
//! JSON snapshot persistence for the hail registry: write the whole
//! state, read the whole state, tolerate absence.

mod store;

pub use store::JsonSnapshotStore;
