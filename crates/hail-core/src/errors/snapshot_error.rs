//! Persistence-boundary errors.

use super::error_code::{self, HailErrorCode};

/// Errors crossing the snapshot store seam. The registry treats load
/// failures as "no snapshot" and logs save failures without rolling back.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot encode failed: {message}")]
    Encode { message: String },

    #[error("Snapshot decode failed: {message}")]
    Decode { message: String },
}

impl HailErrorCode for SnapshotError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => error_code::SNAPSHOT_IO,
            Self::Encode { .. } => error_code::SNAPSHOT_ENCODE,
            Self::Decode { .. } => error_code::SNAPSHOT_DECODE,
        }
    }
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;
