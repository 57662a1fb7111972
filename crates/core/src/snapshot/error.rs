//! Snapshot error types.

use thiserror::Error;

/// Errors that can occur while reading snapshots from JSON.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The text is not valid JSON.
    #[error("Invalid snapshot JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The top-level value is neither an object nor an array of objects.
    #[error("Snapshot must be a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// An element of a snapshot array is not an object.
    #[error("Snapshot at index {index} must be a JSON object, found {found}")]
    ItemNotAnObject {
        /// Position in the array.
        index: usize,
        /// JSON type found instead.
        found: &'static str,
    },
}
