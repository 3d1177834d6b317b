//! Error types for whereabouts-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the whereabouts-io crate.
///
/// Only document-level failures are reported here. Individual segments with
/// missing or malformed optional fields are not errors; the classifier skips
/// them.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the timeline file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when the file exists but cannot be read.
    #[error("failed to read {}: {reason}", path.display())]
    Read {
        /// Path that could not be read.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when the document is not valid JSON or has the wrong shape.
    #[error("invalid timeline JSON: {reason}")]
    InvalidJson {
        /// Description of the underlying parse failure.
        reason: String,
    },
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::InvalidJson {
            reason: e.to_string(),
        }
    }
}
