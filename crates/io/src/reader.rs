//! Timeline document reader.

use std::path::Path;

use tracing::{debug, info};

use crate::error::IoError;
use crate::timeline::{Segment, TimelineExport};

/// Parse a Timeline export held in memory.
///
/// A document without a `semanticSegments` array (or with `null`) yields an
/// empty list.
///
/// # Errors
///
/// Returns [`IoError::InvalidJson`] if the text is not JSON, the top level is
/// not an object, or a segment has the wrong shape.
pub fn parse_timeline(json: &str) -> Result<Vec<Segment>, IoError> {
    let export: TimelineExport = serde_json::from_str(json)?;
    let segments = export.semantic_segments.unwrap_or_default();
    debug!(
        n_segments = segments.len(),
        n_visits = segments.iter().filter(|s| s.is_visit()).count(),
        "timeline parsed"
    );
    Ok(segments)
}

/// Read a Timeline export from disk.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist,
/// [`IoError::Read`] if it cannot be read, and [`IoError::InvalidJson`] if the
/// contents cannot be parsed.
pub fn read_timeline(path: &Path) -> Result<Vec<Segment>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|e| IoError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let segments = parse_timeline(&text)?;
    info!(path = %path.display(), n_segments = segments.len(), "timeline loaded");
    Ok(segments)
}
