//! JSON export writer
//!
//! Serializes the snapshot to the configured path. A failure here is
//! terminal for the export step only; the caller's in-memory state is
//! untouched.

use crate::output::snapshot::ExportSnapshot;
use std::path::Path;
use thiserror::Error;

/// Errors from writing the export file
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write export file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Writes the snapshot as pretty-printed JSON to `path`
pub fn write_snapshot(snapshot: &ExportSnapshot, path: &Path) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(snapshot)?;

    std::fs::write(path, json).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;

    tracing::info!("Results exported to {}", path.display());
    Ok(())
}
