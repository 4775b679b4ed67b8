//! Project loading operations.

use std::fs;
use std::path::Path;

use swath_model::SwathGroup;

use crate::error::{ProjectError, Result};
use crate::xml::{XmlError, parse_project};

/// Read and parse a project document.
///
/// The file handle is closed before parsing starts.
pub fn read_project(path: &Path) -> Result<Vec<SwathGroup>> {
    let bytes = fs::read(path).map_err(|e| ProjectError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;

    let text = std::str::from_utf8(&bytes)
        .map_err(|e| ProjectError::from_document(path, XmlError::Utf8(e)))?;

    let groups = parse_project(text).map_err(|e| ProjectError::from_document(path, e))?;

    tracing::debug!("Parsed {} swath groups from {}", groups.len(), path.display());
    Ok(groups)
}
