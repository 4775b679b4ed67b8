//! Project saving operations.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use swath_model::SwathGroup;

use crate::error::{ProjectError, Result};
use crate::xml::render_project;

/// Save groups as a project document.
///
/// The whole document is rendered in memory first, then written with an
/// atomic write (temp file + rename) so a crash never leaves a truncated
/// project behind.
pub fn write_project(groups: &[SwathGroup], path: &Path) -> Result<()> {
    let bytes = render_project(groups).map_err(|e| ProjectError::Serialization { source: e })?;

    let temp_path = temp_path_for(path)?;

    // Create parent directory if needed
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| ProjectError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    if let Err(e) = write_synced(&temp_path, &bytes) {
        discard_temp(&temp_path);
        return Err(e);
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        // The target is untouched; don't leave the temp file lying around.
        discard_temp(&temp_path);
        return Err(ProjectError::AtomicWriteFailed {
            temp_path,
            target_path: path.to_path_buf(),
            source: e,
        });
    }

    tracing::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

fn write_synced(temp_path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(temp_path).map_err(|e| ProjectError::Io {
        operation: "create",
        path: temp_path.to_path_buf(),
        source: e,
    })?;

    file.write_all(bytes).map_err(|e| ProjectError::Io {
        operation: "write",
        path: temp_path.to_path_buf(),
        source: e,
    })?;

    file.sync_all().map_err(|e| ProjectError::Io {
        operation: "sync",
        path: temp_path.to_path_buf(),
        source: e,
    })
}

/// Best-effort removal of a temp file that will never be renamed.
/// Only regular files are removed.
fn discard_temp(temp_path: &Path) {
    if fs::symlink_metadata(temp_path).is_ok_and(|meta| meta.is_file()) {
        let _ = fs::remove_file(temp_path);
    }
}

/// Sibling temp file: `survey.iqproj` -> `survey.iqproj.tmp`.
fn temp_path_for(path: &Path) -> Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| ProjectError::Io {
        operation: "create",
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
    })?;
    let mut temp_name = OsString::from(file_name);
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}
