//! Project store error types.
//!
//! Every store operation returns a structured error that provides a
//! user-friendly message and an optional remediation hint.

use std::path::PathBuf;
use thiserror::Error;

use crate::xml::XmlError;

/// Broad failure category of a [`ProjectError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectErrorKind {
    /// The file could not be read or written.
    Io,
    /// The content is not well-formed XML.
    Malformed,
    /// Well-formed XML that is not a project document.
    SchemaMismatch,
    /// A group name was missing or already taken.
    Logical,
}

/// Project store operation error.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not well-formed XML.
    #[error("Malformed project document: {path}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: XmlError,
    },

    /// The document root is not `Project`.
    #[error("Expected root element <Project>, found <{found}>: {path}")]
    UnexpectedRoot { path: PathBuf, found: String },

    /// The in-memory groups could not be rendered.
    #[error("Failed to serialize project data")]
    Serialization {
        #[source]
        source: XmlError,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `save()` was called before any path was loaded or saved.
    #[error("Project has no file path yet")]
    NoCurrentPath,

    /// A group with this name already exists.
    #[error("Swath group '{name}' already exists")]
    DuplicateGroup { name: String },

    /// No group with this name exists.
    #[error("Swath group '{name}' not found")]
    GroupNotFound { name: String },
}

impl ProjectError {
    /// Wrap a document-level error raised while loading `path`.
    pub(crate) fn from_document(path: impl Into<PathBuf>, error: XmlError) -> Self {
        let path = path.into();
        match error {
            XmlError::UnexpectedRoot { found, .. } => Self::UnexpectedRoot { path, found },
            source => Self::Malformed { path, source },
        }
    }

    /// Failure category, for callers that only need the taxonomy.
    pub fn kind(&self) -> ProjectErrorKind {
        match self {
            Self::Io { .. } | Self::AtomicWriteFailed { .. } | Self::NoCurrentPath => {
                ProjectErrorKind::Io
            }
            Self::Malformed { .. } | Self::Serialization { .. } => ProjectErrorKind::Malformed,
            Self::UnexpectedRoot { .. } => ProjectErrorKind::SchemaMismatch,
            Self::DuplicateGroup { .. } | Self::GroupNotFound { .. } => ProjectErrorKind::Logical,
        }
    }

    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::Malformed { path, source } => {
                format!(
                    "The file at {} is not a well-formed XML document: {}",
                    path.display(),
                    source
                )
            }
            Self::UnexpectedRoot { path, found } => {
                format!(
                    "The file at {} is not a swath project (root element is <{}>).",
                    path.display(),
                    found
                )
            }
            Self::Serialization { .. } => {
                "An error occurred while preparing the project data for saving.".to_string()
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the file to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
            Self::NoCurrentPath => {
                "This project has not been saved yet, so there is no file to save to.".to_string()
            }
            Self::DuplicateGroup { name } => {
                format!("A swath group named '{name}' already exists in this project.")
            }
            Self::GroupNotFound { name } => {
                format!("There is no swath group named '{name}' in this project.")
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::Malformed { .. } => Some("Try opening a backup if you have one.".into()),
            Self::UnexpectedRoot { .. } => {
                Some("Make sure you selected a swath project file.".into())
            }
            Self::Serialization { .. } => None,
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or try saving to a different location.".into())
            }
            Self::NoCurrentPath => Some("Use \"save as\" to choose a file first.".into()),
            Self::DuplicateGroup { .. } => Some("Choose a different group name.".into()),
            Self::GroupNotFound { .. } => None,
        }
    }
}

/// Result type alias for project store operations.
pub type Result<T> = std::result::Result<T, ProjectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_root_is_schema_mismatch() {
        let error = ProjectError::from_document(
            "a.xml",
            XmlError::UnexpectedRoot {
                expected: "Project",
                found: "Workspace".to_string(),
            },
        );
        assert!(matches!(error, ProjectError::UnexpectedRoot { ref found, .. } if found == "Workspace"));
        assert_eq!(error.kind(), ProjectErrorKind::SchemaMismatch);
    }

    #[test]
    fn other_document_errors_are_malformed() {
        let error = ProjectError::from_document("a.xml", XmlError::MissingRoot);
        assert_eq!(error.kind(), ProjectErrorKind::Malformed);
        assert!(error.user_message().contains("a.xml"));
    }

    #[test]
    fn crud_errors_are_logical() {
        let duplicate = ProjectError::DuplicateGroup {
            name: "G".to_string(),
        };
        let missing = ProjectError::GroupNotFound {
            name: "G".to_string(),
        };
        assert_eq!(duplicate.kind(), ProjectErrorKind::Logical);
        assert_eq!(missing.kind(), ProjectErrorKind::Logical);
        assert!(duplicate.suggestion().is_some());
        assert!(missing.suggestion().is_none());
    }

    #[test]
    fn io_suggestion_depends_on_operation() {
        let read = ProjectError::Io {
            operation: "read",
            path: PathBuf::from("a.xml"),
            source: std::io::Error::other("boom"),
        };
        let write = ProjectError::Io {
            operation: "create",
            path: PathBuf::from("a.xml"),
            source: std::io::Error::other("boom"),
        };
        assert!(read.suggestion().unwrap().contains("read"));
        assert!(write.suggestion().unwrap().contains("write"));
        assert_eq!(read.user_message(), "Could not read the file at a.xml");
    }
}
