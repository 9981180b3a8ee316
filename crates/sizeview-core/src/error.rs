//! Error types for root selection and destructive operations.
//!
//! Scanning and listing never raise: per-entry failures degrade to skipped
//! entries or zero-size contributions. The two surfaces that do report
//! errors upward are root selection and deletion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors selecting a scan root.
#[derive(Debug, Error)]
pub enum RootError {
    /// Root path not found.
    #[error("Root path not found: {path}")]
    NotFound { path: PathBuf },

    /// Root path exists but is not a directory.
    #[error("Root path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Other I/O error while validating the root.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RootError {
    /// Create a root error from an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Errors from a delete operation.
///
/// A failed delete leaves both the filesystem object and the tree node in
/// place; the caller must surface this to the user.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// The filesystem removal failed (permission denied, file in use,
    /// path vanished).
    #[error("Failed to delete {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The node handle no longer refers to a node in the tree.
    #[error("Node handle is no longer part of the tree")]
    StaleHandle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_error_io_classification() {
        let err = RootError::io(
            "/missing",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, RootError::NotFound { .. }));

        let err = RootError::io(
            "/locked",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, RootError::Io { .. }));
    }

    #[test]
    fn test_delete_error_display() {
        let err = DeleteError::Io {
            path: PathBuf::from("/data/a.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/data/a.txt"));
    }
}
