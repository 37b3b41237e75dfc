/// Errors from the directory traversal layer.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving a root or walking a directory tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The supplied root does not name an existing directory.
    #[error("The provided path is not a valid directory.")]
    InvalidRootPath {
        /// The path as the user supplied it (after trimming).
        path: String,
    },

    /// Listing a directory failed mid-walk (permission denied, removed, ...).
    #[error("cannot read directory '{}': {source}", path.display())]
    FilesystemAccess {
        /// Directory whose listing failed.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// Writing to the output stream failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    /// Reading the root path from the input stream failed.
    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),
}

impl TreeError {
    /// Return the CLI exit code for this error.
    ///
    /// An invalid root is reported as a plain message and is not a failure.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidRootPath { .. } => 0,
            Self::FilesystemAccess { .. } | Self::Output(_) | Self::Input(_) => 1,
        }
    }

    /// Machine-readable error code (snake_case) used in the JSON envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidRootPath { .. } => "invalid_root_path",
            Self::FilesystemAccess { .. } => "filesystem_access",
            Self::Output(_) => "output_failed",
            Self::Input(_) => "input_failed",
        }
    }

    /// The filesystem path this error concerns, if any.
    #[must_use]
    pub fn path(&self) -> Option<String> {
        match self {
            Self::InvalidRootPath { path } => Some(path.clone()),
            Self::FilesystemAccess { path, .. } => Some(path.display().to_string()),
            Self::Output(_) | Self::Input(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_root_message_is_fixed() {
        let err = TreeError::InvalidRootPath {
            path: "/nope".to_owned(),
        };
        assert_eq!(err.to_string(), "The provided path is not a valid directory.");
        assert_eq!(err.exit_code(), 0);
        assert_eq!(err.path().as_deref(), Some("/nope"));
    }

    #[test]
    fn test_filesystem_access_mentions_path_and_cause() {
        let err = TreeError::FilesystemAccess {
            path: PathBuf::from("/srv/locked"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        };
        assert_eq!(
            err.to_string(),
            "cannot read directory '/srv/locked': Permission denied"
        );
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.code(), "filesystem_access");
    }

    #[test]
    fn test_write_failures_convert_into_output() {
        let err: TreeError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, TreeError::Output(_)));
        assert_eq!(err.code(), "output_failed");
    }
}
