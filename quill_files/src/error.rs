//! Error types for the file access crate.

use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur during file access.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// The path does not exist.
    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The caller lacks permission for the operation.
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// The file was read but does not contain valid JSON.
    #[error("{} is not valid JSON: {source}", path.display())]
    MalformedJson {
        /// Offending file.
        path: PathBuf,
        /// Underlying parser error.
        #[source]
        source: serde_json::Error,
    },

    /// A temporary-file write did not complete within the deadline.
    #[error("timed out saving temporary file with suffix {suffix:?}")]
    Timeout {
        /// Suffix requested for the temporary file.
        suffix: String,
    },

    /// Any other I/O failure.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl FileError {
    /// Map an I/O error onto the taxonomy, attaching the path involved.
    pub(crate) fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FileError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => FileError::PermissionDenied(path.to_path_buf()),
            _ => FileError::Io(err),
        }
    }
}

/// Convenience type alias for file access results.
pub type FileResult<T> = Result<T, FileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_kinds_map_onto_taxonomy() {
        let path = Path::new("/some/file");

        let not_found = io::Error::new(io::ErrorKind::NotFound, "missing");
        assert!(matches!(FileError::from_io(path, not_found), FileError::NotFound(_)));

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "no");
        assert!(matches!(FileError::from_io(path, denied), FileError::PermissionDenied(_)));

        let other = io::Error::new(io::ErrorKind::WriteZero, "short");
        assert!(matches!(FileError::from_io(path, other), FileError::Io(_)));
    }

    #[test]
    fn display_includes_path() {
        let err = FileError::NotFound(PathBuf::from("/tmp/gone.json"));
        assert!(err.to_string().contains("/tmp/gone.json"));

        let err = FileError::Timeout { suffix: ".png".into() };
        assert!(err.to_string().contains(".png"));
    }
}
