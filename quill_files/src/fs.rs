//! Asynchronous wrappers around filesystem primitives.
//!
//! Each operation is an independent unit of work against the OS file
//! system; there is no ordering guarantee between concurrent calls to
//! different paths.

use std::fs::Metadata;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{FileError, FileResult};

/// A directory entry with the metadata the file tree needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    /// Full path of the entry.
    pub path: PathBuf,
    /// File name without the leading directory.
    pub name: String,
    /// Whether the entry itself is a directory (symlinks are not
    /// followed, so a symlink to a directory reports `false`).
    pub is_directory: bool,
}

/// Read an entire file as UTF-8 text.
pub async fn read_file(path: impl AsRef<Path>) -> FileResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).await.map_err(|e| FileError::from_io(path, e))
}

/// Write a string as the entire contents of a file.
pub async fn write_file(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> FileResult<()> {
    let path = path.as_ref();
    fs::write(path, contents.as_ref()).await.map_err(|e| FileError::from_io(path, e))
}

/// List a directory, stat'ing each entry.
///
/// Entry order is whatever the OS returns (not sorted).
pub async fn list_directory(path: impl AsRef<Path>) -> FileResult<Vec<DirEntryInfo>> {
    let path = path.as_ref();
    let mut dir = fs::read_dir(path).await.map_err(|e| FileError::from_io(path, e))?;

    let mut entries = Vec::new();
    while let Some(entry) = dir.next_entry().await.map_err(|e| FileError::from_io(path, e))? {
        let entry_path = entry.path();
        let metadata = fs::symlink_metadata(&entry_path)
            .await
            .map_err(|e| FileError::from_io(&entry_path, e))?;
        entries.push(DirEntryInfo {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_directory: metadata.is_dir(),
            path: entry_path,
        });
    }
    Ok(entries)
}

/// Fetch metadata for a path without following symlinks.
pub async fn stat(path: impl AsRef<Path>) -> FileResult<Metadata> {
    let path = path.as_ref();
    fs::symlink_metadata(path).await.map_err(|e| FileError::from_io(path, e))
}
