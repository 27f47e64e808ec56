//! JSON settings-file reads.
//!
//! [`read_json`] exposes the full error taxonomy; [`read_json_safe`] is
//! the lenient variant for optional settings files, where a missing or
//! corrupt file means "use the defaults".

use std::fs;
use std::path::Path;

use log::warn;
use serde::de::DeserializeOwned;

use crate::error::{FileError, FileResult};

/// Read and parse a JSON file synchronously.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> FileResult<T> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| FileError::from_io(path, e))?;
    serde_json::from_str(&contents)
        .map_err(|source| FileError::MalformedJson { path: path.to_path_buf(), source })
}

/// Read a JSON file, masking every failure.
///
/// An unreadable file yields `None` with no diagnostics (that is the
/// "safe" part); a readable file with malformed content logs a warning
/// before yielding `None`.
pub fn read_json_safe<T: DeserializeOwned>(path: impl AsRef<Path>) -> Option<T> {
    match read_json(path.as_ref()) {
        Ok(value) => Some(value),
        Err(err @ FileError::MalformedJson { .. }) => {
            warn!("{err}");
            None
        },
        Err(_) => None,
    }
}
