//! Temporary-file persistence with tracked cleanup.
//!
//! Temporary files created here stay on disk until [`cleanup_tracked`]
//! runs; the embedding application calls it once during shutdown.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use once_cell::sync::Lazy;
use tempfile::TempPath;

use crate::error::{FileError, FileResult};

/// Hard deadline for a temporary-file write.
const SAVE_DEADLINE: Duration = Duration::from_secs(10);

/// Temp paths kept alive until cleanup; dropping a `TempPath` deletes
/// the file behind it.
static TRACKED: Lazy<Mutex<Vec<TempPath>>> = Lazy::new(|| Mutex::new(Vec::new()));

fn tracked() -> MutexGuard<'static, Vec<TempPath>> {
    TRACKED.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Write `data` to a freshly created temporary file whose name ends with
/// `suffix` and return its path.
///
/// Fails with [`FileError::Timeout`] if the write does not complete
/// within 10 seconds; the half-written file is deleted in that case.
/// On success the file is registered for removal by [`cleanup_tracked`].
pub async fn save_to_temporary_file(suffix: &str, data: impl AsRef<[u8]>) -> FileResult<PathBuf> {
    let file = tempfile::Builder::new().suffix(suffix).tempfile()?;
    let temp_path = file.into_temp_path();

    let write = tokio::fs::write(&*temp_path, data.as_ref());
    match tokio::time::timeout(SAVE_DEADLINE, write).await {
        Ok(result) => result.map_err(|e| FileError::from_io(&temp_path, e))?,
        Err(_) => return Err(FileError::Timeout { suffix: suffix.to_string() }),
    }

    let path = temp_path.to_path_buf();
    tracked().push(temp_path);
    Ok(path)
}

/// Delete every tracked temporary file.
pub fn cleanup_tracked() {
    tracked().clear();
}

/// Number of temporary files currently tracked.
pub fn tracked_count() -> usize {
    tracked().len()
}
