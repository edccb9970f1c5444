//! Handling for uploaded audio files.
//!
//! Uploaded audio lands on disk only long enough to be shipped to the
//! transcription API. [`TempUpload`] owns the on-disk file and removes it when
//! dropped, so every exit path out of the transcription flow, including the
//! failing ones, cleans up after itself.

use crate::error::{DomainErrorKind, Error, InternalErrorKind};
use chrono::Utc;
use log::*;
use std::path::{Path, PathBuf};

/// An uploaded file written below the configured upload directory.
///
/// The file is deleted when the value is dropped.
#[derive(Debug)]
pub struct TempUpload {
    path: PathBuf,
}

impl TempUpload {
    /// Write `bytes` to a fresh file under `upload_dir`, creating the directory
    /// if needed.
    ///
    /// The file name is the client supplied name prefixed with the upload time in
    /// milliseconds, so repeated uploads of the same file get distinct names.
    pub async fn write(upload_dir: &str, file_name: &str, bytes: &[u8]) -> Result<Self, Error> {
        let upload_dir = PathBuf::from(upload_dir);
        tokio::fs::create_dir_all(&upload_dir).await.map_err(|e| {
            warn!("Failed to create upload directory: {:?}", e);
            Error {
                source: Some(Box::new(e)),
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                    "Failed to create upload directory".to_string(),
                )),
            }
        })?;

        // Keep only the final component of the client supplied name.
        let file_name = Path::new(file_name)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());

        let path = upload_dir.join(format!("{}-{}", Utc::now().timestamp_millis(), file_name));
        tokio::fs::write(&path, bytes).await.map_err(|e| {
            warn!("Failed to write upload to {}: {:?}", path.display(), e);
            Error {
                source: Some(Box::new(e)),
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                    "Failed to store the uploaded file".to_string(),
                )),
            }
        })?;

        debug!("Wrote {} byte upload to {}", bytes.len(), path.display());
        Ok(TempUpload { path })
    }

    /// Where the upload currently lives on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempUpload {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            warn!(
                "Failed to remove uploaded file {}: {}",
                self.path.display(),
                e
            );
        } else {
            debug!("Removed uploaded file {}", self.path.display());
        }
    }
}
