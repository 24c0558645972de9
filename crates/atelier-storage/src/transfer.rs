//! Moving text in and out of the catalog: reading a user-chosen file,
//! writing a backup "download", and fetching a remote seed payload.
//!
//! Each call is one shot. Nothing here retries; the user re-runs the
//! command after a failure.

use std::path::{Path, PathBuf};

use crate::error::StorageError;

pub fn read_text_file(path: &Path) -> Result<String, StorageError> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            tracing::debug!(path = %path.display(), bytes = text.len(), "read text file");
            Ok(text)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(StorageError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Write `text` to `dir/filename`, creating `dir` if needed. Returns the
/// path written.
pub fn download_text(
    dir: &Path,
    filename: &str,
    mime_type: &str,
    text: &str,
) -> Result<PathBuf, StorageError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    std::fs::write(&path, text.as_bytes())?;
    tracing::info!(path = %path.display(), mime_type, bytes = text.len(), "file written");
    Ok(path)
}

/// GET `url` and return the body as text. Non-2xx responses are errors.
pub fn fetch_remote_text(url: &str) -> Result<String, StorageError> {
    let fetch_err = |e: ureq::Error| StorageError::Fetch {
        url: url.to_string(),
        message: e.to_string(),
    };

    let mut response = ureq::get(url).call().map_err(fetch_err)?;
    let text = response.body_mut().read_to_string().map_err(fetch_err)?;

    tracing::info!(url, bytes = text.len(), "fetched remote text");
    Ok(text)
}
