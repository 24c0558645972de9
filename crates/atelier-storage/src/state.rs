use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;

/// Load a JSON state file from local disk.
pub fn load_state<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(StorageError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_slice(&bytes)?)
}

/// Load a JSON state file, or `T::default()` when it does not exist yet.
pub fn load_state_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T, StorageError> {
    match load_state(path) {
        Err(StorageError::NotFound { .. }) => Ok(T::default()),
        other => other,
    }
}

/// Save a JSON state file. Writes to a sibling temp file then renames, so a
/// reader never observes a half-written file.
pub fn save_state<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    let json = serde_json::to_vec_pretty(value)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    std::fs::write(tmp_path, &json)?;
    std::fs::rename(tmp_path, path)?;

    tracing::debug!(path = %path.display(), bytes = json.len(), "state written");
    Ok(())
}

/// Remove a state file if present.
pub fn delete_state(path: &Path) -> Result<(), StorageError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
